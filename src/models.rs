use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The vendor sends explicit JSON nulls for enrichments that were not
/// requested or could not be resolved; decode those as zero values.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Which enrichment subsystem the vendor should query for a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupType {
    /// Carrier information (country/network codes, carrier name and type).
    Carrier,
    /// Caller identity information.
    CallerName,
}

impl LookupType {
    /// Query-string value the vendor expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupType::Carrier => "carrier",
            LookupType::CallerName => "caller-name",
        }
    }
}

/// Options sent alongside a lookup request.
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    /// Add-on products to invoke, as the vendor's comma-separated list.
    pub add_ons: Option<String>,
    /// ISO country code hint for interpreting national-format numbers.
    pub country_code: Option<String>,
    /// Enrichment type to query.
    pub lookup_type: Option<LookupType>,
}

impl LookupOptions {
    /// Query parameters for the lookup request.
    ///
    /// The vendor expects all three keys on every request, so unset options
    /// serialize as empty-string values rather than being omitted.
    pub fn as_query(&self) -> [(&'static str, String); 3] {
        [
            ("AddOns", self.add_ons.clone().unwrap_or_default()),
            ("CountryCode", self.country_code.clone().unwrap_or_default()),
            (
                "Type",
                self.lookup_type
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_default(),
            ),
        ]
    }
}

// ============ Lookup Response Models ============

/// Caller identity record from the caller-name enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallerName {
    /// Name on record for the subscriber.
    #[serde(deserialize_with = "null_default")]
    pub caller_name: String,
    /// Kind of subscriber (e.g. "CONSUMER", "BUSINESS").
    #[serde(deserialize_with = "null_default")]
    pub caller_type: String,
    /// Vendor error code; zero when the enrichment succeeded or was not requested.
    #[serde(deserialize_with = "null_default")]
    pub error_code: i64,
}

/// Carrier record from the carrier enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Carrier {
    /// Mobile country code of the carrier's home country.
    #[serde(deserialize_with = "null_default")]
    pub mobile_country_code: String,
    /// Mobile network code of the carrier's network.
    #[serde(deserialize_with = "null_default")]
    pub mobile_network_code: String,
    /// Carrier name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Line type (e.g. "mobile", "landline", "voip").
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    /// Vendor error code; zero when the enrichment succeeded or was not requested.
    #[serde(deserialize_with = "null_default")]
    pub error_code: i64,
}

/// Fraud-signal record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fraud {
    /// Mobile country code of the carrier's home country.
    #[serde(deserialize_with = "null_default")]
    pub mobile_country_code: String,
    /// Mobile network code of the carrier's network.
    #[serde(deserialize_with = "null_default")]
    pub mobile_network_code: String,
    /// Advanced line type classification.
    #[serde(deserialize_with = "null_default")]
    pub advanced_line_type: String,
    /// Name on record for the subscriber.
    #[serde(deserialize_with = "null_default")]
    pub caller_name: String,
    /// Whether the number has been ported between carriers.
    #[serde(deserialize_with = "null_default")]
    pub is_ported: bool,
    /// Date of the most recent porting event.
    #[serde(deserialize_with = "null_default")]
    pub last_ported_date: String,
    /// Vendor error code; zero when the enrichment succeeded or was not requested.
    #[serde(deserialize_with = "null_default")]
    pub error_code: i64,
}

/// Add-on invocation record.
///
/// `results` is defined by whichever third-party add-ons were requested and
/// stays an open JSON tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOns {
    /// Overall add-on invocation status.
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    /// Human-readable status message.
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    /// Numeric status code.
    #[serde(deserialize_with = "null_default")]
    pub code: i64,
    /// Per-add-on payloads, shape owned by the add-on vendors.
    pub results: Value,
}

/// Successful response to a phone number lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupResponse {
    /// Caller identity record; zero-valued unless caller-name was requested.
    #[serde(deserialize_with = "null_default")]
    pub caller_name: CallerName,
    /// Carrier record; zero-valued unless carrier was requested.
    #[serde(deserialize_with = "null_default")]
    pub carrier: Carrier,
    /// Fraud-signal record; zero-valued unless requested.
    #[serde(deserialize_with = "null_default")]
    pub fraud: Fraud,
    /// Add-on results; zero-valued unless add-ons were requested.
    #[serde(deserialize_with = "null_default")]
    pub add_ons: AddOns,
    /// ISO country code of the number.
    pub country_code: String,
    /// Number in national format.
    pub national_format: String,
    /// Number in E.164 format.
    pub phone_number: String,
    /// Canonical URL of this lookup resource.
    pub url: String,
}

/// Error payload the vendor returns on a non-200 status.
///
/// Only the fields the client inspects are typed; everything else the vendor
/// sends is kept in `raw` so a re-serialized failure preserves the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    /// HTTP status echoed in the body.
    #[serde(default)]
    pub status: u16,
    /// Human-readable description of the failure.
    #[serde(default)]
    pub message: String,
    /// Vendor-specific error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Link to the vendor's documentation for this error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    /// Any additional fields, preserved for round-tripping.
    #[serde(flatten)]
    pub raw: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_type_query_values() {
        assert_eq!(LookupType::Carrier.as_str(), "carrier");
        assert_eq!(LookupType::CallerName.as_str(), "caller-name");
    }

    #[test]
    fn test_empty_options_emit_all_three_keys() {
        let query = LookupOptions::default().as_query();
        assert_eq!(query[0], ("AddOns", String::new()));
        assert_eq!(query[1], ("CountryCode", String::new()));
        assert_eq!(query[2], ("Type", String::new()));
    }

    #[test]
    fn test_set_options_emit_values() {
        let options = LookupOptions {
            add_ons: Some("whitepages_pro_caller_id".to_string()),
            country_code: Some("US".to_string()),
            lookup_type: Some(LookupType::CallerName),
        };
        let query = options.as_query();
        assert_eq!(query[0].1, "whitepages_pro_caller_id");
        assert_eq!(query[1].1, "US");
        assert_eq!(query[2].1, "caller-name");
    }

    #[test]
    fn test_omitted_records_decode_as_zero_values() {
        let body = json!({
            "carrier": {
                "mobile_country_code": "310",
                "mobile_network_code": "456",
                "name": "verizon",
                "type": "mobile",
                "error_code": null
            },
            "country_code": "US",
            "national_format": "(510) 867-5310",
            "phone_number": "+15108675310",
            "url": "https://lookups.twilio.com/v1/PhoneNumbers/+15108675310"
        });

        let response: LookupResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.carrier.name, "verizon");
        assert_eq!(response.carrier.kind, "mobile");
        assert_eq!(response.carrier.error_code, 0);
        assert_eq!(response.caller_name, CallerName::default());
        assert_eq!(response.fraud, Fraud::default());
        assert_eq!(response.add_ons.results, Value::Null);
    }

    #[test]
    fn test_null_records_decode_as_zero_values() {
        let body = json!({
            "caller_name": null,
            "carrier": {
                "mobile_country_code": null,
                "mobile_network_code": null,
                "name": "Pacific Bell",
                "type": "landline",
                "error_code": null
            },
            "fraud": null,
            "add_ons": null,
            "country_code": "US",
            "national_format": "(510) 867-5309",
            "phone_number": "+15108675309",
            "url": "https://lookups.twilio.com/v1/PhoneNumbers/+15108675309"
        });

        let response: LookupResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.caller_name.caller_name, "");
        assert_eq!(response.carrier.mobile_country_code, "");
        assert_eq!(response.carrier.kind, "landline");
        assert!(!response.fraud.is_ported);
        assert_eq!(response.fraud.last_ported_date, "");
    }

    #[test]
    fn test_api_failure_preserves_unknown_fields() {
        let body = json!({
            "code": 20404,
            "message": "The requested resource was not found",
            "more_info": "https://www.twilio.com/docs/errors/20404",
            "status": 404,
            "details": {"hint": "check the number"}
        });

        let failure: ApiFailure = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(failure.status, 404);
        assert_eq!(failure.code, Some(20404));

        let round_tripped = serde_json::to_value(&failure).unwrap();
        assert_eq!(round_tripped, body);
    }
}
