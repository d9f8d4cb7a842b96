use crate::config::Config;
use crate::errors::LookupError;
use crate::models::{ApiFailure, LookupOptions, LookupResponse};
use reqwest::StatusCode;
use std::time::Duration;

/// Outcome of a lookup round trip.
///
/// A non-200 vendor reply with a well-formed error body is an expected
/// business outcome (unknown number, unsupported add-on), so it is carried
/// here as a value rather than surfaced through `LookupError`.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    /// The vendor answered 200 with a lookup result.
    Success(LookupResponse),
    /// The vendor rejected the lookup and described why.
    Failure(ApiFailure),
}

impl LookupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success(_))
    }

    /// Splits the outcome into the conventional result/error pair.
    pub fn into_result(self) -> Result<LookupResponse, ApiFailure> {
        match self {
            LookupOutcome::Success(response) => Ok(response),
            LookupOutcome::Failure(failure) => Err(failure),
        }
    }
}

/// Client for the Twilio Lookup API phone-number resource.
///
/// See https://www.twilio.com/docs/lookup/api for the vendor documentation.
#[derive(Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
}

impl LookupClient {
    /// Creates a new `LookupClient`.
    ///
    /// # Arguments
    ///
    /// * `config` - Credentials and base URL, owned by the caller.
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(LookupError::Transport)?;

        Ok(Self {
            client,
            base_url: config.lookup_base_url.clone(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Looks up carrier, caller-name, and fraud metadata for a phone number.
    ///
    /// The number is passed to the vendor verbatim; formatting it (E.164, or
    /// national format plus a `country_code` option) is the caller's
    /// responsibility. All three option keys are sent on every request, empty
    /// when unset, which is what the vendor expects.
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The number to look up.
    /// * `options` - Enrichment selection and interpretation hints.
    ///
    /// # Returns
    ///
    /// * `Ok(LookupOutcome::Success)` on a 200 reply with a valid body.
    /// * `Ok(LookupOutcome::Failure)` on a non-200 reply with a valid vendor
    ///   error body.
    /// * `Err(LookupError)` on transport failure or an undecodable body.
    pub async fn lookup(
        &self,
        phone_number: &str,
        options: &LookupOptions,
    ) -> Result<LookupOutcome, LookupError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/v1/PhoneNumbers/{}", self.base_url, phone_number),
            options.as_query(),
        )
        .map_err(LookupError::BadUrl)?;

        tracing::info!("Looking up phone number: {}", phone_number);
        // Credentials travel in the Authorization header, never the URL
        tracing::debug!("Lookup URL: {}", url);

        let response = self
            .client
            .get(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(LookupError::Transport)?;

        if status != StatusCode::OK {
            tracing::warn!(
                "Lookup for {} returned status {}",
                phone_number,
                status
            );
            let failure: ApiFailure =
                serde_json::from_str(&body).map_err(|e| LookupError::DecodeFailure {
                    status: status.as_u16(),
                    source: e,
                })?;
            return Ok(LookupOutcome::Failure(failure));
        }

        let result: LookupResponse =
            serde_json::from_str(&body).map_err(LookupError::DecodeResponse)?;

        tracing::info!("Lookup completed for {}", phone_number);
        Ok(LookupOutcome::Success(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            account_sid: "ACxxxxxxxx".to_string(),
            auth_token: "token".to_string(),
            lookup_base_url: "https://lookups.twilio.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = LookupClient::new(&test_config());
        assert!(client.is_ok());
    }

    #[test]
    fn test_outcome_into_result() {
        let outcome = LookupOutcome::Success(LookupResponse::default());
        assert!(outcome.is_success());
        assert!(outcome.into_result().is_ok());

        let failure: ApiFailure = serde_json::from_str(
            r#"{"status": 404, "message": "The requested resource was not found"}"#,
        )
        .unwrap();
        let outcome = LookupOutcome::Failure(failure);
        assert!(!outcome.is_success());
        let err = outcome.into_result().unwrap_err();
        assert_eq!(err.status, 404);
    }

    #[test]
    fn test_request_url_carries_all_query_keys() {
        let config = test_config();
        let url = reqwest::Url::parse_with_params(
            &format!("{}/v1/PhoneNumbers/{}", config.lookup_base_url, "+15108675309"),
            LookupOptions::default().as_query(),
        )
        .unwrap();

        assert_eq!(url.path(), "/v1/PhoneNumbers/+15108675309");
        assert_eq!(url.query(), Some("AddOns=&CountryCode=&Type="));
    }
}
