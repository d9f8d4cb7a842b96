use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub account_sid: String,
    pub auth_token: String,
    pub lookup_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            account_sid: std::env::var("TWILIO_ACCOUNT_SID")
                .map_err(|_| anyhow::anyhow!("TWILIO_ACCOUNT_SID environment variable required"))
                .and_then(|sid| {
                    if sid.trim().is_empty() {
                        anyhow::bail!("TWILIO_ACCOUNT_SID cannot be empty");
                    }
                    Ok(sid)
                })?,
            auth_token: std::env::var("TWILIO_AUTH_TOKEN")
                .map_err(|_| anyhow::anyhow!("TWILIO_AUTH_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("TWILIO_AUTH_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
            lookup_base_url: match std::env::var("TWILIO_LOOKUP_BASE_URL") {
                Ok(url) if !url.trim().is_empty() => {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("TWILIO_LOOKUP_BASE_URL must start with http:// or https://");
                    }
                    url
                }
                _ => "https://lookups.twilio.com".to_string(),
            },
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Lookup Base URL: {}", config.lookup_base_url);
        tracing::debug!(
            "Account SID: {}...",
            &config.account_sid[..8.min(config.account_sid.len())]
        );

        Ok(config)
    }
}
