use std::error::Error;
use std::fmt;

/// Errors raised by the lookup client.
///
/// These cover the local infrastructure tier only: transport failures and
/// undecodable bodies. A non-200 reply carrying a well-formed vendor error
/// body is an expected business outcome and is returned as a
/// `LookupOutcome::Failure` value, not through this type.
#[derive(Debug)]
pub enum LookupError {
    /// Connection, timeout, or body-read failure from the HTTP layer.
    Transport(reqwest::Error),
    /// The request URL could not be assembled.
    BadUrl(url::ParseError),
    /// A 200 response whose body is not a valid lookup result.
    DecodeResponse(serde_json::Error),
    /// A non-200 response whose body is not a valid vendor error payload.
    DecodeFailure {
        /// HTTP status the vendor answered with.
        status: u16,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Transport(e) => write!(f, "Transport error: {}", e),
            LookupError::BadUrl(e) => write!(f, "Invalid request URL: {}", e),
            LookupError::DecodeResponse(e) => {
                write!(f, "Failed to decode lookup response: {}", e)
            }
            LookupError::DecodeFailure { status, source } => {
                write!(f, "Failed to decode error body (status {}): {}", status, source)
            }
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LookupError::Transport(e) => Some(e),
            LookupError::BadUrl(e) => Some(e),
            LookupError::DecodeResponse(e) => Some(e),
            LookupError::DecodeFailure { source, .. } => Some(source),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err)
    }
}

impl From<url::ParseError> for LookupError {
    fn from(err: url::ParseError) -> Self {
        LookupError::BadUrl(err)
    }
}
