//! NS client error types.

/// Errors that can occur when talking to the NS API.
#[derive(Debug, thiserror::Error)]
pub enum NsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Subscription key rejected
    #[error("unauthorized: check NS_API_KEY")]
    Unauthorized,

    /// NS does not know the requested resource (usually a station code)
    #[error("not found: {0}")]
    NotFound(String),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client could not be built from the given configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NsError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized: check NS_API_KEY");

        let err = NsError::NotFound("station XYZ".into());
        assert_eq!(err.to_string(), "not found: station XYZ");

        let err = NsError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = NsError::Json {
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("expected value"));
    }
}
