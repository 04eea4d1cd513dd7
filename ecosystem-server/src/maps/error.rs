//! Maps client error types.

/// Errors that can occur when talking to the Google Maps APIs.
///
/// Messages never contain request URLs, since the API key travels in the
/// query string.
#[derive(Debug, thiserror::Error)]
pub enum MapsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response was well-formed but the provider reported a failure
    #[error("{api} API error: {status}")]
    Status {
        api: &'static str,
        status: String,
        message: Option<String>,
    },

    /// Provider reported success but returned nothing usable
    #[error("{0} API returned no results")]
    NoResults(&'static str),

    /// Client could not be built from the given configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for MapsError {
    fn from(err: reqwest::Error) -> Self {
        MapsError::Http(err.without_url())
    }
}
