//! Process configuration read from environment variables.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;

/// Default listen port.
const DEFAULT_PORT: u16 = 8000;

/// Default upstream request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Origins allowed by CORS when `ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "https://freekgorrissen.github.io",
];

/// Errors in the environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Everything the server needs to start.
#[derive(Clone)]
pub struct AppConfig {
    /// Google Maps API key (`GOOGLE_MAPS_API_KEY`)
    pub google_maps_api_key: String,
    /// NS subscription key (`NS_API_KEY`)
    pub ns_api_key: String,
    /// Listen address (`HOST`, `PORT`)
    pub addr: SocketAddr,
    /// CORS allowed origins (`ALLOWED_ORIGINS`, comma separated)
    pub allowed_origins: Vec<String>,
    /// Upstream request timeout (`UPSTREAM_TIMEOUT_SECS`)
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let google_maps_api_key =
            get("GOOGLE_MAPS_API_KEY").ok_or(ConfigError::Missing("GOOGLE_MAPS_API_KEY"))?;
        let ns_api_key = get("NS_API_KEY").ok_or(ConfigError::Missing("NS_API_KEY"))?;

        let host = match get("HOST") {
            Some(h) => h.trim().parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
                name: "HOST",
                message: e.to_string(),
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match get("PORT") {
            Some(p) => p.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = match get("ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(|o| {
                    origin_header(o)
                        .map(|_| o.to_string())
                        .map_err(|message| ConfigError::Invalid {
                            name: "ALLOWED_ORIGINS",
                            message: format!("{o:?}: {message}"),
                        })
                })
                .collect::<Result<Vec<String>, ConfigError>>()?,
            None => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        };

        let upstream_timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(t) => t.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "UPSTREAM_TIMEOUT_SECS",
                message: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            google_maps_api_key,
            ns_api_key,
            addr: SocketAddr::new(host, port),
            allowed_origins,
            upstream_timeout_secs,
        })
    }
}

/// Convert a CORS origin to a header value.
///
/// `*` is refused: credentials are allowed, and an origin list must not
/// contain a wildcard.
pub fn origin_header(origin: &str) -> Result<HeaderValue, String> {
    if origin == "*" {
        return Err("wildcard origin cannot be used with credentials".to_string());
    }
    HeaderValue::from_str(origin).map_err(|e| e.to_string())
}

// Keys stay out of logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_maps_api_key", &"<redacted>")
            .field("ns_api_key", &"<redacted>")
            .field("addr", &self.addr)
            .field("allowed_origins", &self.allowed_origins)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .finish()
    }
}
