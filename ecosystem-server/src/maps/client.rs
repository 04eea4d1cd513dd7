//! Google Maps HTTP client.
//!
//! Provides async methods for the geocoding, directions and distance
//! matrix web services. The API key is sent as the `key` query parameter,
//! so request URLs are never logged or put into errors.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::TravelMode;

use super::error::MapsError;
use super::types::{DirectionsResponse, DistanceMatrixResponse, STATUS_OK};

/// Default base URL for the Google Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Longest upstream error body we keep in an error message.
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the Maps client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// API key
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Maps API client.
#[derive(Clone)]
pub struct MapsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for MapsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl MapsClient {
    /// Create a new Maps client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        if config.api_key.is_empty() {
            return Err(MapsError::Config("API key must not be empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Geocode an address, returning the provider response unchanged.
    pub async fn geocode(&self, address: &str) -> Result<serde_json::Value, MapsError> {
        self.get_json("/geocode/json", &[("address", address)])
            .await
    }

    /// Directions between two places, returning the provider response
    /// unchanged.
    pub async fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<serde_json::Value, MapsError> {
        self.get_json(
            "/directions/json",
            &[
                ("origin", origin),
                ("destination", destination),
                ("mode", mode.as_str()),
            ],
        )
        .await
    }

    /// Driving directions, typed and checked for a successful status.
    pub async fn driving_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DirectionsResponse, MapsError> {
        let response: DirectionsResponse = self
            .get_json(
                "/directions/json",
                &[
                    ("origin", origin),
                    ("destination", destination),
                    ("mode", TravelMode::Driving.as_str()),
                ],
            )
            .await?;

        check_status("Directions", &response.status, response.error_message.as_deref())?;
        Ok(response)
    }

    /// Live driving distance and duration between two places.
    pub async fn distance_matrix(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceMatrixResponse, MapsError> {
        let response: DistanceMatrixResponse = self
            .get_json(
                "/distancematrix/json",
                &[
                    ("origins", origin),
                    ("destinations", destination),
                    ("mode", TravelMode::Driving.as_str()),
                    ("departure_time", "now"),
                    ("traffic_model", "best_guess"),
                ],
            )
            .await?;

        check_status(
            "Distance Matrix",
            &response.status,
            response.error_message.as_deref(),
        )?;
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MapsError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(path, ?params, "Maps request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MapsError::Api {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response.text().await?;
        debug!(path, bytes = body.len(), "Maps response");

        serde_json::from_str(&body).map_err(|e| MapsError::Json {
            message: e.to_string(),
        })
    }
}

fn check_status(api: &'static str, status: &str, message: Option<&str>) -> Result<(), MapsError> {
    if status == STATUS_OK {
        return Ok(());
    }

    warn!(api, status, message, "Maps provider returned an error status");
    Err(MapsError::Status {
        api,
        status: status.to_string(),
        message: message.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = MapsConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = MapsConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn empty_key_rejected() {
        assert!(matches!(
            MapsClient::new(MapsConfig::new("")),
            Err(MapsError::Config(_))
        ));
    }

    #[test]
    fn debug_hides_key() {
        let client = MapsClient::new(MapsConfig::new("secret-key")).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn check_status_ok() {
        assert!(check_status("Directions", "OK", None).is_ok());
    }

    #[test]
    fn check_status_error() {
        let err = check_status("Directions", "ZERO_RESULTS", None).unwrap_err();
        assert_eq!(err.to_string(), "Directions API error: ZERO_RESULTS");
    }
}
