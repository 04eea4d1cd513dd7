//! NS HTTP client.
//!
//! Provides async methods for the NS reisinformatie and disruptions APIs.
//! Authentication is a subscription key sent on every request.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{StationCode, TrainStation};

use super::convert::convert_stations;
use super::error::NsError;
use super::types::{DisruptionsResponse, StationsResponse, TripsResponse};

/// Default base URL for the NS API gateway.
const DEFAULT_BASE_URL: &str = "https://gateway.apiportal.ns.nl";

/// Header NS uses for the subscription key.
const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

/// Longest upstream error body we keep in an error message.
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the NS client.
#[derive(Debug, Clone)]
pub struct NsConfig {
    /// Subscription key
    pub api_key: String,
    /// Base URL for the API (defaults to the production gateway)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NsConfig {
    /// Create a new config with the given subscription key.
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

/// NS API client.
#[derive(Debug, Clone)]
pub struct NsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NsClient {
    /// Create a new NS client with the given configuration.
    pub fn new(config: NsConfig) -> Result<Self, NsError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| NsError::Config("invalid API key format".to_string()))?;
        headers.insert(HeaderName::from_static(SUBSCRIPTION_KEY_HEADER), api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all stations, reshaped for the client.
    pub async fn stations(&self) -> Result<Vec<TrainStation>, NsError> {
        let response: StationsResponse = self
            .get_json("/reisinformatie-api/api/v2/stations", &[])
            .await?;

        Ok(convert_stations(response))
    }

    /// Fetch the departure board for a station, as NS returns it.
    ///
    /// Returns `NsError::NotFound` if NS rejects the station code.
    pub async fn departures(&self, station: &StationCode) -> Result<serde_json::Value, NsError> {
        self.get_json(
            "/reisinformatie-api/api/v2/departures",
            &[("station", station.as_str())],
        )
        .await
    }

    /// Plan trips between two stations departing at `date_time`.
    ///
    /// `from` and `to` may be station codes or station names; NS accepts
    /// both.
    pub async fn trips(
        &self,
        from: &str,
        to: &str,
        date_time: &str,
    ) -> Result<TripsResponse, NsError> {
        self.get_json(
            "/reisinformatie-api/api/v3/trips",
            &[
                ("fromStation", from),
                ("toStation", to),
                ("dateTime", date_time),
                ("searchForArrival", "false"),
            ],
        )
        .await
    }

    /// Fetch current disruptions affecting a station.
    pub async fn station_disruptions(
        &self,
        station: &StationCode,
    ) -> Result<DisruptionsResponse, NsError> {
        let path = format!("/disruptions/v3/station/{}", station.as_str());
        self.get_json(&path, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, NsError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "NS request");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(NsError::Unauthorized);
        }

        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            return Err(NsError::NotFound(truncate(&body)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NsError::Api {
                status: status.as_u16(),
                message: truncate(&body),
            });
        }

        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "NS response");

        serde_json::from_str(&body).map_err(|e| NsError::Json {
            message: e.to_string(),
        })
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}
