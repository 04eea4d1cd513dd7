//! Google Maps API response DTOs.
//!
//! Only the distance matrix and directions fields used for road routes are
//! typed here. Geocode and transit directions are relayed as raw JSON.

use serde::Deserialize;

/// Provider-level status meaning the request succeeded.
pub const STATUS_OK: &str = "OK";

/// Response from `GET /distancematrix/json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DistanceMatrixResponse {
    pub status: String,
    pub error_message: Option<String>,
    pub rows: Vec<DistanceMatrixRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DistanceMatrixRow {
    pub elements: Vec<DistanceMatrixElement>,
}

/// One origin/destination pair in the matrix.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DistanceMatrixElement {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub duration_in_traffic: Option<TextValue>,
}

/// A human-readable text with its numeric value (metres or seconds).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

/// Response from `GET /directions/json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectionsResponse {
    pub status: String,
    pub error_message: Option<String>,
    pub routes: Vec<RouteDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouteDto {
    pub legs: Vec<RouteLegDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouteLegDto {
    pub steps: Vec<StepDto>,
}

/// One manoeuvre; the instructions are HTML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StepDto {
    pub html_instructions: String,
}

impl DistanceMatrixResponse {
    /// The single element of a one-origin, one-destination request.
    pub fn first_element(&self) -> Option<&DistanceMatrixElement> {
        self.rows.first()?.elements.first()
    }
}

impl DirectionsResponse {
    /// Steps of the first leg of the first route.
    pub fn first_leg_steps(&self) -> Option<&[StepDto]> {
        Some(&self.routes.first()?.legs.first()?.steps)
    }
}
