//! Train records as served to the client application.
//!
//! Field names follow the client's camelCase contract.

use serde::Serialize;

/// A station in the station list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainStation {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A single trip option between two stations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Position of this trip in the upstream result list
    pub idx: usize,
    pub planned_duration_in_minutes: i64,
    pub actual_duration_in_minutes: Option<i64>,
    pub transfers: i64,
    pub status: String,
    pub legs: Vec<Leg>,
    pub crowd_forecast: Option<String>,
    pub punctuality: Option<f64>,
}

/// One train leg of a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub name: String,
    pub direction: String,
    pub planned_departure_time: String,
    pub planned_departure_track: Option<String>,
    pub product: Option<Product>,
}

/// Train category and number, e.g. "Intercity" 3045.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub long_category_name: String,
    pub number: String,
}

/// An active disruption at a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    pub id: String,
    pub title: String,
    pub is_active: bool,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Impact {
    pub value: i64,
}
