//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{InvalidStationCode, StationCode};
use crate::journeys::{RailRoute, RoadRoute};

/// Number of trips returned per rail route unless the client asks otherwise.
const DEFAULT_MAX_JOURNEYS: usize = 5;

/// Query for `GET /api/maps/geocode`.
#[derive(Debug, Deserialize)]
pub struct GeocodeRequest {
    /// Free-form address
    pub address: Option<String>,
}

/// Query for `GET /api/maps/directions`.
#[derive(Debug, Deserialize)]
pub struct DirectionsRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,

    /// driving, walking, bicycling or transit (default)
    pub mode: Option<String>,
}

/// Body of `POST /api/trains/rail_routes`.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub routes: Vec<Route>,

    /// Trips to return per route
    #[serde(default = "default_max_journeys")]
    pub max_journeys: usize,

    /// Travel every route in the opposite direction
    #[serde(default)]
    pub is_reversed: bool,
}

fn default_max_journeys() -> usize {
    DEFAULT_MAX_JOURNEYS
}

/// A rail route as the client stores it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub from_station: String,
    pub to_station: String,
    pub from_station_code: Option<String>,
    pub to_station_code: Option<String>,
}

impl TryFrom<Route> for RailRoute {
    type Error = InvalidStationCode;

    /// Blank codes count as absent.
    fn try_from(route: Route) -> Result<Self, Self::Error> {
        let parse = |code: Option<String>| {
            code.filter(|c| !c.trim().is_empty())
                .map(|c| StationCode::parse_normalized(&c))
                .transpose()
        };

        Ok(RailRoute {
            from_station: route.from_station,
            to_station: route.to_station,
            from_code: parse(route.from_station_code)?,
            to_code: parse(route.to_station_code)?,
        })
    }
}

/// Body of `POST /api/car/road_routes`.
#[derive(Debug, Deserialize)]
pub struct CarRouteRequest {
    pub routes: Vec<CarRoute>,

    /// Drive every route in the opposite direction
    #[serde(default)]
    pub is_reversed: bool,
}

/// A road route as the client stores it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRoute {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub origin_name: String,
    pub destination_name: String,
    pub name: String,
}

impl From<CarRoute> for RoadRoute {
    fn from(route: CarRoute) -> Self {
        RoadRoute {
            id: route.id,
            name: route.name,
            origin: route.origin,
            destination: route.destination,
            origin_name: route.origin_name,
            destination_name: route.destination_name,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
