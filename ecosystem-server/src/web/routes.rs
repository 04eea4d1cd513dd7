//! HTTP route handlers.

use std::time::Duration;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderValue, Method},
    routing::{get, post},
};
use chrono::Utc;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::origin_header;
use crate::domain::{StationCode, TrainStation, TravelMode};
use crate::journeys::{
    CarTrip, RailRoute, RoadRoute, RouteResponse, rail_route, road_route, trip_date_time,
};
use crate::ns::NsError;

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// How long browsers may cache a CORS preflight response.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Create the application router.
///
/// `allowed_origins` are the browser origins permitted by CORS.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/train/stations", get(train_stations))
        .route("/api/train/departures/:station_code", get(train_departures))
        .route("/api/maps/geocode", get(geocode))
        .route("/api/maps/directions", get(directions))
        .route("/api/trains/rail_routes", post(rail_routes))
        .route("/api/car/road_routes", post(road_routes))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the client application.
///
/// Credentials are allowed, so origins must be listed explicitly and
/// request headers are mirrored rather than wildcarded.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin_header(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All NS stations.
async fn train_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrainStation>>, AppError> {
    let stations = state
        .ns
        .stations()
        .await
        .map_err(|e| AppError::ns("Error fetching train stations", e))?;

    Ok(Json(stations))
}

/// Departure board for one station, relayed from NS.
async fn train_departures(
    State(state): State<AppState>,
    Path(station_code): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let code = StationCode::parse_normalized(&station_code).map_err(|e| AppError::BadRequest {
        message: format!("Invalid station code '{station_code}': {e}"),
    })?;

    let departures = state.ns.departures(&code).await.map_err(|e| match e {
        NsError::NotFound(_) => AppError::NotFound {
            message: format!("Unknown station code: {code}"),
        },
        e => AppError::ns("Error fetching departures", e),
    })?;

    Ok(Json(departures))
}

/// Geocode an address, relayed from Google Maps.
async fn geocode(
    State(state): State<AppState>,
    Query(req): Query<GeocodeRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let address = required("address", req.address)?;

    let result = state
        .maps
        .geocode(&address)
        .await
        .map_err(|e| AppError::maps("Error geocoding address", e))?;

    Ok(Json(result))
}

/// Directions between two places, relayed from Google Maps.
async fn directions(
    State(state): State<AppState>,
    Query(req): Query<DirectionsRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let origin = required("origin", req.origin)?;
    let destination = required("destination", req.destination)?;
    let mode = match req.mode.filter(|m| !m.trim().is_empty()) {
        Some(m) => m
            .parse::<TravelMode>()
            .map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?,
        None => TravelMode::default(),
    };

    let result = state
        .maps
        .directions(&origin, &destination, mode)
        .await
        .map_err(|e| AppError::maps("Error getting directions", e))?;

    Ok(Json(result))
}

/// Trips and disruptions for each of the client's rail routes.
async fn rail_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<RouteResponse>>, AppError> {
    let RouteRequest {
        routes,
        max_journeys,
        is_reversed,
    } = parse_body(&body)?;

    let routes = routes
        .into_iter()
        .map(|r| -> Result<RailRoute, AppError> {
            let route = RailRoute::try_from(r).map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;
            Ok(if is_reversed { route.reversed() } else { route })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let date_time = trip_date_time(Utc::now());
    let responses = try_join_all(
        routes
            .iter()
            .map(|route| rail_route(&state.ns, route, max_journeys, &date_time)),
    )
    .await
    .map_err(|e| AppError::ns("Error fetching train routes", e))?;

    Ok(Json(responses))
}

/// Live driving summaries for each of the client's road routes.
async fn road_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<CarTrip>>, AppError> {
    let CarRouteRequest {
        routes,
        is_reversed,
    } = parse_body(&body)?;

    let routes: Vec<RoadRoute> = routes
        .into_iter()
        .map(RoadRoute::from)
        .map(|route| if is_reversed { route.reversed() } else { route })
        .collect();

    let trips = try_join_all(routes.iter().map(|route| road_route(&state.maps, route)))
        .await
        .map_err(|e| AppError::maps("Error fetching car routes", e))?;

    Ok(Json(trips))
}

/// Parse a JSON body ourselves so a bad body gets our error format.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(bytes = body.len(), error = %e, "invalid JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// A query parameter that must be present and non-blank.
fn required(name: &str, value: Option<String>) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: format!("Missing required query parameter: {name}"),
        })
}
