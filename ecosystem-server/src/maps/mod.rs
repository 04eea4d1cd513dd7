//! Google Maps API client.
//!
//! Geocoding and directions are relayed to the client unchanged. Driving
//! directions and the distance matrix are typed so road routes can be
//! summarised.

mod client;
mod error;
mod roads;
mod types;

pub use client::{MapsClient, MapsConfig};
pub use error::MapsError;
pub use roads::{TrafficLevel, fuel_cost, main_roads};
pub use types::{
    DirectionsResponse, DistanceMatrixElement, DistanceMatrixResponse, StepDto, TextValue,
};
