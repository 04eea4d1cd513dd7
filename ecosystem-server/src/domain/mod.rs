//! Domain types for the ecosystem API.
//!
//! Validated request parameters and the train records served to clients.
//! Parameter types enforce their invariants at construction time, so
//! handlers that receive them can pass them upstream as-is.

mod station_code;
mod train;
mod travel_mode;

pub use station_code::{InvalidStationCode, StationCode};
pub use train::{Disruption, Impact, Leg, Product, TrainStation, Trip};
pub use travel_mode::{InvalidTravelMode, TravelMode};
