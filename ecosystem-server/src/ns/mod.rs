//! NS (Dutch railways) API client.
//!
//! Covers the reisinformatie API (stations, departures, trips) and the
//! disruptions API. Departure boards are relayed as NS sends them; the
//! station list, trips and disruptions are reshaped for the client.

mod client;
mod convert;
mod error;
mod types;

pub use client::{NsClient, NsConfig};
pub use convert::{active_disruptions, convert_stations, convert_trips};
pub use error::NsError;
pub use types::{DisruptionsResponse, StationsResponse, TripsResponse};
