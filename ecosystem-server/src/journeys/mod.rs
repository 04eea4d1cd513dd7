//! Commuter route summaries.
//!
//! Combines several upstream calls per route: trips and disruptions for
//! rail routes, live traffic and the driving path for road routes.

mod rail;
mod road;

pub use rail::{RailRoute, RouteResponse, rail_route, trip_date_time};
pub use road::{CarTrip, RoadRoute, road_route, summarise};
