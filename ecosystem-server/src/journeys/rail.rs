//! Train trips and disruptions for a commuter route.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Disruption, StationCode, Trip};
use crate::ns::{NsClient, NsError, active_disruptions, convert_trips};

/// A rail route between two stations.
///
/// Stations are given by name (or code) for trip planning; the optional
/// codes are used to look up disruptions.
#[derive(Debug, Clone, PartialEq)]
pub struct RailRoute {
    pub from_station: String,
    pub to_station: String,
    pub from_code: Option<StationCode>,
    pub to_code: Option<StationCode>,
}

impl RailRoute {
    /// The same route travelled the other way.
    pub fn reversed(self) -> Self {
        Self {
            from_station: self.to_station,
            to_station: self.from_station,
            from_code: self.to_code,
            to_code: self.from_code,
        }
    }

    /// Key the client uses to match results to its routes.
    pub fn key(&self) -> String {
        format!("{}-{}", self.from_station, self.to_station)
    }

    fn station_codes(&self) -> impl Iterator<Item = &StationCode> {
        self.from_code.iter().chain(self.to_code.iter())
    }
}

/// Trips and disruptions for one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub route_key: String,
    pub trips: Vec<Trip>,
    pub disruptions: Vec<Disruption>,
}

/// Format a departure time the way the trips API expects it.
pub fn trip_date_time(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Fetch up to `max_journeys` trips for a route, plus active disruptions at
/// its stations.
///
/// A failing trips call fails the route. A failing disruptions call only
/// drops that station's disruptions.
pub async fn rail_route(
    ns: &NsClient,
    route: &RailRoute,
    max_journeys: usize,
    date_time: &str,
) -> Result<RouteResponse, NsError> {
    let trips = ns.trips(&route.from_station, &route.to_station, date_time);
    let disruptions = join_all(route.station_codes().map(|code| station_disruptions(ns, code)));

    let (trips, disruptions) = futures::join!(trips, disruptions);
    let trips = convert_trips(trips?, max_journeys);
    let disruptions: Vec<Disruption> = disruptions.into_iter().flatten().collect();

    debug!(
        route = %route.key(),
        trips = trips.len(),
        disruptions = disruptions.len(),
        "rail route fetched"
    );

    Ok(RouteResponse {
        route_key: route.key(),
        trips,
        disruptions,
    })
}

async fn station_disruptions(ns: &NsClient, code: &StationCode) -> Vec<Disruption> {
    match ns.station_disruptions(code).await {
        Ok(response) => active_disruptions(response),
        Err(e) => {
            warn!(station = %code, error = %e, "skipping disruptions");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn route() -> RailRoute {
        RailRoute {
            from_station: "Utrecht Centraal".into(),
            to_station: "Amsterdam Centraal".into(),
            from_code: Some(StationCode::parse("UT").unwrap()),
            to_code: None,
        }
    }

    #[test]
    fn key_joins_station_names() {
        assert_eq!(route().key(), "Utrecht Centraal-Amsterdam Centraal");
    }

    #[test]
    fn reversed_swaps_names_and_codes() {
        let reversed = route().reversed();
        assert_eq!(reversed.from_station, "Amsterdam Centraal");
        assert_eq!(reversed.to_station, "Utrecht Centraal");
        assert!(reversed.from_code.is_none());
        assert_eq!(reversed.to_code.unwrap().as_str(), "UT");
    }

    #[test]
    fn reversing_twice_is_identity() {
        assert_eq!(route().reversed().reversed(), route());
    }

    #[test]
    fn station_codes_skip_missing() {
        let r = route();
        let codes: Vec<_> = r.station_codes().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["UT"]);
    }

    #[test]
    fn date_time_format() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 7, 5, 9).unwrap();
        assert_eq!(trip_date_time(now), "2026-10-19T07:05:09");
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = RouteResponse {
            route_key: "A-B".into(),
            trips: vec![],
            disruptions: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["routeKey"], "A-B");
        assert!(json["trips"].as_array().unwrap().is_empty());
    }
}
