//! Conversion from NS DTOs to the records served to clients.

use tracing::debug;

use crate::domain::{Disruption, Impact, Leg, Product, TrainStation, Trip};

use super::types::{
    DisruptionsResponse, LegDto, StationDto, StationsResponse, TripDto, TripsResponse,
};

/// Fallback name for legs and products NS leaves unnamed.
const DEFAULT_PRODUCT_NAME: &str = "Train";

/// Fallback title for disruptions without one.
const DEFAULT_DISRUPTION_TITLE: &str = "Unknown disruption";

/// Convert the station list, skipping records without code, long name or
/// coordinates.
pub fn convert_stations(response: StationsResponse) -> Vec<TrainStation> {
    let total = response.payload.len();
    let stations: Vec<TrainStation> = response
        .payload
        .into_iter()
        .filter_map(convert_station)
        .collect();

    if stations.len() < total {
        debug!(
            skipped = total - stations.len(),
            "skipped incomplete station records"
        );
    }

    stations
}

fn convert_station(dto: StationDto) -> Option<TrainStation> {
    Some(TrainStation {
        code: dto.code?,
        name: dto.namen?.lang?,
        lat: dto.lat?,
        lng: dto.lng?,
    })
}

/// Convert the first `max_journeys` trips.
pub fn convert_trips(response: TripsResponse, max_journeys: usize) -> Vec<Trip> {
    response
        .trips
        .unwrap_or_default()
        .into_iter()
        .take(max_journeys)
        .enumerate()
        .map(|(idx, trip)| convert_trip(idx, trip))
        .collect()
}

fn convert_trip(idx: usize, dto: TripDto) -> Trip {
    Trip {
        idx,
        planned_duration_in_minutes: dto.planned_duration_in_minutes.unwrap_or(0),
        actual_duration_in_minutes: dto.actual_duration_in_minutes,
        transfers: dto.transfers.unwrap_or(0),
        status: dto.status.unwrap_or_else(|| "NORMAL".to_string()),
        legs: dto
            .legs
            .unwrap_or_default()
            .into_iter()
            .map(convert_leg)
            .collect(),
        crowd_forecast: dto.crowd_forecast,
        punctuality: dto.punctuality,
    }
}

fn convert_leg(dto: LegDto) -> Leg {
    let product = dto.product.as_ref();
    let origin = dto.origin.as_ref();

    let name = first_non_empty([
        product.and_then(|p| p.display_name.as_deref()),
        product.and_then(|p| p.long_category_name.as_deref()),
    ])
    .unwrap_or(DEFAULT_PRODUCT_NAME);

    let planned_departure_time = first_non_empty([
        origin.and_then(|o| o.planned_date_time.as_deref()),
        origin.and_then(|o| o.actual_date_time.as_deref()),
    ])
    .unwrap_or_default();

    Leg {
        name: name.to_string(),
        direction: dto.direction.clone().unwrap_or_default(),
        planned_departure_time: planned_departure_time.to_string(),
        planned_departure_track: origin.and_then(|o| o.planned_track.clone()),
        product: product.map(|p| Product {
            long_category_name: first_non_empty([p.long_category_name.as_deref()])
                .unwrap_or(DEFAULT_PRODUCT_NAME)
                .to_string(),
            number: p.number.clone().unwrap_or_default(),
        }),
    }
}

/// Keep only the active disruptions.
pub fn active_disruptions(response: DisruptionsResponse) -> Vec<Disruption> {
    response
        .payload
        .and_then(|p| p.disruptions)
        .unwrap_or_default()
        .into_iter()
        .filter(|d| d.is_active == Some(true))
        .map(|d| Disruption {
            id: d.id.unwrap_or_default(),
            title: d
                .title
                .unwrap_or_else(|| DEFAULT_DISRUPTION_TITLE.to_string()),
            is_active: true,
            impact: Impact {
                value: d.impact.and_then(|i| i.value).unwrap_or(1),
            },
        })
        .collect()
}

/// First value that is present and non-empty.
fn first_non_empty<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(json: &str) -> T {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn stations_skip_incomplete_records() {
        let response: StationsResponse = parse(
            r#"{"payload": [
                {"code": "UT", "namen": {"lang": "Utrecht Centraal"}, "lat": 52.09, "lng": 5.11},
                {"code": "XX", "namen": {"kort": "Nowhere"}, "lat": 1.0, "lng": 2.0},
                {"namen": {"lang": "No Code"}, "lat": 1.0, "lng": 2.0}
            ]}"#,
        );

        let stations = convert_stations(response);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].code, "UT");
        assert_eq!(stations[0].name, "Utrecht Centraal");
        assert_eq!(stations[0].lat, 52.09);
    }

    #[test]
    fn trips_limited_and_indexed() {
        let response: TripsResponse = parse(
            r#"{"trips": [
                {"plannedDurationInMinutes": 30},
                {"plannedDurationInMinutes": 31},
                {"plannedDurationInMinutes": 32}
            ]}"#,
        );

        let trips = convert_trips(response, 2);
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].idx, 0);
        assert_eq!(trips[1].idx, 1);
        assert_eq!(trips[1].planned_duration_in_minutes, 31);
    }

    #[test]
    fn trip_defaults() {
        let response: TripsResponse = parse(r#"{"trips": [{}]}"#);

        let trip = &convert_trips(response, 5)[0];
        assert_eq!(trip.planned_duration_in_minutes, 0);
        assert_eq!(trip.transfers, 0);
        assert_eq!(trip.status, "NORMAL");
        assert!(trip.legs.is_empty());
        assert!(trip.actual_duration_in_minutes.is_none());
    }

    #[test]
    fn missing_trips_is_empty() {
        let response: TripsResponse = parse("{}");
        assert!(convert_trips(response, 5).is_empty());
    }

    #[test]
    fn leg_prefers_display_name() {
        let leg: LegDto = parse(
            r#"{"direction": "Den Haag Centraal",
                "product": {"displayName": "NS Intercity", "longCategoryName": "Intercity", "number": "2145"},
                "origin": {"plannedDateTime": "2026-10-19T10:00:00+0200", "plannedTrack": "7"}}"#,
        );

        let leg = convert_leg(leg);
        assert_eq!(leg.name, "NS Intercity");
        assert_eq!(leg.direction, "Den Haag Centraal");
        assert_eq!(leg.planned_departure_time, "2026-10-19T10:00:00+0200");
        assert_eq!(leg.planned_departure_track.as_deref(), Some("7"));
        let product = leg.product.unwrap();
        assert_eq!(product.long_category_name, "Intercity");
        assert_eq!(product.number, "2145");
    }

    #[test]
    fn leg_falls_back_on_empty_values() {
        let leg: LegDto = parse(
            r#"{"product": {"displayName": "", "longCategoryName": ""},
                "origin": {"plannedDateTime": "", "actualDateTime": "2026-10-19T10:02:00+0200"}}"#,
        );

        let leg = convert_leg(leg);
        assert_eq!(leg.name, "Train");
        assert_eq!(leg.direction, "");
        assert_eq!(leg.planned_departure_time, "2026-10-19T10:02:00+0200");
        let product = leg.product.unwrap();
        assert_eq!(product.long_category_name, "Train");
        assert_eq!(product.number, "");
    }

    #[test]
    fn leg_without_product_or_origin() {
        let leg = convert_leg(parse("{}"));
        assert_eq!(leg.name, "Train");
        assert_eq!(leg.planned_departure_time, "");
        assert!(leg.planned_departure_track.is_none());
        assert!(leg.product.is_none());
    }

    #[test]
    fn only_active_disruptions_kept() {
        let response: DisruptionsResponse = parse(
            r#"{"payload": {"disruptions": [
                {"id": "1", "title": "Storing", "isActive": true, "impact": {"value": 4}},
                {"id": "2", "title": "Gepland", "isActive": false},
                {"id": "3", "isActive": true}
            ]}}"#,
        );

        let disruptions = active_disruptions(response);
        assert_eq!(disruptions.len(), 2);
        assert_eq!(disruptions[0].impact.value, 4);
        assert_eq!(disruptions[1].id, "3");
        assert_eq!(disruptions[1].title, "Unknown disruption");
        assert_eq!(disruptions[1].impact.value, 1);
        assert!(disruptions.iter().all(|d| d.is_active));
    }
}
