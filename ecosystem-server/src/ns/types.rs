//! NS API response DTOs.
//!
//! These types map the parts of the NS reisinformatie and disruptions
//! JSON responses we reshape. Everything is `Option` because NS omits
//! fields freely, and a missing field must not fail the whole response.

use serde::Deserialize;

/// Response from `GET /reisinformatie-api/api/v2/stations`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StationsResponse {
    pub payload: Vec<StationDto>,
}

/// A station record as NS sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StationDto {
    pub code: Option<String>,
    pub namen: Option<StationNames>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Station names; NS also sends `middel` and `kort` variants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StationNames {
    pub lang: Option<String>,
}

/// Response from `GET /reisinformatie-api/api/v3/trips`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TripsResponse {
    pub trips: Option<Vec<TripDto>>,
}

/// One trip advice.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TripDto {
    pub planned_duration_in_minutes: Option<i64>,
    pub actual_duration_in_minutes: Option<i64>,
    pub transfers: Option<i64>,
    pub status: Option<String>,
    pub legs: Option<Vec<LegDto>>,
    pub crowd_forecast: Option<String>,
    pub punctuality: Option<f64>,
}

/// One leg of a trip.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegDto {
    pub direction: Option<String>,
    pub product: Option<ProductDto>,
    pub origin: Option<StopDto>,
}

/// The train product running a leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductDto {
    pub display_name: Option<String>,
    pub long_category_name: Option<String>,
    pub number: Option<String>,
}

/// Origin or destination stop of a leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StopDto {
    pub planned_date_time: Option<String>,
    pub actual_date_time: Option<String>,
    pub planned_track: Option<String>,
}

/// Response from `GET /disruptions/v3/station/{code}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisruptionsResponse {
    pub payload: Option<DisruptionsPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisruptionsPayload {
    pub disruptions: Option<Vec<DisruptionDto>>,
}

/// A disruption or maintenance notice.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisruptionDto {
    pub id: Option<String>,
    pub title: Option<String>,
    pub is_active: Option<bool>,
    pub impact: Option<ImpactDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImpactDto {
    pub value: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_station_payload() {
        let json = r#"{
            "payload": [
                {"code": "UT", "namen": {"lang": "Utrecht Centraal", "kort": "Utrecht C."},
                 "lat": 52.089, "lng": 5.110, "land": "NL"}
            ]
        }"#;
        let resp: StationsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.payload.len(), 1);
        let station = &resp.payload[0];
        assert_eq!(station.code.as_deref(), Some("UT"));
        assert_eq!(
            station.namen.as_ref().and_then(|n| n.lang.as_deref()),
            Some("Utrecht Centraal")
        );
    }

    #[test]
    fn parse_trip_with_nulls() {
        let json = r#"{
            "trips": [{
                "plannedDurationInMinutes": 35,
                "transfers": 0,
                "status": "NORMAL",
                "crowdForecast": null,
                "legs": [{"direction": "Amsterdam Centraal", "product": null,
                          "origin": {"plannedDateTime": "2026-10-19T10:00:00+0200"}}]
            }]
        }"#;
        let resp: TripsResponse = serde_json::from_str(json).unwrap();
        let trip = &resp.trips.unwrap()[0];
        assert_eq!(trip.planned_duration_in_minutes, Some(35));
        assert!(trip.crowd_forecast.is_none());
        let legs = trip.legs.as_ref().unwrap();
        assert!(legs[0].product.is_none());
    }

    #[test]
    fn parse_empty_disruptions() {
        let resp: DisruptionsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.payload.is_none());
    }
}
