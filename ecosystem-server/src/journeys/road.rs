//! Live driving summaries for a commuter route.

use serde::Serialize;
use tracing::debug;

use crate::maps::{
    DistanceMatrixElement, MapsClient, MapsError, StepDto, TrafficLevel, fuel_cost, main_roads,
};

/// Element status meaning a distance was found.
const ELEMENT_OK: &str = "OK";

/// A road route between two places, as configured by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadRoute {
    pub id: i64,
    pub name: String,
    /// Address or `lat,lng` the provider understands
    pub origin: String,
    pub destination: String,
    /// Display names
    pub origin_name: String,
    pub destination_name: String,
}

impl RoadRoute {
    /// The same route driven the other way.
    pub fn reversed(self) -> Self {
        Self {
            id: self.id,
            name: self.name,
            origin: self.destination,
            destination: self.origin,
            origin_name: self.destination_name,
            destination_name: self.origin_name,
        }
    }
}

/// Driving summary for one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarTrip {
    pub id: i64,
    #[serde(rename = "from_location")]
    pub from_location: String,
    pub to: String,
    pub distance: String,
    pub duration: String,
    pub duration_in_traffic: String,
    pub traffic: String,
    pub route: String,
    pub fuel_cost: String,
    pub status: String,
}

/// Fetch live traffic and the driving path for a route and summarise them.
pub async fn road_route(maps: &MapsClient, route: &RoadRoute) -> Result<CarTrip, MapsError> {
    let (matrix, directions) = futures::try_join!(
        maps.distance_matrix(&route.origin, &route.destination),
        maps.driving_directions(&route.origin, &route.destination),
    )?;

    let element = matrix
        .first_element()
        .ok_or(MapsError::NoResults("Distance Matrix"))?;
    let steps = directions
        .first_leg_steps()
        .ok_or(MapsError::NoResults("Directions"))?;

    let trip = summarise(route, element, steps)?;
    debug!(
        id = route.id,
        name = %route.name,
        traffic = %trip.traffic,
        route = %trip.route,
        "road route fetched"
    );
    Ok(trip)
}

/// Build the summary from a distance matrix element and directions steps.
pub fn summarise(
    route: &RoadRoute,
    element: &DistanceMatrixElement,
    steps: &[StepDto],
) -> Result<CarTrip, MapsError> {
    if element.status != ELEMENT_OK {
        return Err(MapsError::Status {
            api: "Distance Matrix",
            status: element.status.clone(),
            message: None,
        });
    }

    let (Some(distance), Some(duration)) = (&element.distance, &element.duration) else {
        return Err(MapsError::NoResults("Distance Matrix"));
    };
    let in_traffic = element.duration_in_traffic.as_ref().unwrap_or(duration);

    Ok(CarTrip {
        id: route.id,
        from_location: route.origin_name.clone(),
        to: route.destination_name.clone(),
        distance: distance.text.clone(),
        duration: duration.text.clone(),
        duration_in_traffic: in_traffic.text.clone(),
        traffic: TrafficLevel::classify(duration.value, in_traffic.value).to_string(),
        route: main_roads(steps),
        fuel_cost: fuel_cost(&distance.text, distance.value),
        status: "NORMAL".to_string(),
    })
}
