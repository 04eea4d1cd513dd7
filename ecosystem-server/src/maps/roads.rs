//! Summaries derived from driving routes: main roads, traffic level and
//! fuel cost.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::types::StepDto;

/// Road numbers such as `A12`, `N201` or `E35`.
static ROAD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]\d+\b").expect("road number regex is valid"));

/// How many road numbers go into a route summary.
const MAX_ROADS: usize = 3;

/// Summary used when no numbered road appears in the steps.
const LOCAL_ROADS: &str = "Local roads";

/// Estimated fuel cost in euro per 100 km.
const FUEL_PRICE_PER_100KM: f64 = 12.0;

/// Ratio of traffic to free-flow duration above which traffic is heavy.
const HEAVY_RATIO: f64 = 1.4;

/// Ratio above which traffic is moderate.
const MODERATE_RATIO: f64 = 1.2;

/// Summarise a route by its first few numbered roads, e.g. `A12 → A2`.
///
/// Each step contributes at most one road number (the first in its
/// instructions).
pub fn main_roads(steps: &[StepDto]) -> String {
    let roads: Vec<&str> = steps
        .iter()
        .filter_map(|step| ROAD_NUMBER.find(&step.html_instructions))
        .map(|m| m.as_str())
        .take(MAX_ROADS)
        .collect();

    if roads.is_empty() {
        LOCAL_ROADS.to_string()
    } else {
        roads.join(" → ")
    }
}

/// Traffic level on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Classify from free-flow duration and duration in traffic (seconds).
    ///
    /// A missing or zero free-flow duration counts as light traffic.
    pub fn classify(duration: f64, duration_in_traffic: f64) -> Self {
        if duration <= 0.0 {
            return TrafficLevel::Light;
        }

        let ratio = duration_in_traffic / duration;
        if ratio > HEAVY_RATIO {
            TrafficLevel::Heavy
        } else if ratio > MODERATE_RATIO {
            TrafficLevel::Moderate
        } else {
            TrafficLevel::Light
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrafficLevel::Light => "Light",
            TrafficLevel::Moderate => "Moderate",
            TrafficLevel::Heavy => "Heavy",
        })
    }
}

/// Estimated fuel cost for a distance, formatted as `€4.20`.
///
/// The kilometre figure comes from the display text (`"45.3 km"`); when
/// that has no usable number the metre value is used instead.
pub fn fuel_cost(distance_text: &str, distance_metres: f64) -> String {
    let km = parse_km(distance_text).unwrap_or(distance_metres / 1000.0);
    format!("€{:.2}", km / 100.0 * FUEL_PRICE_PER_100KM)
}

fn parse_km(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Summaries never name more than three roads
        #[test]
        fn at_most_three_roads(roads in proptest::collection::vec("[A-Z][0-9]{1,3}", 0..10)) {
            let steps: Vec<StepDto> = roads
                .iter()
                .map(|r| StepDto { html_instructions: format!("Take the <b>{r}</b>") })
                .collect();
            let summary = main_roads(&steps);
            if roads.is_empty() {
                prop_assert_eq!(summary, "Local roads");
            } else {
                prop_assert_eq!(summary.split(" → ").count(), roads.len().min(3));
            }
        }

        /// Heavier traffic never classifies lighter
        #[test]
        fn classification_is_monotonic(base in 1.0f64..10_000.0, a in 0.5f64..3.0, b in 0.5f64..3.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let rank = |l: TrafficLevel| match l {
                TrafficLevel::Light => 0,
                TrafficLevel::Moderate => 1,
                TrafficLevel::Heavy => 2,
            };
            prop_assert!(rank(TrafficLevel::classify(base, base * lo)) <= rank(TrafficLevel::classify(base, base * hi)));
        }

        /// Fuel cost is always a euro amount with two decimals
        #[test]
        fn fuel_cost_format(km in 0u32..2000, tenths in 0u32..10) {
            let cost = fuel_cost(&format!("{km}.{tenths} km"), 0.0);
            prop_assert!(cost.starts_with('€'));
            let decimals = cost.split('.').nth(1).unwrap();
            prop_assert_eq!(decimals.len(), 2);
        }
    }
}
