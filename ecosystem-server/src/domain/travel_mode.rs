//! Travel modes understood by the directions provider.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown travel mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel mode '{0}': expected driving, walking, bicycling or transit")]
pub struct InvalidTravelMode(pub String);

/// How a route should be travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    #[default]
    Transit,
}

impl TravelMode {
    /// The value sent upstream as the `mode` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl FromStr for TravelMode {
    type Err = InvalidTravelMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "bicycling" => Ok(TravelMode::Bicycling),
            "transit" => Ok(TravelMode::Transit),
            _ => Err(InvalidTravelMode(s.to_string())),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_transit() {
        assert_eq!(TravelMode::default(), TravelMode::Transit);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("DRIVING".parse::<TravelMode>(), Ok(TravelMode::Driving));
        assert_eq!(" Walking ".parse::<TravelMode>(), Ok(TravelMode::Walking));
        assert_eq!("bicycling".parse::<TravelMode>(), Ok(TravelMode::Bicycling));
    }

    #[test]
    fn unknown_mode_rejected() {
        let err = "flying".parse::<TravelMode>().unwrap_err();
        assert!(err.to_string().contains("flying"));
    }

    #[test]
    fn display_matches_upstream_value() {
        for mode in [
            TravelMode::Driving,
            TravelMode::Walking,
            TravelMode::Bicycling,
            TravelMode::Transit,
        ] {
            assert_eq!(mode.to_string().parse::<TravelMode>(), Ok(mode));
        }
    }
}
