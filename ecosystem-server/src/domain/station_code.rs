//! NS station code type.

use std::fmt;

/// Maximum length of a station code we accept.
const MAX_LEN: usize = 10;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A validated NS station code (e.g. `UT`, `ASD`, `RTD`).
///
/// Station codes are 1 to 10 uppercase ASCII letters or digits. Parsing
/// with [`StationCode::parse_normalized`] accepts lowercase input, since
/// clients tend to send whatever the user typed.
///
/// # Examples
///
/// ```
/// use ecosystem_server::domain::StationCode;
///
/// let ut = StationCode::parse("UT").unwrap();
/// assert_eq!(ut.as_str(), "UT");
///
/// // Lowercase is rejected by `parse`...
/// assert!(StationCode::parse("ut").is_err());
/// // ...but accepted by `parse_normalized`
/// assert_eq!(StationCode::parse_normalized(" ut ").unwrap().as_str(), "UT");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code. The input must already be uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidStationCode {
                reason: "must be at most 10 characters",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidStationCode {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Trim and uppercase the input, then parse it.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("UT").is_ok());
        assert!(StationCode::parse("ASD").is_ok());
        assert!(StationCode::parse("ASDZ").is_ok());
        assert!(StationCode::parse("8400058").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("ut").is_err());
        assert!(StationCode::parse("Asd").is_err());
    }

    #[test]
    fn reject_empty_and_too_long() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn reject_punctuation() {
        assert!(StationCode::parse("U-T").is_err());
        assert!(StationCode::parse("U T").is_err());
        assert!(StationCode::parse("UT?x=1").is_err());
        assert!(StationCode::parse("ÜT").is_err());
    }

    #[test]
    fn normalized_trims_and_uppercases() {
        let code = StationCode::parse_normalized("  asd ").unwrap();
        assert_eq!(code.as_str(), "ASD");
        assert!(StationCode::parse_normalized("   ").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("RTD").unwrap();
        assert_eq!(code.to_string(), "RTD");
        assert_eq!(format!("{:?}", code), "StationCode(RTD)");
    }
}
