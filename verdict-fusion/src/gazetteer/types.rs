//! Core types for the gazetteer subsystem.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use verdict_core::errors::GazetteerError;

/// ISO 3166-1 alpha-2 country code, stored uppercase.
///
/// Two ASCII letters, validated at parse time. Ordering is plain byte
/// order, which the geo voter relies on for deterministic tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Always two ASCII uppercase letters by construction.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl FromStr for CountryCode {
    type Err = GazetteerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(GazetteerError::InvalidCountryCode {
                code: s.to_string(),
            });
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
        ]))
    }
}

impl TryFrom<String> for CountryCode {
    type Error = GazetteerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed gazetteer row, before any filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteerRecord {
    /// Primary place name, original casing.
    pub name: String,
    /// Comma-separated alternate names, split and trimmed.
    pub alternates: Vec<String>,
    /// GeoNames feature class ("P" populated place, "A" admin area, ...).
    pub feature_class: String,
    /// Country the place belongs to.
    pub country: CountryCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_parses_and_uppercases() {
        let code: CountryCode = "nl".parse().unwrap();
        assert_eq!(code.as_str(), "NL");
        assert_eq!(code.to_string(), "NL");
    }

    #[test]
    fn country_code_rejects_bad_input() {
        assert!("NLD".parse::<CountryCode>().is_err());
        assert!("N1".parse::<CountryCode>().is_err());
        assert!("".parse::<CountryCode>().is_err());
    }

    #[test]
    fn country_code_orders_lexicographically() {
        let be: CountryCode = "BE".parse().unwrap();
        let de: CountryCode = "DE".parse().unwrap();
        let nl: CountryCode = "NL".parse().unwrap();
        assert!(be < de);
        assert!(de < nl);
    }

    #[test]
    fn country_code_serializes_as_string() {
        let nl: CountryCode = "NL".parse().unwrap();
        assert_eq!(serde_json::to_string(&nl).unwrap(), "\"NL\"");
        let back: CountryCode = serde_json::from_str("\"be\"").unwrap();
        assert_eq!(back.as_str(), "BE");
    }
}
