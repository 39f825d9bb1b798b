//! Core types for geographic resolution.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::gazetteer::CountryCode;

/// One matched signal: which candidate name resolved to which country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoEvidence {
    pub name: String,
    pub country: CountryCode,
}

/// Vote count for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTally {
    pub country: CountryCode,
    pub votes: u32,
}

/// Outcome of the country vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoResolution {
    /// Confidently resolved to a country.
    Country(CountryCode),
    /// No matches, or the winner fell below the confidence threshold.
    Uncertain,
}

impl GeoResolution {
    /// The exported string form: the country code, or `"uncertain"`.
    pub fn label(&self) -> String {
        match self {
            Self::Country(code) => code.to_string(),
            Self::Uncertain => "uncertain".to_string(),
        }
    }
}

impl fmt::Display for GeoResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Full result of one geo vote over an article's candidate names.
///
/// Invariants: tallies sum to `total`; evidence carries one entry per
/// counted vote. Created per item per pass and never mutated; a re-run
/// produces a fresh value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoVote {
    pub resolution: GeoResolution,
    /// Winner vote share in [0, 1]; 0.0 when no votes were cast.
    pub confidence: f64,
    /// Per-country counts, sorted by country code.
    pub tallies: SmallVec<[CountryTally; 4]>,
    /// Total votes cast inside the target set.
    pub total: u32,
    /// Matched (name, country) pairs backing the counts.
    pub evidence: Vec<GeoEvidence>,
    /// 95% Beta credible interval on the winner share. Reporting only —
    /// never consulted by the gate.
    pub credible_interval: (f64, f64),
}

impl GeoVote {
    /// The no-evidence outcome: uncertain with zero confidence.
    pub fn uncertain() -> Self {
        Self {
            resolution: GeoResolution::Uncertain,
            confidence: 0.0,
            tallies: SmallVec::new(),
            total: 0,
            evidence: Vec::new(),
            credible_interval: (0.0, 1.0),
        }
    }
}
