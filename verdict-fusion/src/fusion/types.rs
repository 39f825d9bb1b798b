//! Pipeline input and export types.

use serde::{Deserialize, Serialize};

use crate::geo::GeoEvidence;

/// One item as delivered by the external preprocessing stage: cleaned
/// article text plus candidate place names from the NER component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSignals {
    pub text: String,
    #[serde(default)]
    pub candidate_places: Vec<String>,
}

impl ArticleSignals {
    pub fn new(text: impl Into<String>, candidate_places: Vec<String>) -> Self {
        Self {
            text: text.into(),
            candidate_places,
        }
    }
}

/// The exported artifact for one item.
///
/// Created per item per fusion pass, immutable, consumed by downstream
/// filtering and export; a re-run produces a fresh value. The SME
/// probability is retained next to the binary label so consumers can
/// re-threshold without recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    /// Winning country code, or `"uncertain"`.
    pub country: String,
    /// Winner vote share in [0, 1].
    pub country_score: f64,
    /// Matched (name, country) pairs backing the country score.
    pub country_evidence: Vec<GeoEvidence>,
    /// Posterior P(SME | votes) in [0, 1].
    pub sme_probability: f64,
    /// Gated binary SME label.
    pub sme_label: u8,
}
