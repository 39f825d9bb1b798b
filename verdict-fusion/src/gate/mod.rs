//! Threshold gate — turns a continuous score into an accept/uncertain
//! decision.
//!
//! The score is always kept next to the decision so downstream consumers
//! can re-threshold without recomputation.

use std::fmt;

use serde::{Deserialize, Serialize};
use verdict_core::config::GateConfig;

/// Outcome of gating a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Score at or above the threshold.
    Accept,
    /// Score below the threshold; the caller reports "uncertain" rather
    /// than guessing.
    Uncertain,
}

impl Decision {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gate with a fixed confidence cutoff.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdGate {
    min_confidence: f64,
}

impl ThresholdGate {
    pub fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(config.min_confidence)
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// A score exactly equal to the threshold is accepted.
    pub fn decide(&self, score: f64) -> Decision {
        if score >= self.min_confidence {
            Decision::Accept
        } else {
            Decision::Uncertain
        }
    }

    /// Binary label for the positive class: 1 at or above the cutoff.
    /// The probability itself is never discarded by callers.
    pub fn binary_label(&self, probability: f64) -> u8 {
        match self.decide(probability) {
            Decision::Accept => 1,
            Decision::Uncertain => 0,
        }
    }
}
