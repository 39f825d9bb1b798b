//! Verdict fusion engine.
//!
//! Converts noisy, cheap, possibly-conflicting signals about a news
//! article into a single confident classification with an explicit
//! uncertainty estimate. Two instances of the same problem live here:
//!
//! - **Geographic resolution**: candidate place names vote against a
//!   gazetteer index; the winning country ships with a vote-share
//!   confidence, or `uncertain` below the threshold.
//! - **SME classification**: independent rule-based labeling functions
//!   vote or abstain per article; an EM-style label model learns each
//!   function's reliability and the class prior from agreement statistics
//!   alone, then emits a posterior probability per article.
//!
//! Both paths end in a threshold gate. Abstention is a valid, expected
//! output — the engine never guesses below its confidence cutoff.
//!
//! Scraping, NER candidate extraction, dashboards, and export belong to
//! external collaborators; this crate is a pure library with no I/O
//! beyond reading gazetteer tables.

pub mod confidence;
pub mod fusion;
pub mod gate;
pub mod gazetteer;
pub mod geo;
pub mod label_model;
pub mod labeling;

pub use fusion::{ArticleSignals, FusionPipeline, FusionReport, FusionResult};
pub use gate::{Decision, ThresholdGate};
pub use gazetteer::{CountryCode, GazetteerBuilder, GazetteerIndex, GazetteerRecord};
pub use geo::{GeoEvidence, GeoResolution, GeoVote};
pub use label_model::{FunctionReliability, LabelModel, LabelModelEstimator};
pub use labeling::{LabelMatrix, LabelingFunction, LabelingFunctionSet, Vote};
