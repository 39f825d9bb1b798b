//! Geographic resolution — country voting over gazetteer matches.

pub mod types;
pub mod voter;

pub use types::{CountryTally, GeoEvidence, GeoResolution, GeoVote};
pub use voter::vote;
