//! Core types, errors, and configuration for Verdict.
//!
//! This crate carries no fusion logic. It exists so that every subsystem
//! in `verdict-fusion` shares one error vocabulary, one configuration
//! layer, and one set of collection aliases.

pub mod config;
pub mod errors;
pub mod types;

pub use config::{EstimatorConfig, FusionConfig, GateConfig, GeoConfig};
pub use errors::{ConfigError, EstimatorError, FusionError, GazetteerError, VerdictErrorCode};
