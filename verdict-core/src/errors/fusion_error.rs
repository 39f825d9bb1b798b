//! Fusion pipeline errors.

use super::error_code::{self, VerdictErrorCode};
use super::{ConfigError, EstimatorError, GazetteerError};

/// Errors that can occur during a fusion pass.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum FusionError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Gazetteer error: {0}")]
    Gazetteer(#[from] GazetteerError),

    #[error("Estimator error: {0}")]
    Estimator(#[from] EstimatorError),
}

impl VerdictErrorCode for FusionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Gazetteer(e) => e.error_code(),
            Self::Estimator(e) => e.error_code(),
        }
    }
}
