//! Label model estimator errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors raised by the label model estimator.
///
/// All variants are caller bugs (wrong shapes, degenerate parameters).
/// Data-quality conditions — all-abstain rows, zero-coverage functions,
/// non-convergence within the epoch budget — are handled, not raised.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    #[error("Labeling function set is empty")]
    EmptyFunctionSet,

    #[error("Label matrix has no rows")]
    EmptyMatrix,

    #[error("Label matrix width {width} does not match function count {functions}")]
    ShapeMismatch { width: usize, functions: usize },

    #[error("Invalid estimator parameter {field}: {message}")]
    InvalidParameter { field: String, message: String },
}

impl VerdictErrorCode for EstimatorError {
    fn error_code(&self) -> &'static str {
        error_code::ESTIMATOR_ERROR
    }
}
