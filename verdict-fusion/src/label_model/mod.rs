//! Label model — learns function reliability without ground truth.
//!
//! Given a label matrix and nothing else, the estimator recovers each
//! function's accuracy and the class prior from the statistics of how
//! functions agree and disagree with each other, then emits a posterior
//! positive-class probability per item.

pub mod estimator;
pub mod types;

pub use estimator::LabelModelEstimator;
pub use types::{FunctionReliability, LabelModel};
