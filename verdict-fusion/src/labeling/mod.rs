//! Labeling functions — cheap rule-based voters over article text.
//!
//! A labeling function is a pure, side-effect-free rule mapping text to
//! a vote (positive, negative, or abstain). Functions are registered
//! explicitly in a `LabelingFunctionSet` and applied as a batch to
//! produce the label matrix the estimator fits on. No function sees
//! another function's output.

pub mod builtin;
pub mod diagnostics;
pub mod rules;
pub mod set;
pub mod types;

pub use diagnostics::FunctionDiagnostics;
pub use rules::{CooccurrenceRule, KeywordRule, PatternRule};
pub use set::{LabelingFunction, LabelingFunctionSet};
pub use types::{LabelMatrix, Vote};
