//! Confidence interval support for vote-share scores.

pub mod beta;

pub use beta::credible_interval;
