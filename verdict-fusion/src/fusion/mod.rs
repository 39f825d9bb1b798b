//! Batch fusion — both evidence paths, gated, in one pass.

pub mod filter;
pub mod pipeline;
pub mod types;

pub use filter::retain_confident;
pub use pipeline::{FusionPipeline, FusionReport};
pub use types::{ArticleSignals, FusionResult};
