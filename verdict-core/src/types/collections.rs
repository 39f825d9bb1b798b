//! Collection aliases used across the workspace.
//!
//! Lookup tables in the fusion hot path (gazetteer resolution, vote
//! counting) use FxHash; keys are short strings, not attacker-controlled.

pub use rustc_hash::{FxHashMap, FxHashSet};
