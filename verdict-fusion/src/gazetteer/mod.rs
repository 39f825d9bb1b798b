//! Gazetteer — name→country reference lookup.
//!
//! Builds an immutable index from GeoNames-style tab-separated tables.
//! The index is constructed once per process run and passed by reference
//! into every geo vote; nothing here mutates after construction.

pub mod index;
pub mod parser;
pub mod types;

pub use index::{GazetteerBuilder, GazetteerIndex};
pub use types::{CountryCode, GazetteerRecord};
