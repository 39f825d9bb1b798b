//! Configuration layer.

pub mod fusion_config;

pub use fusion_config::{EstimatorConfig, FusionConfig, GateConfig, GeoConfig};
