//! Top-level fusion configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Geographic resolution knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Country codes an article may resolve to. Two ASCII letters each.
    pub target_countries: Vec<String>,
    /// GeoNames feature classes kept when building the index
    /// ("P" populated places, "A" administrative areas).
    pub keep_feature_classes: Vec<String>,
    /// Whether alternate names are indexed alongside primary names.
    pub keep_alternates: bool,
    /// Vote share below which an article is marked uncertain.
    pub min_confidence: f64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            target_countries: vec!["NL".into(), "BE".into(), "DE".into()],
            keep_feature_classes: vec!["P".into(), "A".into()],
            keep_alternates: true,
            min_confidence: 0.6,
        }
    }
}

/// Label model estimator knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Epoch budget for the fit loop. Termination is guaranteed.
    pub max_epochs: usize,
    /// Early-stop tolerance on the largest parameter delta per epoch.
    pub tolerance: f64,
    /// Neutral above-chance starting accuracy for every function.
    pub initial_accuracy: f64,
    /// Clip margin: accuracies stay in [0.5 + epsilon, 1 - epsilon] and
    /// the prior stays in (epsilon, 1 - epsilon).
    pub clip_epsilon: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            max_epochs: 200,
            tolerance: 1e-5,
            initial_accuracy: 0.7,
            clip_epsilon: 0.01,
        }
    }
}

/// Threshold gate knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Probability at or above which the positive label is assigned.
    pub min_confidence: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self { min_confidence: 0.6 }
    }
}

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VERDICT_*`)
/// 2. Project config (`verdict.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FusionConfig {
    pub geo: GeoConfig,
    pub estimator: EstimatorConfig,
    pub gate: GateConfig,
}

impl FusionConfig {
    /// Load configuration with layered resolution, then validate.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("verdict.toml");
        if project_config_path.exists() {
            let raw = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::ReadFailed {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            config = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Apply `VERDICT_*` environment variable overrides.
    fn apply_env_overrides(config: &mut FusionConfig) {
        if let Some(v) = env_f64("VERDICT_GEO_MIN_CONFIDENCE") {
            config.geo.min_confidence = v;
        }
        if let Some(v) = env_f64("VERDICT_GATE_MIN_CONFIDENCE") {
            config.gate.min_confidence = v;
        }
        if let Ok(raw) = std::env::var("VERDICT_MAX_EPOCHS") {
            if let Ok(v) = raw.parse::<usize>() {
                config.estimator.max_epochs = v;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &FusionConfig) -> Result<(), ConfigError> {
        validate_unit_interval("geo.min_confidence", config.geo.min_confidence)?;
        validate_unit_interval("gate.min_confidence", config.gate.min_confidence)?;

        if config.geo.target_countries.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "geo.target_countries".to_string(),
                message: "must name at least one country".to_string(),
            });
        }
        for code in &config.geo.target_countries {
            if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(ConfigError::ValidationFailed {
                    field: "geo.target_countries".to_string(),
                    message: format!("{code:?} is not a two-letter country code"),
                });
            }
        }

        if config.estimator.max_epochs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.max_epochs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(config.estimator.tolerance > 0.0 && config.estimator.tolerance.is_finite()) {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.tolerance".to_string(),
                message: "must be a positive finite value".to_string(),
            });
        }
        if !(0.5..1.0).contains(&config.estimator.initial_accuracy) {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.initial_accuracy".to_string(),
                message: "must be in [0.5, 1.0)".to_string(),
            });
        }
        if !(config.estimator.clip_epsilon > 0.0 && config.estimator.clip_epsilon < 0.25) {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.clip_epsilon".to_string(),
                message: "must be in (0.0, 0.25)".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(())
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok()?.parse().ok()
}
