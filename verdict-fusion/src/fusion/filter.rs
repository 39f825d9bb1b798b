//! Downstream country filtering over fusion results.

use tracing::info;
use verdict_core::errors::ConfigError;

use crate::gazetteer::CountryCode;

use super::types::FusionResult;

/// Keep only results confidently resolved to one of the target
/// countries.
///
/// Drops uncertain and low-confidence rows. Returns a fresh vector; the
/// input results are untouched. An empty target set or an out-of-range
/// threshold is a caller bug and fails fast.
pub fn retain_confident(
    results: &[FusionResult],
    target_countries: &[String],
    min_confidence: f64,
) -> Result<Vec<FusionResult>, ConfigError> {
    if target_countries.is_empty() {
        return Err(ConfigError::ValidationFailed {
            field: "target_countries".to_string(),
            message: "must name at least one country".to_string(),
        });
    }
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(ConfigError::ValidationFailed {
            field: "min_confidence".to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        });
    }

    let targets: Vec<CountryCode> = target_countries
        .iter()
        .map(|code| {
            code.parse().map_err(|_| ConfigError::ValidationFailed {
                field: "target_countries".to_string(),
                message: format!("{code:?} is not a two-letter country code"),
            })
        })
        .collect::<Result<_, _>>()?;

    let kept: Vec<FusionResult> = results
        .iter()
        .filter(|r| {
            r.country_score >= min_confidence
                && r.country
                    .parse::<CountryCode>()
                    .map_or(false, |code| targets.contains(&code))
        })
        .cloned()
        .collect();

    let total = results.len();
    let fraction = if total == 0 {
        0.0
    } else {
        kept.len() as f64 / total as f64
    };
    info!(
        kept = kept.len(),
        total,
        fraction,
        min_confidence,
        "country filter applied"
    );

    Ok(kept)
}
