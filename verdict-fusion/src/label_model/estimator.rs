//! Iterative fixed-point estimation of function reliability.

use tracing::{debug, info};
use verdict_core::config::EstimatorConfig;
use verdict_core::errors::EstimatorError;

use crate::labeling::{LabelMatrix, Vote};

use super::types::{estimator_posterior, FunctionReliability, LabelModel};

/// Fits a `LabelModel` to a label matrix, no ground truth required.
///
/// Generative assumptions: the true label Y ∈ {0, 1} is latent with
/// prior p; each function abstains with probability 1 − coverage and
/// otherwise votes correctly with probability α_i; functions are
/// conditionally independent given Y. Correlated functions degrade the
/// estimate but do not break it.
///
/// The fit alternates a posterior pass (E) with a parameter update (M)
/// until the largest parameter change falls below tolerance or the
/// epoch budget runs out. Deterministic: identical input produces an
/// identical model — there is no random number generator anywhere in
/// the loop.
#[derive(Debug, Clone)]
pub struct LabelModelEstimator {
    config: EstimatorConfig,
}

impl LabelModelEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(EstimatorConfig::default())
    }

    /// Fit a model to the matrix. `names` carries one label per matrix
    /// column, in column order.
    ///
    /// Caller bugs — empty function set, empty matrix, name/width
    /// mismatch, degenerate parameters — fail fast. Data-quality
    /// conditions (all-abstain rows or columns) are handled inside the
    /// loop and never error.
    pub fn fit(
        &self,
        matrix: &LabelMatrix,
        names: &[String],
    ) -> Result<LabelModel, EstimatorError> {
        let m = matrix.n_functions();
        if m == 0 {
            return Err(EstimatorError::EmptyFunctionSet);
        }
        if names.len() != m {
            return Err(EstimatorError::ShapeMismatch {
                width: m,
                functions: names.len(),
            });
        }
        if matrix.n_rows() == 0 {
            return Err(EstimatorError::EmptyMatrix);
        }
        self.validate_config()?;

        let n = matrix.n_rows();
        let eps = self.config.clip_epsilon;
        let accuracy_floor = 0.5 + eps;
        let accuracy_ceil = 1.0 - eps;

        // Coverage is measured, not estimated.
        let mut votes_cast = vec![0usize; m];
        let mut positive_votes = 0usize;
        let mut total_votes = 0usize;
        for row in matrix.rows() {
            for (i, &vote) in row.iter().enumerate() {
                if !vote.is_abstain() {
                    votes_cast[i] += 1;
                    total_votes += 1;
                    if vote == Vote::Positive {
                        positive_votes += 1;
                    }
                }
            }
        }
        let coverage: Vec<f64> = votes_cast.iter().map(|&c| c as f64 / n as f64).collect();

        // Neutral above-chance start for every function; prior from the
        // empirical positive fraction, or 0.5 when nothing voted at all.
        let mut accuracies =
            vec![self.config.initial_accuracy.clamp(accuracy_floor, accuracy_ceil); m];
        let mut prior = if total_votes == 0 {
            0.5
        } else {
            (positive_votes as f64 / total_votes as f64).clamp(eps, 1.0 - eps)
        };

        let mut epochs_run = 0;
        let mut converged = false;
        let mut delta = f64::INFINITY;
        let mut posteriors = vec![prior; n];

        for epoch in 0..self.config.max_epochs {
            epochs_run = epoch + 1;

            // E-step: posterior per item under the current parameters.
            for (q, row) in posteriors.iter_mut().zip(matrix.rows()) {
                *q = estimator_posterior(prior, &accuracies, row);
            }

            // M-step: accuracy becomes the posterior-weighted agreement
            // rate over each function's non-abstaining rows; the prior
            // becomes the mean posterior.
            delta = 0.0;
            for i in 0..m {
                if votes_cast[i] == 0 {
                    // A function that never votes has nothing to update
                    // and must not divide by zero.
                    continue;
                }
                let mut agreement = 0.0;
                for (row, &q) in matrix.rows().zip(&posteriors) {
                    match row[i] {
                        Vote::Positive => agreement += q,
                        Vote::Negative => agreement += 1.0 - q,
                        Vote::Abstain => {}
                    }
                }
                let updated =
                    (agreement / votes_cast[i] as f64).clamp(accuracy_floor, accuracy_ceil);
                delta = delta.max((updated - accuracies[i]).abs());
                accuracies[i] = updated;
            }

            let mean_posterior = posteriors.iter().sum::<f64>() / n as f64;
            let updated_prior = mean_posterior.clamp(eps, 1.0 - eps);
            delta = delta.max((updated_prior - prior).abs());
            prior = updated_prior;

            debug!(epoch, delta, prior, "label model epoch");

            if delta < self.config.tolerance {
                converged = true;
                break;
            }
        }

        info!(
            items = n,
            functions = m,
            epochs = epochs_run,
            converged,
            prior,
            "label model fitted"
        );

        let reliabilities = names
            .iter()
            .zip(coverage)
            .zip(accuracies)
            .map(|((name, coverage), accuracy)| FunctionReliability {
                name: name.clone(),
                coverage,
                accuracy,
            })
            .collect();

        Ok(LabelModel::new(
            reliabilities,
            prior,
            epochs_run,
            converged,
            delta,
        ))
    }

    fn validate_config(&self) -> Result<(), EstimatorError> {
        if self.config.max_epochs == 0 {
            return Err(EstimatorError::InvalidParameter {
                field: "max_epochs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(self.config.tolerance > 0.0 && self.config.tolerance.is_finite()) {
            return Err(EstimatorError::InvalidParameter {
                field: "tolerance".to_string(),
                message: "must be a positive finite value".to_string(),
            });
        }
        if !(0.5..1.0).contains(&self.config.initial_accuracy) {
            return Err(EstimatorError::InvalidParameter {
                field: "initial_accuracy".to_string(),
                message: "must be in [0.5, 1.0)".to_string(),
            });
        }
        if !(self.config.clip_epsilon > 0.0 && self.config.clip_epsilon < 0.25) {
            return Err(EstimatorError::InvalidParameter {
                field: "clip_epsilon".to_string(),
                message: "must be in (0.0, 0.25)".to_string(),
            });
        }
        Ok(())
    }
}
