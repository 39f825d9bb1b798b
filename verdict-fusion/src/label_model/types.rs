//! Fitted model types.

use serde::Serialize;
use verdict_core::errors::EstimatorError;

use crate::labeling::{LabelMatrix, Vote};

/// Learned parameters for one labeling function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionReliability {
    pub name: String,
    /// Empirical P(vote ≠ abstain), measured from the matrix.
    pub coverage: f64,
    /// Estimated P(vote = y | Y = y, vote ≠ abstain). Clipped above
    /// chance, so log-odds contributions never flip sign.
    pub accuracy: f64,
}

/// A fitted label model: class prior plus per-function reliability.
///
/// Read-only after fitting; shared across all item evaluations. Re-fit
/// from scratch whenever the function set or the data changes.
#[derive(Debug, Clone, Serialize)]
pub struct LabelModel {
    reliabilities: Vec<FunctionReliability>,
    /// Estimated P(Y = 1), kept strictly inside (0, 1).
    pub prior: f64,
    /// Epochs actually run before convergence or budget exhaustion.
    pub epochs_run: usize,
    /// Whether the parameter delta fell below tolerance in time. A
    /// model that ran out of budget is still usable — these are the
    /// best parameters reached, not an error.
    pub converged: bool,
    /// Largest parameter change in the final epoch.
    pub final_delta: f64,
}

impl LabelModel {
    pub(crate) fn new(
        reliabilities: Vec<FunctionReliability>,
        prior: f64,
        epochs_run: usize,
        converged: bool,
        final_delta: f64,
    ) -> Self {
        Self {
            reliabilities,
            prior,
            epochs_run,
            converged,
            final_delta,
        }
    }

    /// Per-function learned parameters, in column order.
    pub fn reliabilities(&self) -> &[FunctionReliability] {
        &self.reliabilities
    }

    /// Posterior P(Y = 1 | row) for one item's votes.
    ///
    /// A row where every function abstains yields exactly the prior —
    /// the correct "no evidence" answer.
    pub fn posterior_row(&self, row: &[Vote]) -> f64 {
        let accuracies: Vec<f64> = self.reliabilities.iter().map(|r| r.accuracy).collect();
        estimator_posterior(self.prior, &accuracies, row)
    }

    /// Posterior probabilities for a whole matrix.
    pub fn predict(&self, matrix: &LabelMatrix) -> Result<Vec<f64>, EstimatorError> {
        if matrix.n_functions() != self.reliabilities.len() {
            return Err(EstimatorError::ShapeMismatch {
                width: matrix.n_functions(),
                functions: self.reliabilities.len(),
            });
        }
        let accuracies: Vec<f64> = self.reliabilities.iter().map(|r| r.accuracy).collect();
        Ok(matrix
            .rows()
            .map(|row| estimator_posterior(self.prior, &accuracies, row))
            .collect())
    }
}

/// Combine per-function log-likelihood ratios into a posterior.
///
/// A positive vote from function i contributes log(α_i / (1 − α_i)) to
/// the log-odds of Y = 1, a negative vote the opposite, an abstention
/// nothing. The prior enters as log(p / (1 − p)); the logistic function
/// maps the sum back to a probability.
pub(crate) fn estimator_posterior(prior: f64, accuracies: &[f64], row: &[Vote]) -> f64 {
    let mut log_odds = (prior / (1.0 - prior)).ln();
    let mut any_vote = false;

    for (&vote, &accuracy) in row.iter().zip(accuracies) {
        let weight = (accuracy / (1.0 - accuracy)).ln();
        match vote {
            Vote::Positive => {
                log_odds += weight;
                any_vote = true;
            }
            Vote::Negative => {
                log_odds -= weight;
                any_vote = true;
            }
            Vote::Abstain => {}
        }
    }

    if !any_vote {
        // No evidence: the prior, bit-exact, not a logistic round-trip.
        return prior;
    }

    1.0 / (1.0 + (-log_odds).exp())
}
