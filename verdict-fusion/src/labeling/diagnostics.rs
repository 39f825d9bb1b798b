//! Per-function quality diagnostics over a label matrix.
//!
//! Debugging aid for rule authors; fusion never reads these numbers.

use serde::Serialize;
use tracing::debug;

use super::types::{LabelMatrix, Vote};

/// Empirical behavior of one labeling function across a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDiagnostics {
    pub name: String,
    /// Fraction of items the function voted on (did not abstain).
    pub coverage: f64,
    /// Fraction of items with a positive vote.
    pub positive_rate: f64,
    /// Fraction of items with a negative vote.
    pub negative_rate: f64,
    /// Fraction of items where this function voted and at least one
    /// other function also voted.
    pub overlap: f64,
    /// Fraction of items where this function voted and at least one
    /// other non-abstaining function disagreed.
    pub conflict: f64,
}

impl FunctionDiagnostics {
    /// Compute diagnostics for every function in the matrix.
    ///
    /// `names` must be one name per matrix column, in column order.
    pub fn from_matrix(matrix: &LabelMatrix, names: &[String]) -> Vec<FunctionDiagnostics> {
        let n_rows = matrix.n_rows();
        let n_functions = matrix.n_functions();
        debug_assert_eq!(names.len(), n_functions);

        let mut voted = vec![0usize; n_functions];
        let mut positive = vec![0usize; n_functions];
        let mut negative = vec![0usize; n_functions];
        let mut overlapped = vec![0usize; n_functions];
        let mut conflicted = vec![0usize; n_functions];

        for row in matrix.rows() {
            for (i, &vote) in row.iter().enumerate() {
                if vote.is_abstain() {
                    continue;
                }
                voted[i] += 1;
                match vote {
                    Vote::Positive => positive[i] += 1,
                    Vote::Negative => negative[i] += 1,
                    Vote::Abstain => unreachable!(),
                }

                let mut saw_other = false;
                let mut saw_disagreement = false;
                for (j, &other) in row.iter().enumerate() {
                    if i == j || other.is_abstain() {
                        continue;
                    }
                    saw_other = true;
                    if other != vote {
                        saw_disagreement = true;
                        break;
                    }
                }
                if saw_other {
                    overlapped[i] += 1;
                }
                if saw_disagreement {
                    conflicted[i] += 1;
                }
            }
        }

        let rate = |count: usize| {
            if n_rows == 0 {
                0.0
            } else {
                count as f64 / n_rows as f64
            }
        };

        (0..n_functions)
            .map(|i| FunctionDiagnostics {
                name: names.get(i).cloned().unwrap_or_else(|| format!("lf_{i}")),
                coverage: rate(voted[i]),
                positive_rate: rate(positive[i]),
                negative_rate: rate(negative[i]),
                overlap: rate(overlapped[i]),
                conflict: rate(conflicted[i]),
            })
            .collect()
    }

    /// Log the report at debug level, one line per function.
    pub fn log_report(report: &[FunctionDiagnostics]) {
        for d in report {
            debug!(
                function = %d.name,
                coverage = d.coverage,
                positive = d.positive_rate,
                negative = d.negative_rate,
                overlap = d.overlap,
                conflict = d.conflict,
                "labeling function diagnostics"
            );
        }
    }
}
