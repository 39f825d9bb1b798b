//! Label model estimation against synthetic generative data.

use verdict_core::config::EstimatorConfig;
use verdict_fusion::label_model::LabelModelEstimator;
use verdict_fusion::labeling::{LabelMatrix, Vote};

/// Deterministic splitmix-style generator; tests never pull in a
/// randomness crate.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Draw a matrix from the assumed generative model: latent labels from
/// the prior, per-function abstention by coverage, correct votes with
/// probability alpha.
fn synthetic_matrix(
    n: usize,
    prior: f64,
    coverage: &[f64],
    accuracy: &[f64],
    seed: u64,
) -> LabelMatrix {
    let m = coverage.len();
    assert_eq!(m, accuracy.len());
    let mut rng = Lcg::new(seed);
    let mut matrix = LabelMatrix::new(m);

    for _ in 0..n {
        let y_positive = rng.next_f64() < prior;
        let row: Vec<Vote> = (0..m)
            .map(|i| {
                if rng.next_f64() >= coverage[i] {
                    return Vote::Abstain;
                }
                let correct = rng.next_f64() < accuracy[i];
                match (y_positive, correct) {
                    (true, true) | (false, false) => Vote::Positive,
                    (true, false) | (false, true) => Vote::Negative,
                }
            })
            .collect();
        matrix.push_row(&row);
    }
    matrix
}

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("lf_{i}")).collect()
}

#[test]
fn recovers_known_accuracies_and_prior() {
    let coverage = [0.7, 0.6, 0.8, 0.5, 0.65];
    let accuracy = [0.85, 0.8, 0.9, 0.75, 0.8];
    let prior = 0.35;

    let matrix = synthetic_matrix(8000, prior, &coverage, &accuracy, 20_240_817);
    let estimator = LabelModelEstimator::with_defaults();
    let model = estimator.fit(&matrix, &names(5)).unwrap();

    assert!(
        (model.prior - prior).abs() <= 0.05,
        "prior {} vs true {}",
        model.prior,
        prior
    );
    for (reliability, (&true_coverage, &true_accuracy)) in model
        .reliabilities()
        .iter()
        .zip(coverage.iter().zip(accuracy.iter()))
    {
        assert!(
            (reliability.coverage - true_coverage).abs() <= 0.05,
            "{}: coverage {} vs true {}",
            reliability.name,
            reliability.coverage,
            true_coverage
        );
        assert!(
            (reliability.accuracy - true_accuracy).abs() <= 0.05,
            "{}: accuracy {} vs true {}",
            reliability.name,
            reliability.accuracy,
            true_accuracy
        );
    }
}

#[test]
fn all_abstain_row_gets_exactly_the_fitted_prior() {
    let coverage = [0.7, 0.7, 0.7];
    let accuracy = [0.85, 0.8, 0.9];
    let mut matrix = synthetic_matrix(500, 0.4, &coverage, &accuracy, 7);
    matrix.push_row(&[Vote::Abstain, Vote::Abstain, Vote::Abstain]);

    let estimator = LabelModelEstimator::with_defaults();
    let model = estimator.fit(&matrix, &names(3)).unwrap();
    let posteriors = model.predict(&matrix).unwrap();

    // Bit-exact, regardless of what every other row voted.
    assert_eq!(posteriors[matrix.n_rows() - 1], model.prior);
}

#[test]
fn posteriors_separate_the_two_classes() {
    let coverage = [0.8, 0.8, 0.8, 0.8];
    let accuracy = [0.85, 0.85, 0.85, 0.85];
    let matrix = synthetic_matrix(2000, 0.5, &coverage, &accuracy, 99);

    let estimator = LabelModelEstimator::with_defaults();
    let model = estimator.fit(&matrix, &names(4)).unwrap();
    let posteriors = model.predict(&matrix).unwrap();

    // Rows with a positive majority should land above 0.5, negative
    // majorities below; sanity-check on a margin of the batch.
    let mut separated = 0usize;
    let mut decided = 0usize;
    for (row, &q) in matrix.rows().zip(&posteriors) {
        let pos = row.iter().filter(|v| **v == Vote::Positive).count();
        let neg = row.iter().filter(|v| **v == Vote::Negative).count();
        if pos > neg {
            decided += 1;
            if q > 0.5 {
                separated += 1;
            }
        } else if neg > pos {
            decided += 1;
            if q < 0.5 {
                separated += 1;
            }
        }
    }
    assert!(decided > 0);
    assert_eq!(separated, decided, "every majority row lands on its side");
}

#[test]
fn reruns_on_same_data_are_identical() {
    let matrix = synthetic_matrix(300, 0.3, &[0.6, 0.7], &[0.8, 0.85], 1234);
    let estimator = LabelModelEstimator::new(EstimatorConfig::default());

    let a = estimator.fit(&matrix, &names(2)).unwrap();
    let b = estimator.fit(&matrix, &names(2)).unwrap();

    assert_eq!(a.prior, b.prior);
    assert_eq!(a.reliabilities(), b.reliabilities());
    assert_eq!(
        a.predict(&matrix).unwrap(),
        b.predict(&matrix).unwrap()
    );
}

#[test]
fn budget_exhaustion_returns_best_parameters_not_an_error() {
    let matrix = synthetic_matrix(400, 0.4, &[0.6, 0.7, 0.5], &[0.8, 0.75, 0.85], 42);
    let config = EstimatorConfig {
        max_epochs: 2,
        tolerance: 1e-12,
        ..EstimatorConfig::default()
    };
    let model = LabelModelEstimator::new(config)
        .fit(&matrix, &names(3))
        .unwrap();

    assert!(!model.converged);
    assert_eq!(model.epochs_run, 2);
    assert!(model.prior > 0.0 && model.prior < 1.0);
}
