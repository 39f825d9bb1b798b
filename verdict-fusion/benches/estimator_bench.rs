//! Label model fit throughput over synthetic matrices.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use verdict_fusion::label_model::LabelModelEstimator;
use verdict_fusion::labeling::{LabelMatrix, Vote};

struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn synthetic_matrix(n_rows: usize, n_functions: usize) -> LabelMatrix {
    let mut rng = Lcg(0x5eed);
    let mut matrix = LabelMatrix::new(n_functions);
    for _ in 0..n_rows {
        let positive = rng.next_f64() < 0.4;
        let row: Vec<Vote> = (0..n_functions)
            .map(|_| {
                if rng.next_f64() < 0.35 {
                    Vote::Abstain
                } else if (rng.next_f64() < 0.8) == positive {
                    Vote::Positive
                } else {
                    Vote::Negative
                }
            })
            .collect();
        matrix.push_row(&row);
    }
    matrix
}

fn bench_fit(c: &mut Criterion) {
    let estimator = LabelModelEstimator::with_defaults();
    let mut group = c.benchmark_group("label_model_fit");

    for &n_rows in &[100usize, 1_000, 10_000] {
        let matrix = synthetic_matrix(n_rows, 10);
        let names: Vec<String> = (0..10).map(|i| format!("lf_{i}")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &matrix, |b, m| {
            b.iter(|| estimator.fit(m, &names).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
