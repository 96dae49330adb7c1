use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use intpdf::{DensityAreaEstimator, EstimatorConfig, Precision};

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("density_area");

    for &n in &[1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("double", n), &n, |b, &n| {
            let mut estimator = DensityAreaEstimator::seeded(42);
            b.iter(|| estimator.estimate(black_box(n)))
        });

        group.bench_with_input(BenchmarkId::new("legacy", n), &n, |b, &n| {
            let config = EstimatorConfig {
                seed: Some(42),
                precision: Precision::Legacy,
                ..EstimatorConfig::default()
            };
            let mut estimator =
                DensityAreaEstimator::new(config).expect("seeded construction cannot fail");
            b.iter(|| estimator.estimate(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
