//! Stump boosting benchmarks.
//!
//! - Candidate generation vs. sample count
//! - Full training runs per optimizer
//! - Effect of `max_check` on round cost

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stumpboost::model::{BoostConfig, StumpBoostModel};
use stumpboost::testing::{linear_classification, sine_regression};
use stumpboost::training::{generate_candidates, Cost, GradientDescentParams, OptimizerKind};

// =============================================================================
// Candidate Generation
// =============================================================================

fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidates/generate");

    for n_samples in [100, 1_000, 10_000] {
        let data = sine_regression(4, n_samples, 42, 0.1).unwrap();
        group.throughput(Throughput::Elements((n_samples * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_samples), &data, |b, data| {
            b.iter(|| black_box(generate_candidates(black_box(data))))
        });
    }

    group.finish();
}

// =============================================================================
// Training Runs
// =============================================================================

fn bench_optimizers(c: &mut Criterion) {
    let data = linear_classification(3, 200, 7, 0.1).unwrap();
    let mut group = c.benchmark_group("train/optimizer");
    group.sample_size(10);

    let optimizers = [
        (
            "gradient_descent",
            OptimizerKind::GradientDescent(GradientDescentParams {
                max_its: 100,
                ..Default::default()
            }),
        ),
        ("newton", OptimizerKind::newton()),
    ];

    for (name, optimizer) in optimizers {
        let config = BoostConfig::builder()
            .cost(Cost::softmax())
            .optimizer(optimizer)
            .train_portion(0.8)
            .n_rounds(5)
            .max_check(50)
            .build()
            .unwrap();
        group.bench_function(name, |b| {
            b.iter(|| black_box(StumpBoostModel::train(black_box(&data), &config).unwrap()))
        });
    }

    group.finish();
}

fn bench_max_check(c: &mut Criterion) {
    let data = sine_regression(2, 300, 3, 0.1).unwrap();
    let mut group = c.benchmark_group("train/max_check");
    group.sample_size(10);

    for max_check in [10, 50, 200] {
        let config = BoostConfig::builder()
            .optimizer(OptimizerKind::GradientDescent(GradientDescentParams {
                max_its: 50,
                ..Default::default()
            }))
            .n_rounds(5)
            .max_check(max_check)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(max_check), &config, |b, config| {
            b.iter(|| black_box(StumpBoostModel::train(black_box(&data), config).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_candidates, bench_optimizers, bench_max_check);
criterion_main!(benches);
