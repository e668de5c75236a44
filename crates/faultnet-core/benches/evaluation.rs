//! Benchmarks for fault network evaluation.
//!
//! Run with:
//! - `cargo bench --bench evaluation`
//! - `cargo bench --bench evaluation --features parallel`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use faultnet_core::{evaluate_batch, FaultNetworkEvaluator, SeededSource};

fn bench_single_evaluation(c: &mut Criterion) {
    let evaluator = FaultNetworkEvaluator::default();
    let mut group = c.benchmark_group("evaluate");
    for observation in [true, false] {
        group.bench_with_input(
            BenchmarkId::new("observation", observation),
            &observation,
            |b, &obs| {
                let mut rng = SeededSource::from_seed(42);
                b.iter(|| black_box(evaluator.evaluate(black_box(obs), &mut rng)));
            },
        );
    }
    group.finish();
}

fn bench_batch_evaluation(c: &mut Criterion) {
    let evaluator = FaultNetworkEvaluator::default();
    let mut group = c.benchmark_group("evaluate_batch");
    for size in [16_usize, 256, 4096] {
        let observations: Vec<bool> = (0..size).map(|i| i % 3 != 0).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &observations, |b, obs| {
            b.iter(|| black_box(evaluate_batch(&evaluator, black_box(obs), 7)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_evaluation, bench_batch_evaluation);
criterion_main!(benches);
