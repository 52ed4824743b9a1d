//! Criterion benchmark for the two scalar loop orders.
//!
//! Operands are regenerated per batch so every measured multiply sees
//! fresh inputs, matching the runner's per-trial operand lifecycle.

use std::time::Duration;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use matmul_bench::{Operands, multiply, multiply_ikj};

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");
    group.sample_size(10);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    for n in [64, 128, 256, 500] {
        group.bench_with_input(BenchmarkId::new("ijk", n), &n, |bench, &n| {
            bench.iter_batched(
                || Operands::generate(n, None).unwrap(),
                |ops| multiply(&ops.a, &ops.b).unwrap(),
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("ikj", n), &n, |bench, &n| {
            bench.iter_batched(
                || Operands::generate(n, None).unwrap(),
                |ops| multiply_ikj(&ops.a, &ops.b).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiplication);
criterion_main!(benches);
