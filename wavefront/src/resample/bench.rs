//! Benchmark module for resampling.
//! Run with: cargo bench -p wavefront --features bench --bench resample

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};

use super::{resample, GeometricTransform, InterpolationOrder};
use crate::field::Field;

/// Register resampling benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    benchmark_orders(c);
    benchmark_sizes(c);
}

fn generate_gradient_field(size: usize) -> Field {
    Field::from_fn(size, size, |x, y| (x + y) as f64 / (2 * size) as f64)
}

fn benchmark_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_orders");

    let size = 256;
    let field = generate_gradient_field(size);
    group.throughput(Throughput::Elements((size * size) as u64));

    for (name, order) in [
        ("nearest", InterpolationOrder::Nearest),
        ("bilinear", InterpolationOrder::Bilinear),
        ("bicubic", InterpolationOrder::Bicubic),
    ] {
        let transform = GeometricTransform::new(size)
            .with_shift(0.5, 0.25)
            .with_rotation(10.0)
            .with_order(order);
        group.bench_function(BenchmarkId::new("shift_rotate", name), |b| {
            b.iter(|| resample(black_box(&field), black_box(&transform)))
        });
    }

    group.finish();
}

fn benchmark_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_sizes");

    for size in [64, 128, 512] {
        let field = generate_gradient_field(size);
        let transform = GeometricTransform::new(size).with_shift(0.5, 0.25);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("bilinear", size), &field, |b, field| {
            b.iter(|| resample(black_box(field), black_box(&transform)))
        });
    }

    group.finish();
}
