//! Benchmarks for the central-difference operators.
//!
//! Run with: `cargo bench --bench derivative_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rctmod::Mesh1D;

fn bench_derivatives(c: &mut Criterion) {
    let mut group = c.benchmark_group("central_difference");

    for &n in &[101, 1001, 10001] {
        let mesh = Mesh1D::new(0.1, n).unwrap();
        let field = mesh.sample(|x| (40.0 * x).sin());

        group.bench_with_input(BenchmarkId::new("first", n), &field, |b, f| {
            b.iter(|| mesh.central_difference(black_box(f)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("second", n), &field, |b, f| {
            b.iter(|| mesh.second_central_difference(black_box(f)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derivatives);
criterion_main!(benches);
