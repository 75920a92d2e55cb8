//! Benchmarks for point classification.
//!
//! Run with: `cargo bench --bench classify_bench`
//!
//! Classification is a linear scan over segments, so cost grows with the
//! number of segments.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rctmod::{Domain, Geometry1D, GeometryBuilder1D, Mesh1D, Segment};

/// Geometry with `n_segments` alternating metal/quartz segments.
fn layered_geometry(n_segments: usize) -> Geometry1D {
    let mut builder = GeometryBuilder1D::new("bench");
    builder
        .add_domain(Domain::new(0.0, n_segments as f64).unwrap())
        .unwrap();
    for k in 0..n_segments {
        let label = if k % 2 == 0 { "Metal" } else { "Quartz" };
        let x0 = k as f64;
        builder
            .add_segment(Segment::new(label, x0 + 0.1, x0 + 0.6).unwrap())
            .unwrap();
    }
    builder.build().unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for &n_segments in &[4, 32, 256] {
        let geom = layered_geometry(n_segments);
        let mesh = Mesh1D::new(geom.width(), 1001).unwrap();

        group.bench_with_input(
            BenchmarkId::new("material_map", n_segments),
            &geom,
            |b, geom| b.iter(|| geom.material_map(black_box(&mesh))),
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("classify_all_parallel", n_segments),
            &geom,
            |b, geom| b.iter(|| geom.classify_all_parallel(black_box(mesh.positions()))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
