//! Criterion benchmarks for the polygon and path algorithms.
//! Focus sizes: n in {4, 16, 64, 256} vertices.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p sphtrig

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sphtrig::prelude::*;
use sphtrig::sample::random_point;

fn ring(n: usize, seed: u64) -> (LatLon, Vec<LatLon>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let center = LatLon::new(rng.gen_range(-60.0..60.0), rng.gen_range(-180.0..180.0));
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        radial_jitter: 0.0,
        ..RadialCfg::default()
    };
    let poly = draw_polygon_radial(&center, cfg, ReplayToken { seed, index: n as u64 });
    (center, poly)
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("area_of", n), &n, |b, &n| {
            let (_, poly) = ring(n, 41);
            b.iter(|| area_of(&poly, R_M, true).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("is_enclosed_by", n), &n, |b, &n| {
            let (center, poly) = ring(n, 42);
            b.iter(|| is_enclosed_by(&center, &poly).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("nearest_on", n), &n, |b, &n| {
            let (center, poly) = ring(n, 43);
            b.iter(|| nearest_on(&center, &poly, true, R_M, EquirectCfg::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    group.bench_function(BenchmarkId::new("distance_to", "uniform"), |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(44);
                (random_point(&mut rng), random_point(&mut rng))
            },
            |(p, q)| p.distance_to(&q, R_M, true).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function(BenchmarkId::new("intersection", "uniform"), |b| {
        let mut rng = StdRng::seed_from_u64(45);
        let pairs: Vec<_> = (0..64)
            .map(|_| {
                let p = random_point(&mut rng);
                let q = random_point(&mut rng);
                (p, rng.gen_range(0.0..360.0), q, rng.gen_range(0.0..360.0))
            })
            .collect();
        b.iter(|| {
            for (p, b1, q, b2) in &pairs {
                let _res = intersection(p, *b1, q, *b2, None, true);
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_polygon, bench_path);
criterion_main!(benches);
