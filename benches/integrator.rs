//! Benchmarks for the CPU simulation core.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use strange_trails::agent::Population;
use strange_trails::dynamics::{aizawa, lorenz};
use strange_trails::integrator::rk4_step;
use strange_trails::trail::Trail;

fn bench_rk4_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("rk4_step");

    group.bench_function("lorenz", |b| {
        let s = Vec3::new(0.1, 0.0, 99.0);
        b.iter(|| black_box(rk4_step(lorenz, black_box(s), 0.005)))
    });

    group.bench_function("aizawa", |b| {
        let s = Vec3::new(0.1, 0.0, 0.0);
        b.iter(|| black_box(rk4_step(aizawa, black_box(s), 0.005)))
    });

    group.finish();
}

fn bench_trail_push(c: &mut Criterion) {
    c.bench_function("trail_push_saturated", |b| {
        let mut trail = Trail::new(5000);
        for i in 0..5000 {
            trail.push(Vec3::splat(i as f32));
        }
        b.iter(|| trail.push(black_box(Vec3::ONE)))
    });
}

fn bench_population_frame(c: &mut Criterion) {
    c.bench_function("population_step_frame", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        let mut population = Population::seed(&mut rng);
        b.iter(|| population.step_frame())
    });
}

criterion_group!(
    benches,
    bench_rk4_step,
    bench_trail_push,
    bench_population_frame
);
criterion_main!(benches);
