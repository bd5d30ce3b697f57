//! Benchmarks for drape cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use drape::*;

fn bench_construction(c: &mut Criterion) {
    c.bench_function("cloth_55x45_construct", |b| {
        b.iter(|| {
            let cloth: Cloth<f32> = Cloth::new(14.0, 10.0, 55, 45).unwrap();
            cloth.constraint_count()
        });
    });
}

fn bench_frames(c: &mut Criterion) {
    c.bench_function("cloth_55x45_60_frames", |b| {
        b.iter(|| {
            let mut cloth: Cloth<f32> = Cloth::new(14.0, 10.0, 55, 45).unwrap();
            for frame in 0..60 {
                cloth.add_force(Vec3::new(0.0, -0.05, 0.0));
                cloth.wind_force(Vec3::new(0.125, 0.0, 0.05));
                cloth.advance();
                let z = (frame as f32 / 50.0).cos() * 7.0;
                cloth.resolve_sphere_collision(Vec3::new(7.0, -5.0, z), 2.0);
            }
            cloth.positions()
        });
    });
}

fn bench_low_iterations(c: &mut Criterion) {
    c.bench_function("cloth_55x45_4_iterations_60_frames", |b| {
        b.iter(|| {
            let config = ClothConfig::new().with_iterations(4);
            let mut cloth: Cloth<f32> = Cloth::with_config(14.0, 10.0, 55, 45, config).unwrap();
            for _ in 0..60 {
                cloth.add_force(Vec3::new(0.0, -0.05, 0.0));
                cloth.advance();
            }
            cloth.positions()
        });
    });
}

criterion_group!(benches, bench_construction, bench_frames, bench_low_iterations);
criterion_main!(benches);
