//! Criterion benchmarks for full-curve sampling.

use calor_bench::{redraw_times, reference_profile, stress_profile};
use calor_core::{BoundaryCondition, InitialCondition};
use calor_engine::SolutionSampler;
use calor_test_utils::{finite_params, infinite_params};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark: one 500-point infinite-bar curve.
fn bench_sample_infinite(c: &mut Criterion) {
    let profile = reference_profile(infinite_params(InitialCondition::TwoPeaks));
    let sampler = SolutionSampler::new(profile.config).unwrap();

    c.bench_function("sample_infinite_500", |b| {
        b.iter(|| {
            let curve = sampler
                .sample(black_box(1.0), profile.points, &profile.params)
                .unwrap();
            black_box(curve);
        });
    });
}

/// Benchmark: one 500-point finite-bar curve per boundary family.
fn bench_sample_finite(c: &mut Criterion) {
    for bc in BoundaryCondition::ALL {
        let profile = reference_profile(finite_params(InitialCondition::Chaotic, bc));
        let sampler = SolutionSampler::new(profile.config).unwrap();

        c.bench_function(&format!("sample_finite_{bc}_500"), |b| {
            b.iter(|| {
                let curve = sampler
                    .sample(black_box(1.0), profile.points, &profile.params)
                    .unwrap();
                black_box(curve);
            });
        });
    }
}

/// Benchmark: a full frame with overlays at doubled resolution.
fn bench_frame_stress(c: &mut Criterion) {
    let profile = stress_profile(infinite_params(InitialCondition::Gaussian));
    let sampler = SolutionSampler::new(profile.config).unwrap();

    c.bench_function("frame_infinite_stress", |b| {
        b.iter(|| {
            let frame = sampler
                .sample_frame(black_box(2.0), profile.points, &profile.params)
                .unwrap();
            black_box(frame);
        });
    });
}

/// Benchmark: one second of 60 Hz redraws on a finite Neumann bar.
fn bench_redraw_second(c: &mut Criterion) {
    let profile = reference_profile(finite_params(
        InitialCondition::Step,
        BoundaryCondition::Neumann,
    ));
    let sampler = SolutionSampler::new(profile.config).unwrap();
    let times = redraw_times(60);

    c.bench_function("redraw_second_neumann", |b| {
        b.iter(|| {
            for &t in &times {
                let curve = sampler.sample(t, 100, &profile.params).unwrap();
                black_box(curve);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_sample_infinite,
    bench_sample_finite,
    bench_frame_stress,
    bench_redraw_second
);
criterion_main!(benches);
