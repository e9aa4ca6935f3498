//! Benchmarks for interface reconstruction and the corner EMF.
//!
//! Run with: `cargo bench --bench reconstruction_bench`
//!
//! Compares the built-in limiters and the serial and parallel sweeps.

use std::f64::consts::PI;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mhd_rs::ct::corner_emf;
use mhd_rs::equations::IdealMhd;
use mhd_rs::reconstruction::{MonotonizedCentral, StandardLimiter, StoneGardiner, interface_states};
use mhd_rs::state::{CellField, VariableLayout};
use mhd_rs::types::{Direction, GridShape};

/// Orszag–Tang style primitive field.
fn setup_problem(n: usize) -> CellField {
    let shape = GridShape::new(n, n, 4);
    let h = 1.0 / n as f64;
    CellField::from_fn(shape, 6, |i, j| {
        let x = i as f64 * h;
        let y = j as f64 * h;
        vec![
            25.0 / 9.0,
            -(2.0 * PI * y).sin(),
            (2.0 * PI * x).sin(),
            5.0 / 3.0,
            -0.28 * (2.0 * PI * y).sin(),
            0.28 * (4.0 * PI * x).sin(),
        ]
    })
}

/// Benchmark reconstruction with each limiter.
fn bench_limiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruction_limiters");

    let layout = VariableLayout::standard(0);
    let prim = setup_problem(64);

    group.bench_function("stone_gardiner", |b| {
        b.iter(|| interface_states(black_box(&prim), Direction::X, &layout, &StoneGardiner));
    });

    group.bench_function("monotonized_central", |b| {
        b.iter(|| interface_states(black_box(&prim), Direction::X, &layout, &MonotonizedCentral));
    });

    // Enum dispatch as used through the configuration
    group.bench_function("standard_enum", |b| {
        let limiter = StandardLimiter::default();
        b.iter(|| interface_states(black_box(&prim), Direction::X, &layout, &limiter));
    });

    group.finish();
}

/// Benchmark serial against parallel reconstruction.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruction_scaling");
    group.sample_size(20);

    let layout = VariableLayout::standard(0);

    for n in [32, 64, 128, 256] {
        let prim = setup_problem(n);

        group.bench_with_input(BenchmarkId::new("serial", n), &n, |b, _| {
            b.iter(|| interface_states(black_box(&prim), Direction::Y, &layout, &StoneGardiner));
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, _| {
            b.iter(|| {
                mhd_rs::reconstruction::interface_states_parallel(
                    black_box(&prim),
                    Direction::Y,
                    &layout,
                    &StoneGardiner,
                )
            });
        });
    }

    group.finish();
}

/// Benchmark the corner EMF on physical fluxes of the cell state.
fn bench_corner_emf(c: &mut Criterion) {
    let mut group = c.benchmark_group("corner_emf");

    let layout = VariableLayout::standard(0);
    let mhd = IdealMhd::new(5.0 / 3.0);

    for n in [64, 128] {
        let prim = setup_problem(n);
        let shape = prim.shape();
        let u = mhd_rs::state::primitive_field_to_conservative(&prim, &layout, 5.0 / 3.0)
            .expect("valid field");
        let fx = CellField::from_fn(shape, 6, |i, j| {
            mhd.flux(u.state(i, j), Direction::X, &layout)
        });
        let fy = CellField::from_fn(shape, 6, |i, j| {
            mhd.flux(u.state(i, j), Direction::Y, &layout)
        });
        let h = 1.0 / n as f64;

        group.bench_with_input(BenchmarkId::new("serial", n), &n, |b, _| {
            b.iter(|| corner_emf(black_box(&u), &fx, &fy, h, h, &layout, None));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_limiters, bench_scaling, bench_corner_emf);
criterion_main!(benches);
