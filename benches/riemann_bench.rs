//! Benchmarks for the HLLE Riemann solver.
//!
//! Run with: `cargo bench --bench riemann_bench`
//!
//! Measures single-interface solves and full grid sweeps, serial and parallel.

use std::f64::consts::PI;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mhd_rs::config::MhdConfig;
use mhd_rs::diagnostics::NumericalDiagnostics;
use mhd_rs::flux::{
    FluxWorkspace, HlleSolver, RiemannContext, RiemannSolver, SolidWalls, hlle_flux,
    riemann_adiabatic,
};
use mhd_rs::state::{CellField, ScalarField, VariableLayout, primitive_to_conservative};
use mhd_rs::types::{Direction, GridShape};

const GAMMA: f64 = 5.0 / 3.0;

/// Generate left/right conservative state pairs with a face field.
fn generate_test_states(n: usize, layout: &VariableLayout) -> Vec<(Vec<f64>, Vec<f64>, f64)> {
    let mut states = Vec::with_capacity(n);
    for i in 0..n {
        let phase = (i as f64) * 0.1;
        let b_n = 0.5 * phase.cos();

        let prim_l = [
            1.0 + 0.3 * phase.sin(),
            0.4 * phase.cos(),
            -0.2 * phase.sin(),
            1.0 + 0.2 * phase.cos(),
            b_n,
            0.6 * (phase + 0.4).sin(),
        ];
        let prim_r = [
            0.8 + 0.2 * (phase + 0.5).sin(),
            0.3 * (phase + 0.3).cos(),
            0.1 * (phase + 0.2).sin(),
            0.7 + 0.1 * phase.sin(),
            b_n,
            -0.4 * (phase + 0.1).cos(),
        ];

        let mut u_l = vec![0.0; layout.nvar()];
        let mut u_r = vec![0.0; layout.nvar()];
        primitive_to_conservative(&prim_l, &mut u_l, layout, GAMMA);
        primitive_to_conservative(&prim_r, &mut u_r, layout, GAMMA);
        states.push((u_l, u_r, b_n));
    }
    states
}

/// Smooth conservative field with matching interface states.
fn setup_sweep(
    n: usize,
    layout: &VariableLayout,
) -> (CellField, CellField, ScalarField, ScalarField) {
    let shape = GridShape::new(n, n, 4);
    let h = 1.0 / n as f64;
    let prim = |i: usize, j: usize, shift: f64| {
        let x = (i as f64 + shift) * h;
        let y = j as f64 * h;
        vec![
            1.0 + 0.2 * (2.0 * PI * x).sin(),
            -(2.0 * PI * y).sin(),
            (2.0 * PI * x).sin(),
            1.0,
            0.3,
            0.3 * (4.0 * PI * x).sin(),
        ]
    };
    let to_cons = |q: Vec<f64>| {
        let mut u = vec![0.0; layout.nvar()];
        primitive_to_conservative(&q, &mut u, layout, GAMMA);
        u
    };

    let u_l = CellField::from_fn(shape, layout.nvar(), |i, j| to_cons(prim(i, j, -0.6)));
    let u_r = CellField::from_fn(shape, layout.nvar(), |i, j| to_cons(prim(i, j, -0.4)));
    let bx = ScalarField::uniform(shape, 0.3);
    let by = ScalarField::from_fn(shape, |i, _| 0.3 * (4.0 * PI * i as f64 * h).sin());
    (u_l, u_r, bx, by)
}

/// Benchmark single-interface solves.
fn bench_interface(c: &mut Criterion) {
    let mut group = c.benchmark_group("hlle_interface");

    let layout = VariableLayout::standard(0);
    let config = MhdConfig::new(GAMMA);
    let states = generate_test_states(1000, &layout);

    // Allocates a workspace per call
    group.bench_function("hlle_flux", |b| {
        let mut out = vec![0.0; layout.nvar()];
        b.iter(|| {
            let mut diag = NumericalDiagnostics::default();
            let mut total = 0.0;
            for (u_l, u_r, b_n) in &states {
                let fan = hlle_flux(
                    black_box(u_l),
                    black_box(u_r),
                    black_box(*b_n),
                    Direction::X,
                    &layout,
                    &config,
                    &mut diag,
                    &mut out,
                );
                total += out[0] + fan.bp;
            }
            total
        });
    });

    // Reuses one workspace
    group.bench_function("hlle_solver_workspace", |b| {
        let ctx = RiemannContext::new(Direction::X, &layout, &config);
        let mut ws = FluxWorkspace::new(layout.nvar());
        let mut out = vec![0.0; layout.nvar()];
        b.iter(|| {
            let mut diag = NumericalDiagnostics::default();
            let mut total = 0.0;
            for (u_l, u_r, b_n) in &states {
                HlleSolver.solve(
                    black_box(u_l),
                    black_box(u_r),
                    black_box(*b_n),
                    &ctx,
                    &mut ws,
                    &mut diag,
                    &mut out,
                );
                total += out[0];
            }
            total
        });
    });

    group.finish();
}

/// Benchmark full sweeps at different grid sizes.
fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("riemann_sweep");
    group.sample_size(20);

    let layout = VariableLayout::standard(0);
    let config = MhdConfig::new(GAMMA);

    for n in [32, 64, 128] {
        let (u_l, u_r, bx, by) = setup_sweep(n, &layout);

        group.bench_with_input(BenchmarkId::new("serial", n), &n, |b, _| {
            b.iter(|| {
                riemann_adiabatic(
                    black_box(&u_l),
                    black_box(&u_r),
                    &bx,
                    &by,
                    Direction::X,
                    &layout,
                    &config,
                    SolidWalls::NONE,
                )
            });
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, _| {
            b.iter(|| {
                mhd_rs::flux::riemann_adiabatic_parallel(
                    black_box(&u_l),
                    black_box(&u_r),
                    &bx,
                    &by,
                    Direction::X,
                    &layout,
                    &config,
                    SolidWalls::NONE,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_interface, bench_sweep);
criterion_main!(benches);
