//! Shared setup for integration tests.

#![allow(dead_code)]

use std::f64::consts::PI;

use mhd_rs::state::{CellField, ScalarField, VariableLayout, primitive_to_conservative};
use mhd_rs::types::{Direction, GridShape};

pub const TOL: f64 = 1e-10;

/// Brio & Wu (1988) left/right primitive states for a sweep along `dir`.
///
/// ρ = 1, p = 1, B_t = 1 on the left; ρ = 0.125, p = 0.1, B_t = −1 on the
/// right; B_n = 0.75 everywhere. Intended for γ = 2.
pub fn brio_wu_primitive(dir: Direction) -> ([f64; 6], [f64; 6]) {
    let (bx_l, by_l) = dir.join(0.75, 1.0);
    let (bx_r, by_r) = dir.join(0.75, -1.0);
    (
        [1.0, 0.0, 0.0, 1.0, bx_l, by_l],
        [0.125, 0.0, 0.0, 0.1, bx_r, by_r],
    )
}

/// Conservative form of a primitive state.
pub fn conservative(prim: &[f64], layout: &VariableLayout, gamma: f64) -> Vec<f64> {
    let mut u = vec![0.0; layout.nvar()];
    primitive_to_conservative(prim, &mut u, layout, gamma);
    u
}

/// Cell-center coordinates on the unit square.
pub fn cell_center(shape: GridShape, i: usize, j: usize) -> (f64, f64) {
    let dx = 1.0 / shape.nx as f64;
    let dy = 1.0 / shape.ny as f64;
    (
        (i as f64 - shape.ilo() as f64 + 0.5) * dx,
        (j as f64 - shape.jlo() as f64 + 0.5) * dy,
    )
}

/// Orszag–Tang vortex in primitive form, with one passive scalar.
pub fn orszag_tang(shape: GridShape, gamma: f64) -> CellField {
    let b0 = 1.0 / (4.0 * PI).sqrt();
    CellField::from_fn(shape, 7, |i, j| {
        let (x, y) = cell_center(shape, i, j);
        vec![
            gamma * gamma,
            -(2.0 * PI * y).sin(),
            (2.0 * PI * x).sin(),
            gamma,
            -b0 * (2.0 * PI * y).sin(),
            b0 * (4.0 * PI * x).sin(),
            0.5 + 0.25 * (2.0 * PI * (x + y)).cos(),
        ]
    })
}

/// Face-centered normal fields of the Orszag–Tang vortex.
pub fn orszag_tang_faces(shape: GridShape) -> (ScalarField, ScalarField) {
    let b0 = 1.0 / (4.0 * PI).sqrt();
    let dx = 1.0 / shape.nx as f64;
    let bx = ScalarField::from_fn(shape, |i, j| {
        let (_, y) = cell_center(shape, i, j);
        -b0 * (2.0 * PI * y).sin()
    });
    let by = ScalarField::from_fn(shape, |i, j| {
        let (x, _) = cell_center(shape, i, j);
        b0 * (4.0 * PI * (x - 0.5 * dx)).sin()
    });
    (bx, by)
}

/// Brio–Wu shock tube along `dir`, discontinuous at the domain midpoint.
pub fn shock_tube(shape: GridShape, dir: Direction) -> CellField {
    let (left, right) = brio_wu_primitive(dir);
    CellField::from_fn(shape, 6, |i, j| {
        let (x, y) = cell_center(shape, i, j);
        let (s, _) = dir.split(x, y);
        if s < 0.5 { left.to_vec() } else { right.to_vec() }
    })
}
