//! Corner EMF reconstruction for constrained transport.
//!
//! The face-centered fluxes of the transverse field are edge EMFs:
//!
//! E_x = −F_x[B_y],   E_y = F_y[B_x]
//!
//! Averaging the four edge values around a corner is not enough to recover
//! the plane-parallel limit, so Gardiner & Stone (2005, §4.1.1, eq. 41) add
//! upwinded gradients built against a cell-centered reference E_r:
//!
//! E_c = ¼(E_x,s + E_x,n + E_y,w + E_y,e)
//!     + ⅛Δy(∂E/∂y|_¼ − ∂E/∂y|_¾) + ⅛Δx(∂E/∂x|_¼ − ∂E/∂x|_¾)
//!
//! where each gradient is picked from the upwind side by the sign of the
//! mass flux through the adjacent face, and averaged when that flux is zero.
//!
//! Corner `(i, j)` is located at `(i − ½, j − ½)`.

use crate::config::check_spacing;
use crate::error::Result;
use crate::state::{CellField, ScalarField, VariableLayout};
use crate::types::GridShape;

/// Band, beyond the interior, over which edge gradients are formed.
const GRADIENT_MARGIN: usize = 3;

/// Band, beyond the interior, over which corner EMFs are formed.
const CORNER_MARGIN: usize = 2;

// Component slots of the gradient field.
const DY_14: usize = 0;
const DX_14: usize = 1;
const DY_34: usize = 2;
const DX_34: usize = 3;
const N_GRADIENTS: usize = 4;

/// Cell-centered reference and face-centered edge EMFs.
struct EdgeEmfs {
    er: ScalarField,
    ex: ScalarField,
    ey: ScalarField,
}

fn edge_emfs(
    u: &CellField,
    fx: &CellField,
    fy: &CellField,
    layout: &VariableLayout,
    reference: Option<&ScalarField>,
) -> EdgeEmfs {
    let shape = u.shape();
    let er = match reference {
        Some(er) => er.clone(),
        None => ScalarField::from_fn(shape, |i, j| {
            let state = u.state(i, j);
            let rho = state[layout.density()];
            let vx = state[layout.x_momentum()] / rho;
            let vy = state[layout.y_momentum()] / rho;
            -(vx * state[layout.y_field()] - vy * state[layout.x_field()])
        }),
    };
    EdgeEmfs {
        er,
        ex: ScalarField::from_fn(shape, |i, j| -fx.get(i, j, layout.y_field())),
        ey: ScalarField::from_fn(shape, |i, j| fy.get(i, j, layout.x_field())),
    }
}

/// Quarter-point gradients of one row.
fn gradient_row(emfs: &EdgeEmfs, i: usize, dx: f64, dy: f64, row: &mut [f64]) {
    let shape = emfs.er.shape();
    if !shape.i_range(GRADIENT_MARGIN).contains(&i) {
        return;
    }
    let (er, ex, ey) = (&emfs.er, &emfs.ex, &emfs.ey);

    for j in shape.j_range(GRADIENT_MARGIN) {
        let g = &mut row[j * N_GRADIENTS..(j + 1) * N_GRADIENTS];
        g[DY_14] = 2.0 * (er.get(i, j) - ey.get(i, j)) / dy;
        g[DX_14] = 2.0 * (er.get(i, j) - ex.get(i, j)) / dx;
        g[DY_34] = 2.0 * (ey.get(i, j) - er.get(i, j - 1)) / dy;
        g[DX_34] = 2.0 * (ex.get(i, j) - er.get(i - 1, j)) / dx;
    }
}

/// Upwind pick between the values on the low and high side of a face.
#[inline(always)]
fn upwind(mass_flux: f64, low: f64, high: f64) -> f64 {
    if mass_flux > 0.0 {
        low
    } else if mass_flux < 0.0 {
        high
    } else {
        0.5 * (low + high)
    }
}

/// Corner EMFs of one row.
#[allow(clippy::too_many_arguments)]
fn corner_row(
    emfs: &EdgeEmfs,
    grads: &CellField,
    fx: &CellField,
    fy: &CellField,
    layout: &VariableLayout,
    i: usize,
    dx: f64,
    dy: f64,
    row: &mut [f64],
) {
    let shape = grads.shape();
    if !shape.i_range(CORNER_MARGIN).contains(&i) {
        return;
    }
    let rho = layout.density();
    let (ex, ey) = (&emfs.ex, &emfs.ey);

    for j in shape.j_range(CORNER_MARGIN) {
        let dy_14 = upwind(
            fx.get(i, j, rho),
            grads.get(i - 1, j, DY_14),
            grads.get(i, j, DY_14),
        );
        let dy_34 = upwind(
            fx.get(i, j - 1, rho),
            grads.get(i - 1, j, DY_34),
            grads.get(i, j, DY_34),
        );
        let dx_14 = upwind(
            fy.get(i, j, rho),
            grads.get(i, j - 1, DX_14),
            grads.get(i, j, DX_14),
        );
        let dx_34 = upwind(
            fy.get(i - 1, j, rho),
            grads.get(i, j - 1, DX_34),
            grads.get(i, j, DX_34),
        );

        row[j] = 0.25 * (ex.get(i, j) + ex.get(i, j + 1) + ey.get(i, j) + ey.get(i + 1, j))
            + 0.125 * dy * (dy_14 - dy_34)
            + 0.125 * dx * (dx_14 - dx_34);
    }
}

fn check_inputs(
    u: &CellField,
    fx: &CellField,
    fy: &CellField,
    dx: f64,
    dy: f64,
    layout: &VariableLayout,
    reference: Option<&ScalarField>,
) -> Result<GridShape> {
    let shape = u.shape();
    shape.check_ghosts()?;
    check_spacing("dx", dx)?;
    check_spacing("dy", dy)?;
    u.check("u", &shape, layout)?;
    fx.check("fx", &shape, layout)?;
    fy.check("fy", &shape, layout)?;
    if let Some(er) = reference {
        er.check("reference", &shape)?;
    }
    Ok(shape)
}

/// Corner EMF E_z for the constrained-transport field update.
///
/// # Arguments
/// * `u` - Cell-centered conservative state
/// * `fx`, `fy` - Interface fluxes of the x and y sweeps
/// * `dx`, `dy` - Grid spacings
/// * `layout` - Variable layout
/// * `reference` - Cell-centered reference EMF; when `None` it is computed
///   as −(v × B)_z from `u`
///
/// # Returns
/// Corner EMFs within two cells of the interior, zero elsewhere.
#[allow(clippy::too_many_arguments)]
pub fn corner_emf(
    u: &CellField,
    fx: &CellField,
    fy: &CellField,
    dx: f64,
    dy: f64,
    layout: &VariableLayout,
    reference: Option<&ScalarField>,
) -> Result<ScalarField> {
    let shape = check_inputs(u, fx, fy, dx, dy, layout, reference)?;
    tracing::debug!(shape = %shape, reference = reference.is_some(), "corner emf");

    let emfs = edge_emfs(u, fx, fy, layout, reference);

    let mut grads = CellField::zeros(shape, N_GRADIENTS);
    let grad_len = grads.row_len();
    for (i, row) in grads.data.chunks_mut(grad_len).enumerate() {
        gradient_row(&emfs, i, dx, dy, row);
    }

    let mut ec = ScalarField::zeros(shape);
    let qy = shape.qy();
    for (i, row) in ec.data.chunks_mut(qy).enumerate() {
        corner_row(&emfs, &grads, fx, fy, layout, i, dx, dy, row);
    }
    Ok(ec)
}

/// Parallel [`corner_emf`] over `i`-rows using Rayon.
#[cfg(feature = "parallel")]
#[allow(clippy::too_many_arguments)]
pub fn corner_emf_parallel(
    u: &CellField,
    fx: &CellField,
    fy: &CellField,
    dx: f64,
    dy: f64,
    layout: &VariableLayout,
    reference: Option<&ScalarField>,
) -> Result<ScalarField> {
    use rayon::prelude::*;

    let shape = check_inputs(u, fx, fy, dx, dy, layout, reference)?;
    tracing::debug!(shape = %shape, reference = reference.is_some(), "parallel corner emf");

    let emfs = edge_emfs(u, fx, fy, layout, reference);

    let mut grads = CellField::zeros(shape, N_GRADIENTS);
    let grad_len = grads.row_len();
    grads
        .data
        .par_chunks_mut(grad_len)
        .enumerate()
        .for_each(|(i, row)| gradient_row(&emfs, i, dx, dy, row));

    let mut ec = ScalarField::zeros(shape);
    ec.data
        .par_chunks_mut(shape.qy())
        .enumerate()
        .for_each(|(i, row)| corner_row(&emfs, &grads, fx, fy, layout, i, dx, dy, row));
    Ok(ec)
}
