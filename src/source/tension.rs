//! Magnetic-tension momentum source for the CTU split update.
//!
//! In a one-dimensional sweep the normal-field derivative ∂B_n/∂n is not
//! zero even though ∇·B = 0 holds in 2D. The split update compensates with
//! a momentum source proportional to the field times that derivative:
//!
//! S(ρv_x) = B_x ΔB_n/Δn,   S(ρv_y) = B_y ΔB_n/Δn
//!
//! with ΔB_n taken between the high and low faces of the cell. Energy and
//! field sources vanish under the assumption v_z = B_z = 0.
//!
//! Reference: Gardiner & Stone (2005), J. Comput. Phys. 205, §5.

use crate::config::check_spacing;
use crate::error::Result;
use crate::source::{SourceContext, SourceTerm};
use crate::state::{CellField, VariableLayout};
use crate::types::Direction;

/// Momentum source from the discrete normal-field divergence of a sweep.
#[derive(Clone, Copy, Debug, Default)]
pub struct TensionSource;

impl SourceTerm for TensionSource {
    #[inline]
    fn evaluate(&self, ctx: &SourceContext, out: &mut [f64]) {
        let layout = ctx.layout;
        let grad = ctx.normal_gradient();
        out[layout.x_momentum()] = ctx.state[layout.x_field()] * grad;
        out[layout.y_momentum()] = ctx.state[layout.y_field()] * grad;
    }

    fn name(&self) -> &'static str {
        "magnetic_tension"
    }
}

/// Evaluate `source` in every cell of row `i`, skipping the outermost ring.
#[allow(clippy::too_many_arguments)]
fn source_row<S: SourceTerm + ?Sized>(
    source: &S,
    u: &CellField,
    u_face: &CellField,
    i: usize,
    dir: Direction,
    dn: f64,
    layout: &VariableLayout,
    row: &mut [f64],
) {
    let shape = u.shape();
    if i == 0 || i + 1 >= shape.qx() {
        return;
    }
    let nvar = layout.nvar();
    let bn = layout.normal_field(dir);

    for j in 1..shape.qy() - 1 {
        let (in_, jn) = dir.next(i, j);
        let ctx = SourceContext {
            state: u.state(i, j),
            delta_bn: u_face.get(in_, jn, bn) - u_face.get(i, j, bn),
            dn,
            direction: dir,
            layout,
        };
        source.evaluate(&ctx, &mut row[j * nvar..(j + 1) * nvar]);
    }
}

fn check_inputs(u: &CellField, u_face: &CellField, dn: f64, layout: &VariableLayout) -> Result<()> {
    let shape = u.shape();
    shape.check_ghosts()?;
    check_spacing("dn", dn)?;
    u.check("u", &shape, layout)?;
    u_face.check("u_face", &shape, layout)
}

/// Magnetic-tension source for one sweep direction.
///
/// # Arguments
/// * `u` - Cell-centered conservative state
/// * `u_face` - Interface state whose normal-field slot holds the face
///   field at the low-side interface of each cell
/// * `dir` - Sweep direction
/// * `dn` - Grid spacing along `dir`
/// * `layout` - Variable layout
///
/// # Returns
/// Source array, nonzero only in the momentum components of cells one or
/// more cells away from the array edge.
pub fn tension_source(
    u: &CellField,
    u_face: &CellField,
    dir: Direction,
    dn: f64,
    layout: &VariableLayout,
) -> Result<CellField> {
    check_inputs(u, u_face, dn, layout)?;
    tracing::debug!(direction = %dir, shape = %u.shape(), "tension source");

    let mut out = CellField::zeros(u.shape(), layout.nvar());
    let row_len = out.row_len();
    for (i, row) in out.data.chunks_mut(row_len).enumerate() {
        source_row(&TensionSource, u, u_face, i, dir, dn, layout, row);
    }
    Ok(out)
}

/// Parallel [`tension_source`] over `i`-rows using Rayon.
#[cfg(feature = "parallel")]
pub fn tension_source_parallel(
    u: &CellField,
    u_face: &CellField,
    dir: Direction,
    dn: f64,
    layout: &VariableLayout,
) -> Result<CellField> {
    use rayon::prelude::*;

    check_inputs(u, u_face, dn, layout)?;
    tracing::debug!(direction = %dir, shape = %u.shape(), "parallel tension source");

    let mut out = CellField::zeros(u.shape(), layout.nvar());
    let row_len = out.row_len();
    out.data
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(i, row)| source_row(&TensionSource, u, u_face, i, dir, dn, layout, row));
    Ok(out)
}
