//! Primitive ↔ conservative conversion.
//!
//! The kernels never convert on their own: reconstruction works on
//! primitives, the Riemann solver on conservative states, and the caller
//! decides where the conversion happens. These helpers implement the ideal
//! gas closure `E = p/(γ−1) + ½ρ|v|² + ½|B|²` for callers that do not bring
//! their own.

use crate::error::Result;
use crate::state::{CellField, VariableLayout};

/// Convert one primitive state to conservative form.
pub fn primitive_to_conservative(
    prim: &[f64],
    cons: &mut [f64],
    layout: &VariableLayout,
    gamma: f64,
) {
    let rho = prim[layout.density()];
    let u = prim[layout.x_momentum()];
    let v = prim[layout.y_momentum()];
    let p = prim[layout.energy()];
    let bx = prim[layout.x_field()];
    let by = prim[layout.y_field()];

    cons[layout.density()] = rho;
    cons[layout.x_momentum()] = rho * u;
    cons[layout.y_momentum()] = rho * v;
    cons[layout.energy()] =
        p / (gamma - 1.0) + 0.5 * rho * (u * u + v * v) + 0.5 * (bx * bx + by * by);
    cons[layout.x_field()] = bx;
    cons[layout.y_field()] = by;
    for k in layout.species() {
        cons[k] = rho * prim[k];
    }
}

/// Convert one conservative state to primitive form.
///
/// No floors are applied; a vacuum or negative-pressure state converts to
/// whatever the arithmetic gives.
pub fn conservative_to_primitive(
    cons: &[f64],
    prim: &mut [f64],
    layout: &VariableLayout,
    gamma: f64,
) {
    let rho = cons[layout.density()];
    let u = cons[layout.x_momentum()] / rho;
    let v = cons[layout.y_momentum()] / rho;
    let bx = cons[layout.x_field()];
    let by = cons[layout.y_field()];
    let e_int = cons[layout.energy()] - 0.5 * rho * (u * u + v * v) - 0.5 * (bx * bx + by * by);

    prim[layout.density()] = rho;
    prim[layout.x_momentum()] = u;
    prim[layout.y_momentum()] = v;
    prim[layout.energy()] = (gamma - 1.0) * e_int;
    prim[layout.x_field()] = bx;
    prim[layout.y_field()] = by;
    for k in layout.species() {
        prim[k] = cons[k] / rho;
    }
}

/// Convert a whole primitive field (ghosts included) to conservative form.
pub fn primitive_field_to_conservative(
    prim: &CellField,
    layout: &VariableLayout,
    gamma: f64,
) -> Result<CellField> {
    prim.check("prim", &prim.shape(), layout)?;
    let nvar = layout.nvar();
    let mut cons = CellField::zeros(prim.shape(), nvar);
    for (src, dst) in prim
        .data
        .chunks_exact(nvar)
        .zip(cons.data.chunks_exact_mut(nvar))
    {
        primitive_to_conservative(src, dst, layout, gamma);
    }
    Ok(cons)
}

/// Convert a whole conservative field (ghosts included) to primitive form.
pub fn conservative_field_to_primitive(
    cons: &CellField,
    layout: &VariableLayout,
    gamma: f64,
) -> Result<CellField> {
    cons.check("cons", &cons.shape(), layout)?;
    let nvar = layout.nvar();
    let mut prim = CellField::zeros(cons.shape(), nvar);
    for (src, dst) in cons
        .data
        .chunks_exact(nvar)
        .zip(prim.data.chunks_exact_mut(nvar))
    {
        conservative_to_primitive(src, dst, layout, gamma);
    }
    Ok(prim)
}
