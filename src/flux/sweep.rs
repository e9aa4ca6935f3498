//! Grid sweeps of a Riemann solver over every interface along one direction.

use serde::{Deserialize, Serialize};

use crate::config::MhdConfig;
use crate::diagnostics::NumericalDiagnostics;
use crate::error::Result;
use crate::flux::{FluxWorkspace, HlleSolver, RiemannContext, RiemannSolver};
use crate::state::{CellField, ScalarField, VariableLayout};
use crate::types::{Direction, GridShape};

/// Interfaces solved beyond the interior on each side.
const SWEEP_MARGIN: usize = 2;

/// Solid-wall flags for the low and high domain boundary of a sweep.
///
/// Accepted for interface compatibility with boundary modules; the solver
/// treats wall interfaces like any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidWalls {
    /// Wall at the low end of the sweep axis
    pub lower: bool,
    /// Wall at the high end of the sweep axis
    pub upper: bool,
}

impl SolidWalls {
    /// No walls.
    pub const NONE: SolidWalls = SolidWalls {
        lower: false,
        upper: false,
    };
}

/// Interface fluxes of one sweep and the events recorded while computing them.
#[derive(Clone, Debug, PartialEq)]
pub struct RiemannOutput {
    /// Numerical flux at the low-side interface of every cell
    pub flux: CellField,
    /// Floors and degeneracies summed over the sweep
    pub diagnostics: NumericalDiagnostics,
}

fn check_inputs(
    u_l: &CellField,
    u_r: &CellField,
    bx_face: &ScalarField,
    by_face: &ScalarField,
    ctx: &RiemannContext,
) -> Result<GridShape> {
    let shape = u_l.shape();
    shape.check_ghosts()?;
    ctx.config.validate()?;
    u_l.check("u_l", &shape, ctx.layout)?;
    u_r.check("u_r", &shape, ctx.layout)?;
    bx_face.check("bx_face", &shape)?;
    by_face.check("by_face", &shape)?;
    Ok(shape)
}

fn trace_walls(walls: SolidWalls, dir: Direction) {
    if walls != SolidWalls::NONE {
        tracing::trace!(
            direction = %dir,
            lower = walls.lower,
            upper = walls.upper,
            "solid-wall flags have no effect on the flux"
        );
    }
}

/// Solve every interface of row `i` into `row`.
fn sweep_row<S: RiemannSolver + ?Sized>(
    solver: &S,
    u_l: &CellField,
    u_r: &CellField,
    b_face: &ScalarField,
    i: usize,
    ctx: &RiemannContext,
    row: &mut [f64],
) -> NumericalDiagnostics {
    let mut diag = NumericalDiagnostics::default();
    let shape = u_l.shape();
    if !shape.i_range(SWEEP_MARGIN).contains(&i) {
        return diag;
    }

    let nvar = ctx.layout.nvar();
    let mut ws = FluxWorkspace::new(nvar);
    for j in shape.j_range(SWEEP_MARGIN) {
        solver.solve(
            u_l.state(i, j),
            u_r.state(i, j),
            b_face.get(i, j),
            ctx,
            &mut ws,
            &mut diag,
            &mut row[j * nvar..(j + 1) * nvar],
        );
    }
    diag
}

/// Apply `solver` at every interface within two cells of the interior.
///
/// `u_l` and `u_r` hold the conservative states on either side of the
/// interface at the low side of each cell, as produced by reconstruction
/// followed by conversion. The normal field on both sides is taken from
/// `bx_face` (x-sweeps) or `by_face` (y-sweeps). Entries outside the swept
/// band are zero.
///
/// # Errors
/// Fails on a ghost width below four, mismatched shapes or layouts, or an
/// invalid configuration. Numerical degeneracies do not fail; they are
/// returned in [`RiemannOutput::diagnostics`].
pub fn riemann_sweep<S: RiemannSolver + ?Sized>(
    solver: &S,
    u_l: &CellField,
    u_r: &CellField,
    bx_face: &ScalarField,
    by_face: &ScalarField,
    ctx: &RiemannContext,
    walls: SolidWalls,
) -> Result<RiemannOutput> {
    let shape = check_inputs(u_l, u_r, bx_face, by_face, ctx)?;
    let dir = ctx.direction;
    tracing::debug!(direction = %dir, shape = %shape, solver = solver.name(), "riemann sweep");
    trace_walls(walls, dir);

    let b_face = match dir {
        Direction::X => bx_face,
        Direction::Y => by_face,
    };
    let mut flux = CellField::zeros(shape, ctx.layout.nvar());
    let row_len = flux.row_len();

    let mut diagnostics = NumericalDiagnostics::default();
    for (i, row) in flux.data.chunks_mut(row_len).enumerate() {
        diagnostics += sweep_row(solver, u_l, u_r, b_face, i, ctx, row);
    }

    diagnostics.report("riemann");
    Ok(RiemannOutput { flux, diagnostics })
}

/// Parallel [`riemann_sweep`] over `i`-rows using Rayon.
///
/// Bit-identical to the serial version, diagnostics included.
#[cfg(feature = "parallel")]
pub fn riemann_sweep_parallel<S: RiemannSolver + ?Sized>(
    solver: &S,
    u_l: &CellField,
    u_r: &CellField,
    bx_face: &ScalarField,
    by_face: &ScalarField,
    ctx: &RiemannContext,
    walls: SolidWalls,
) -> Result<RiemannOutput> {
    use rayon::prelude::*;

    let shape = check_inputs(u_l, u_r, bx_face, by_face, ctx)?;
    let dir = ctx.direction;
    tracing::debug!(
        direction = %dir,
        shape = %shape,
        solver = solver.name(),
        "parallel riemann sweep"
    );
    trace_walls(walls, dir);

    let b_face = match dir {
        Direction::X => bx_face,
        Direction::Y => by_face,
    };
    let mut flux = CellField::zeros(shape, ctx.layout.nvar());
    let row_len = flux.row_len();

    let diagnostics = flux
        .data
        .par_chunks_mut(row_len)
        .enumerate()
        .map(|(i, row)| sweep_row(solver, u_l, u_r, b_face, i, ctx, row))
        .reduce(NumericalDiagnostics::default, |a, b| a + b);

    diagnostics.report("riemann");
    Ok(RiemannOutput { flux, diagnostics })
}

/// HLLE fluxes for an adiabatic gas along one sweep direction.
///
/// # Arguments
/// * `u_l`, `u_r` - Conservative interface states (left and right of the
///   low-side interface of each cell)
/// * `bx_face`, `by_face` - Face-centered normal fields
/// * `dir` - Sweep direction
/// * `layout` - Variable layout
/// * `config` - Adiabatic index and floors
/// * `walls` - Solid-wall flags (no effect)
///
/// # Example
///
/// ```
/// use mhd_rs::config::MhdConfig;
/// use mhd_rs::flux::{SolidWalls, riemann_adiabatic};
/// use mhd_rs::state::{CellField, ScalarField, VariableLayout};
/// use mhd_rs::types::{Direction, GridShape};
///
/// let shape = GridShape::new(8, 8, 4);
/// let layout = VariableLayout::standard(0);
/// let u = CellField::uniform(shape, &[1.0, 0.0, 0.0, 1.5, 0.0, 0.0]);
/// let b = ScalarField::zeros(shape);
///
/// let out = riemann_adiabatic(
///     &u, &u, &b, &b, Direction::X, &layout, &MhdConfig::new(5.0 / 3.0), SolidWalls::NONE,
/// ).unwrap();
/// assert!((out.flux.get(6, 6, 1) - 1.0).abs() < 1e-12);
/// assert!(out.diagnostics.is_clean());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn riemann_adiabatic(
    u_l: &CellField,
    u_r: &CellField,
    bx_face: &ScalarField,
    by_face: &ScalarField,
    dir: Direction,
    layout: &VariableLayout,
    config: &MhdConfig,
    walls: SolidWalls,
) -> Result<RiemannOutput> {
    let ctx = RiemannContext::new(dir, layout, config);
    riemann_sweep(&HlleSolver, u_l, u_r, bx_face, by_face, &ctx, walls)
}

/// Parallel [`riemann_adiabatic`].
#[cfg(feature = "parallel")]
#[allow(clippy::too_many_arguments)]
pub fn riemann_adiabatic_parallel(
    u_l: &CellField,
    u_r: &CellField,
    bx_face: &ScalarField,
    by_face: &ScalarField,
    dir: Direction,
    layout: &VariableLayout,
    config: &MhdConfig,
    walls: SolidWalls,
) -> Result<RiemannOutput> {
    let ctx = RiemannContext::new(dir, layout, config);
    riemann_sweep_parallel(&HlleSolver, u_l, u_r, bx_face, by_face, &ctx, walls)
}
