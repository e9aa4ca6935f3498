//! Trait-based Riemann solver abstraction.
//!
//! A Riemann solver turns the left/right conservative states and the
//! face-centered normal field at one interface into a numerical flux. The
//! grid sweep in [`riemann_sweep`](super::riemann_sweep) is generic over the
//! solver, so a different approximate solver only needs this trait.
//!
//! # Example
//! ```
//! use mhd_rs::config::MhdConfig;
//! use mhd_rs::diagnostics::NumericalDiagnostics;
//! use mhd_rs::flux::{FluxWorkspace, HlleSolver, RiemannContext, RiemannSolver};
//! use mhd_rs::state::VariableLayout;
//! use mhd_rs::types::Direction;
//!
//! let layout = VariableLayout::standard(0);
//! let config = MhdConfig::new(1.4);
//! let ctx = RiemannContext::new(Direction::X, &layout, &config);
//! let mut ws = FluxWorkspace::new(layout.nvar());
//! let mut diag = NumericalDiagnostics::default();
//! let mut flux = [0.0; 6];
//!
//! let u = [1.0, 0.0, 0.0, 2.5, 0.0, 0.0];
//! HlleSolver.solve(&u, &u, 0.0, &ctx, &mut ws, &mut diag, &mut flux);
//! assert!((flux[1] - 1.0).abs() < 1e-12);
//! ```

use crate::config::MhdConfig;
use crate::diagnostics::NumericalDiagnostics;
use crate::state::VariableLayout;
use crate::types::Direction;

// =============================================================================
// Riemann Context
// =============================================================================

/// Parameters shared by every interface of one sweep.
#[derive(Clone, Copy, Debug)]
pub struct RiemannContext<'a> {
    /// Sweep direction
    pub direction: Direction,
    /// Variable layout
    pub layout: &'a VariableLayout,
    /// Adiabatic index and floors
    pub config: &'a MhdConfig,
}

impl<'a> RiemannContext<'a> {
    /// Create a new context.
    #[inline]
    pub fn new(direction: Direction, layout: &'a VariableLayout, config: &'a MhdConfig) -> Self {
        Self {
            direction,
            layout,
            config,
        }
    }
}

// =============================================================================
// Workspace
// =============================================================================

/// Scratch storage for one interface solve.
///
/// Allocated once per row and reused across interfaces so the inner loop
/// does not allocate.
#[derive(Clone, Debug)]
pub struct FluxWorkspace {
    /// Physical flux of the left state
    pub f_l: Vec<f64>,
    /// Physical flux of the right state
    pub f_r: Vec<f64>,
    /// Roe-averaged conservative state
    pub u_avg: Vec<f64>,
}

impl FluxWorkspace {
    /// Create a workspace for `nvar` components.
    pub fn new(nvar: usize) -> Self {
        Self {
            f_l: vec![0.0; nvar],
            f_r: vec![0.0; nvar],
            u_avg: vec![0.0; nvar],
        }
    }
}

// =============================================================================
// Riemann Solver Trait
// =============================================================================

/// Trait for approximate Riemann solvers of ideal MHD.
///
/// # Implementation Notes
///
/// - Solvers should be consistent: identical states give the physical flux
/// - Degenerate interfaces are counted in `diag`, never panicked on
/// - `solve` should not allocate; use the workspace
pub trait RiemannSolver: Send + Sync {
    /// Compute the numerical flux at one interface into `out`.
    ///
    /// # Arguments
    /// * `u_l` - Left conservative state
    /// * `u_r` - Right conservative state
    /// * `b_face` - Face-centered normal field at this interface
    /// * `ctx` - Sweep parameters
    /// * `ws` - Scratch storage sized for `ctx.layout`
    /// * `diag` - Floor and degeneracy counters
    /// * `out` - Flux output, one entry per component
    #[allow(clippy::too_many_arguments)]
    fn solve(
        &self,
        u_l: &[f64],
        u_r: &[f64],
        b_face: f64,
        ctx: &RiemannContext,
        ws: &mut FluxWorkspace,
        diag: &mut NumericalDiagnostics,
        out: &mut [f64],
    );

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Harten-Lax-van Leer-Einfeldt solver with Roe-averaged bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct HlleSolver;

impl RiemannSolver for HlleSolver {
    #[inline]
    fn solve(
        &self,
        u_l: &[f64],
        u_r: &[f64],
        b_face: f64,
        ctx: &RiemannContext,
        ws: &mut FluxWorkspace,
        diag: &mut NumericalDiagnostics,
        out: &mut [f64],
    ) {
        super::hlle::hlle_flux_with(u_l, u_r, b_face, ctx, ws, diag, out);
    }

    fn name(&self) -> &'static str {
        "hlle"
    }
}
