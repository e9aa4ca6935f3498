//! Source term abstraction for the split update.
//!
//! A source term is evaluated per cell from the cell-centered conservative
//! state and the jump of the face-centered normal field across the cell:
//!
//! dU/dt = −∇·F + S(U, ΔB_n)
//!
//! Implementations must be thread-safe (`Send + Sync`) for parallel sweeps.

use crate::state::VariableLayout;
use crate::types::Direction;

/// Context for evaluating a source term in one cell.
#[derive(Clone, Copy, Debug)]
pub struct SourceContext<'a> {
    /// Cell-centered conservative state
    pub state: &'a [f64],
    /// Normal-field jump across the cell, B_n(high face) − B_n(low face)
    pub delta_bn: f64,
    /// Grid spacing along the sweep direction
    pub dn: f64,
    /// Sweep direction
    pub direction: Direction,
    /// Variable layout
    pub layout: &'a VariableLayout,
}

impl<'a> SourceContext<'a> {
    /// Discrete normal-field divergence along the sweep, ΔB_n / dn.
    #[inline]
    pub fn normal_gradient(&self) -> f64 {
        self.delta_bn / self.dn
    }
}

/// Trait for per-cell source terms of the MHD system.
pub trait SourceTerm: Send + Sync {
    /// Write the source contribution of one cell into `out`.
    ///
    /// `out` arrives zeroed; components the source does not touch stay zero.
    fn evaluate(&self, ctx: &SourceContext, out: &mut [f64]);

    /// Name of this source term for logging.
    fn name(&self) -> &'static str;
}
