//! # mhd-rs
//!
//! Finite-volume building blocks for 2D ideal adiabatic MHD on ghosted
//! structured grids.
//!
//! This crate provides the numerical core consumed by a corner-transport-
//! upwind (CTU) integrator:
//! - Piecewise-linear limited reconstruction of interface states
//! - The ideal MHD flux and Roe-linearized characteristic speeds
//! - HLLE interface fluxes, per interface and per sweep
//! - Corner EMF reconstruction for constrained transport
//! - The magnetic-tension momentum source of the split update
//!
//! Grid allocation, boundary conditions, time-step selection and I/O belong
//! to the caller. Every entry point takes already-ghosted fields (at least
//! [`REQUIRED_GHOSTS`] ghost cells) and a [`VariableLayout`].
//!
//! # Example
//!
//! ```
//! use mhd_rs::prelude::*;
//!
//! let shape = GridShape::new(16, 16, 4);
//! let layout = VariableLayout::standard(0);
//! let config = MhdConfig::new(5.0 / 3.0);
//!
//! let prim = CellField::uniform(shape, &[1.0, 0.1, 0.0, 1.0, 0.5, 0.0]);
//! let states = interface_states(&prim, Direction::X, &layout, &config.limiter)?;
//! let u_l = primitive_field_to_conservative(&states.left, &layout, config.gamma)?;
//! let u_r = primitive_field_to_conservative(&states.right, &layout, config.gamma)?;
//!
//! let bx = ScalarField::uniform(shape, 0.5);
//! let by = ScalarField::zeros(shape);
//! let out = riemann_adiabatic(
//!     &u_l,
//!     &u_r,
//!     &bx,
//!     &by,
//!     Direction::X,
//!     &layout,
//!     &config,
//!     SolidWalls::NONE,
//! )?;
//! out.diagnostics.check()?;
//! # Ok::<(), mhd_rs::error::MhdError>(())
//! ```

pub mod config;
pub mod ct;
pub mod diagnostics;
pub mod equations;
pub mod error;
pub mod flux;
pub mod reconstruction;
pub mod source;
pub mod state;
pub mod types;

// Re-export main types for convenience
pub use config::MhdConfig;
pub use ct::corner_emf;
pub use diagnostics::NumericalDiagnostics;
pub use equations::{IdealMhd, SQRT_4PI, WaveSpeeds, roe_eigenvalues};
pub use error::{MhdError, Result};
pub use flux::{
    HlleSolver, RiemannContext, RiemannOutput, RiemannSolver, SolidWalls, hlle_flux,
    riemann_adiabatic,
};
pub use reconstruction::{InterfaceStates, SlopeLimiter, StandardLimiter, interface_states};
pub use source::tension_source;
pub use state::{CellField, ScalarField, VariableLayout};
pub use types::{Direction, GridShape, REQUIRED_GHOSTS};

#[cfg(feature = "parallel")]
pub use ct::corner_emf_parallel;
#[cfg(feature = "parallel")]
pub use flux::riemann_adiabatic_parallel;
#[cfg(feature = "parallel")]
pub use reconstruction::interface_states_parallel;
#[cfg(feature = "parallel")]
pub use source::tension_source_parallel;

/// Everything needed to drive one CTU step.
pub mod prelude {
    pub use crate::config::MhdConfig;
    pub use crate::ct::corner_emf;
    pub use crate::diagnostics::NumericalDiagnostics;
    pub use crate::error::{MhdError, Result};
    pub use crate::flux::{SolidWalls, riemann_adiabatic};
    pub use crate::reconstruction::{SlopeLimiter, StandardLimiter, interface_states};
    pub use crate::source::tension_source;
    pub use crate::state::{
        CellField, ScalarField, VariableLayout, conservative_field_to_primitive,
        primitive_field_to_conservative,
    };
    pub use crate::types::{Direction, GridShape};
}
