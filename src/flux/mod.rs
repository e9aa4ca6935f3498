//! Interface fluxes for ideal MHD.
//!
//! Provides the HLLE approximate Riemann solver, per interface and as a grid
//! sweep along one direction.
//!
//! # Solver Trait
//!
//! The [`RiemannSolver`] trait is the per-interface seam. The grid sweep
//! [`riemann_sweep`] is generic over it, so a new solver only needs the trait.
//!
//! ## Built-in Solvers
//! - [`HlleSolver`]: HLLE with Roe-averaged Einfeldt bounds
//!
//! ## Entry Points
//! - [`hlle_flux`]: one interface
//! - [`riemann_adiabatic`]: every interface of a grid, HLLE, adiabatic gas

mod hlle;
mod sweep;
pub mod traits;

pub use hlle::{HlleFan, hlle_flux, hlle_flux_with};
#[cfg(feature = "parallel")]
pub use sweep::{riemann_adiabatic_parallel, riemann_sweep_parallel};
pub use sweep::{RiemannOutput, SolidWalls, riemann_adiabatic, riemann_sweep};
pub use traits::{FluxWorkspace, HlleSolver, RiemannContext, RiemannSolver};
