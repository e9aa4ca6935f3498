//! Constrained transport.
//!
//! The face-centered normal field is advanced by the curl of a corner EMF,
//! which keeps the discrete divergence of B at machine zero. This module
//! builds that corner EMF from the interface fluxes of both sweeps; the field
//! update itself belongs to the time integrator.

mod emf;

pub use emf::corner_emf;
#[cfg(feature = "parallel")]
pub use emf::corner_emf_parallel;
