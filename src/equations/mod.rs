//! Ideal MHD closure and characteristic structure.
//!
//! Provides the physical flux F(U) along a sweep direction and the seven
//! characteristic speeds of a Roe-averaged state:
//!
//! ∂U/∂t + ∂F(U)/∂x + ∂G(U)/∂y = S(U)
//!
//! where U is the conservative state, F and G are the directional fluxes, and
//! S collects the magnetic source terms.

mod eigen;
mod ideal_mhd;

pub use eigen::{WaveSpeeds, fast_speed, roe_eigenvalues};
pub use ideal_mhd::{IdealMhd, SQRT_4PI};
