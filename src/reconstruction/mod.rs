//! Piecewise-linear reconstruction of interface states.
//!
//! Turns cell-centered primitive states into the left/right states seen by
//! the Riemann solver at every interface along one sweep direction. Slopes are
//! limited by a pluggable [`SlopeLimiter`]; [`StandardLimiter`] selects a
//! built-in one from configuration.
//!
//! # Example
//!
//! ```
//! use mhd_rs::reconstruction::{StandardLimiter, interface_states};
//! use mhd_rs::state::{CellField, VariableLayout};
//! use mhd_rs::types::{Direction, GridShape};
//!
//! let layout = VariableLayout::standard(0);
//! let prim = CellField::uniform(GridShape::new(8, 8, 4), &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
//! let limiter = StandardLimiter::default();
//! let states = interface_states(&prim, Direction::X, &layout, &limiter).unwrap();
//! assert_eq!(states.left.get(6, 6, 0), 1.0);
//! ```

mod limiter;
mod states;

pub use limiter::{MonotonizedCentral, SlopeLimiter, StandardLimiter, StoneGardiner};
#[cfg(feature = "parallel")]
pub use states::interface_states_parallel;
pub use states::{InterfaceStates, interface_states};
