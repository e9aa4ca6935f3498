//! Small strongly-typed building blocks shared by every kernel.
//!
//! - [`Direction`]: sweep axis with normal/transverse role swapping
//! - [`GridShape`]: interior extents plus ghost width, with validation
//!
//! # Example
//!
//! ```
//! use mhd_rs::types::{Direction, GridShape, REQUIRED_GHOSTS};
//!
//! let shape = GridShape::new(32, 32, REQUIRED_GHOSTS);
//! assert!(shape.check_ghosts().is_ok());
//!
//! // (normal, transverse) components of an (x, y) pair
//! let (bn, bt) = Direction::Y.split(0.75, 1.0);
//! assert_eq!((bn, bt), (1.0, 0.75));
//! ```

mod direction;
mod shape;

pub use direction::Direction;
pub use shape::{GridShape, REQUIRED_GHOSTS};
