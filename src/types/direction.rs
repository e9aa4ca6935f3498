//! Sweep direction with normal/transverse roles.
//!
//! Directionally split schemes evaluate every operator once per axis. The
//! formulas are identical up to a swap of the normal and transverse roles of
//! the momentum and magnetic-field components, so the swap lives here instead
//! of in an `if x { .. } else { .. }` branch in every kernel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Axis along which a directional sweep runs.
///
/// # Example
///
/// ```
/// use mhd_rs::types::Direction;
///
/// let dir = Direction::X;
/// assert_eq!(dir.next(3, 5), (4, 5));
/// assert_eq!(dir.prev(3, 5), (2, 5));
/// assert_eq!(dir.transverse(), Direction::Y);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Sweep along the first array index (`i`).
    X,
    /// Sweep along the second array index (`j`).
    Y,
}

impl Direction {
    /// Both sweep directions, in the order a split integrator visits them.
    pub const ALL: [Direction; 2] = [Direction::X, Direction::Y];

    /// The other in-plane direction.
    #[inline]
    pub fn transverse(self) -> Self {
        match self {
            Direction::X => Direction::Y,
            Direction::Y => Direction::X,
        }
    }

    /// Cell one step downstream along this axis.
    #[inline(always)]
    pub fn next(self, i: usize, j: usize) -> (usize, usize) {
        match self {
            Direction::X => (i + 1, j),
            Direction::Y => (i, j + 1),
        }
    }

    /// Cell one step upstream along this axis.
    ///
    /// Callers guarantee the index is at least one; the ghost-width check at
    /// every entry point makes this hold for all loop ranges in the crate.
    #[inline(always)]
    pub fn prev(self, i: usize, j: usize) -> (usize, usize) {
        match self {
            Direction::X => (i - 1, j),
            Direction::Y => (i, j - 1),
        }
    }

    /// Pick the `(normal, transverse)` pair out of an `(x, y)` pair.
    #[inline(always)]
    pub fn split<T>(self, x: T, y: T) -> (T, T) {
        match self {
            Direction::X => (x, y),
            Direction::Y => (y, x),
        }
    }

    /// Inverse of [`split`](Self::split): rebuild `(x, y)` from
    /// `(normal, transverse)`.
    #[inline(always)]
    pub fn join<T>(self, normal: T, transverse: T) -> (T, T) {
        match self {
            Direction::X => (normal, transverse),
            Direction::Y => (transverse, normal),
        }
    }

    /// Zero-based axis index (0 for x, 1 for y).
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::X => write!(f, "x"),
            Direction::Y => write!(f, "y"),
        }
    }
}
