//! Ghosted grid extents.

use std::fmt;
use std::ops::Range;

use crate::error::{MhdError, Result};

/// Minimum ghost width required by the widest stencil in the crate.
///
/// Reconstruction writes three cells past the interior plus one more for the
/// shifted left state, and the EMF derivative stage reads three cells past
/// the interior plus a one-cell lookback.
pub const REQUIRED_GHOSTS: usize = 4;

/// Interior size and ghost width of a structured 2D patch.
///
/// Arrays allocated for this shape have `qx() × qy()` cells; the interior
/// occupies `ilo()..ihi()` × `jlo()..jhi()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Interior cells along x.
    pub nx: usize,
    /// Interior cells along y.
    pub ny: usize,
    /// Ghost cells on every side.
    pub ng: usize,
}

impl GridShape {
    /// Create a new shape.
    pub const fn new(nx: usize, ny: usize, ng: usize) -> Self {
        Self { nx, ny, ng }
    }

    /// Total extent along x including ghosts.
    #[inline]
    pub const fn qx(&self) -> usize {
        self.nx + 2 * self.ng
    }

    /// Total extent along y including ghosts.
    #[inline]
    pub const fn qy(&self) -> usize {
        self.ny + 2 * self.ng
    }

    /// First interior index along x.
    #[inline]
    pub const fn ilo(&self) -> usize {
        self.ng
    }

    /// One past the last interior index along x.
    #[inline]
    pub const fn ihi(&self) -> usize {
        self.ng + self.nx
    }

    /// First interior index along y.
    #[inline]
    pub const fn jlo(&self) -> usize {
        self.ng
    }

    /// One past the last interior index along y.
    #[inline]
    pub const fn jhi(&self) -> usize {
        self.ng + self.ny
    }

    /// Number of cells including ghosts.
    #[inline]
    pub const fn n_cells(&self) -> usize {
        self.qx() * self.qy()
    }

    /// Interior range along x widened by `margin` cells on both sides.
    ///
    /// `margin` must not exceed the ghost width.
    #[inline]
    pub fn i_range(&self, margin: usize) -> Range<usize> {
        self.ilo() - margin..self.ihi() + margin
    }

    /// Interior range along y widened by `margin` cells on both sides.
    #[inline]
    pub fn j_range(&self, margin: usize) -> Range<usize> {
        self.jlo() - margin..self.jhi() + margin
    }

    /// Check the ghost width against [`REQUIRED_GHOSTS`].
    pub fn check_ghosts(&self) -> Result<()> {
        if self.ng < REQUIRED_GHOSTS {
            return Err(MhdError::InsufficientGhosts {
                required: REQUIRED_GHOSTS,
                actual: self.ng,
            });
        }
        Ok(())
    }

    /// Check that `other` describes the same grid.
    pub fn check_same(&self, field: &'static str, other: &GridShape) -> Result<()> {
        if self != other {
            return Err(MhdError::shape_mismatch(field, self, other));
        }
        Ok(())
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} (ng={})", self.nx, self.ny, self.ng)
    }
}
