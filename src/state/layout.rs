//! Variable layout: physical quantity → component slot.
//!
//! One [`VariableLayout`] is created per solve and threaded unchanged through
//! every kernel. It describes both representations of a cell:
//!
//! | slot            | conservative | primitive |
//! |-----------------|--------------|-----------|
//! | `density`       | ρ            | ρ         |
//! | `x_momentum`    | ρu           | u         |
//! | `y_momentum`    | ρv           | v         |
//! | `energy`        | E            | p         |
//! | `x_field`       | Bx           | Bx        |
//! | `y_field`       | By           | By        |
//! | `species[k]`    | ρX_k         | X_k       |

use std::ops::Range;

use crate::error::{MhdError, Result};
use crate::types::Direction;

/// Number of non-species variables in an ideal 2D MHD state.
pub const N_BASE_VARS: usize = 6;

/// Component slots of a 2D MHD state vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableLayout {
    density: usize,
    x_momentum: usize,
    y_momentum: usize,
    energy: usize,
    x_field: usize,
    y_field: usize,
    species_start: usize,
    n_species: usize,
}

impl VariableLayout {
    /// Create a layout from explicit slots.
    ///
    /// Species occupy `species_start..species_start + n_species`. All slots
    /// must be distinct and lie within `0..6 + n_species`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        density: usize,
        x_momentum: usize,
        y_momentum: usize,
        energy: usize,
        x_field: usize,
        y_field: usize,
        species_start: usize,
        n_species: usize,
    ) -> Result<Self> {
        let layout = Self {
            density,
            x_momentum,
            y_momentum,
            energy,
            x_field,
            y_field,
            species_start,
            n_species,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Conventional ordering `[ρ, ρu, ρv, E, Bx, By, ρX_0, ..]`.
    pub fn standard(n_species: usize) -> Self {
        Self {
            density: 0,
            x_momentum: 1,
            y_momentum: 2,
            energy: 3,
            x_field: 4,
            y_field: 5,
            species_start: N_BASE_VARS,
            n_species,
        }
    }

    fn validate(&self) -> Result<()> {
        let nvar = self.nvar();
        let mut seen = vec![false; nvar];
        let base = [
            ("density", self.density),
            ("x_momentum", self.x_momentum),
            ("y_momentum", self.y_momentum),
            ("energy", self.energy),
            ("x_field", self.x_field),
            ("y_field", self.y_field),
        ];
        let species = self.species().map(|slot| ("species", slot));

        for (name, slot) in base.into_iter().chain(species) {
            if slot >= nvar {
                return Err(MhdError::InvalidLayout(format!(
                    "{name} slot {slot} out of range for {nvar} variables"
                )));
            }
            if seen[slot] {
                return Err(MhdError::InvalidLayout(format!(
                    "{name} slot {slot} is assigned twice"
                )));
            }
            seen[slot] = true;
        }
        Ok(())
    }

    /// Total number of components per cell.
    #[inline]
    pub fn nvar(&self) -> usize {
        N_BASE_VARS + self.n_species
    }

    /// Number of advected species.
    #[inline]
    pub fn n_species(&self) -> usize {
        self.n_species
    }

    /// Density slot.
    #[inline(always)]
    pub fn density(&self) -> usize {
        self.density
    }

    /// x-momentum (primitive: x-velocity) slot.
    #[inline(always)]
    pub fn x_momentum(&self) -> usize {
        self.x_momentum
    }

    /// y-momentum (primitive: y-velocity) slot.
    #[inline(always)]
    pub fn y_momentum(&self) -> usize {
        self.y_momentum
    }

    /// Total energy (primitive: pressure) slot.
    #[inline(always)]
    pub fn energy(&self) -> usize {
        self.energy
    }

    /// x magnetic field slot.
    #[inline(always)]
    pub fn x_field(&self) -> usize {
        self.x_field
    }

    /// y magnetic field slot.
    #[inline(always)]
    pub fn y_field(&self) -> usize {
        self.y_field
    }

    /// Species slots.
    #[inline]
    pub fn species(&self) -> Range<usize> {
        self.species_start..self.species_start + self.n_species
    }

    /// Momentum slot along the sweep direction.
    #[inline(always)]
    pub fn normal_momentum(&self, dir: Direction) -> usize {
        dir.split(self.x_momentum, self.y_momentum).0
    }

    /// Momentum slot across the sweep direction.
    #[inline(always)]
    pub fn transverse_momentum(&self, dir: Direction) -> usize {
        dir.split(self.x_momentum, self.y_momentum).1
    }

    /// Magnetic field slot along the sweep direction.
    #[inline(always)]
    pub fn normal_field(&self, dir: Direction) -> usize {
        dir.split(self.x_field, self.y_field).0
    }

    /// Magnetic field slot across the sweep direction.
    #[inline(always)]
    pub fn transverse_field(&self, dir: Direction) -> usize {
        dir.split(self.x_field, self.y_field).1
    }
}
