//! Counters for floors and numerical degeneracies.
//!
//! A sweep never aborts on a degenerate interface. It clamps, substitutes a
//! well-defined value, and counts the event here, so the time integrator can
//! decide whether to accept the step, retry with a smaller one, or stop.
//!
//! # Example
//!
//! ```
//! use mhd_rs::diagnostics::NumericalDiagnostics;
//!
//! let mut diag = NumericalDiagnostics::default();
//! diag.pressure_floors += 3;
//! assert!(!diag.has_degeneracies()); // floors are policy, not degeneracy
//!
//! diag.zero_spread_fans += 1;
//! assert!(diag.check().is_err());
//! ```

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{MhdError, Result};

/// Event counts accumulated over one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumericalDiagnostics {
    /// Interface states whose thermal pressure was raised to the floor.
    pub pressure_floors: u64,
    /// Interface states whose sound speed was raised to the floor.
    pub sound_speed_floors: u64,
    /// Magnetosonic discriminants that were negative and clamped to zero.
    pub negative_discriminants: u64,
    /// Squared slow/fast speeds that were negative and clamped to zero.
    pub negative_wave_speeds: u64,
    /// Interfaces with `bp == bm == 0`, where the HLLE blend is undefined.
    pub zero_spread_fans: u64,
    /// Interfaces whose flux came out NaN or infinite.
    pub non_finite_fluxes: u64,
}

impl NumericalDiagnostics {
    /// Whether any event other than a documented floor occurred.
    pub fn has_degeneracies(&self) -> bool {
        self.negative_discriminants > 0
            || self.negative_wave_speeds > 0
            || self.zero_spread_fans > 0
            || self.non_finite_fluxes > 0
    }

    /// Whether no event at all was recorded.
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }

    /// Turn a degenerate sweep into an error.
    pub fn check(&self) -> Result<()> {
        if self.has_degeneracies() {
            Err(MhdError::NumericalDegeneracy(self.to_string()))
        } else {
            Ok(())
        }
    }

    /// Emit a warning through `tracing` if anything degenerate happened.
    pub(crate) fn report(&self, stage: &'static str) {
        if self.has_degeneracies() {
            tracing::warn!(
                stage,
                negative_discriminants = self.negative_discriminants,
                negative_wave_speeds = self.negative_wave_speeds,
                zero_spread_fans = self.zero_spread_fans,
                non_finite_fluxes = self.non_finite_fluxes,
                "degenerate interfaces in sweep"
            );
        } else if !self.is_clean() {
            tracing::debug!(
                stage,
                pressure_floors = self.pressure_floors,
                sound_speed_floors = self.sound_speed_floors,
                "floors applied in sweep"
            );
        }
    }
}

impl Add for NumericalDiagnostics {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            pressure_floors: self.pressure_floors + rhs.pressure_floors,
            sound_speed_floors: self.sound_speed_floors + rhs.sound_speed_floors,
            negative_discriminants: self.negative_discriminants + rhs.negative_discriminants,
            negative_wave_speeds: self.negative_wave_speeds + rhs.negative_wave_speeds,
            zero_spread_fans: self.zero_spread_fans + rhs.zero_spread_fans,
            non_finite_fluxes: self.non_finite_fluxes + rhs.non_finite_fluxes,
        }
    }
}

impl AddAssign for NumericalDiagnostics {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for NumericalDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pressure floors: {}, sound-speed floors: {}, negative discriminants: {}, \
             negative wave speeds: {}, zero-spread fans: {}, non-finite fluxes: {}",
            self.pressure_floors,
            self.sound_speed_floors,
            self.negative_discriminants,
            self.negative_wave_speeds,
            self.zero_spread_fans,
            self.non_finite_fluxes
        )
    }
}
