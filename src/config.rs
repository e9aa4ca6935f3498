//! Solver configuration.
//!
//! Holds the adiabatic index, the numerical floors used when a reconstructed
//! state is unphysical, and the slope limiter. Loadable from any serde format;
//! missing fields fall back to the defaults below.
//!
//! # Example
//!
//! ```
//! use mhd_rs::config::MhdConfig;
//! use mhd_rs::reconstruction::StandardLimiter;
//!
//! let config = MhdConfig::new(5.0 / 3.0)
//!     .with_small_pressure(1e-12)
//!     .with_limiter(StandardLimiter::MonotonizedCentral);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MhdError, Result};
use crate::reconstruction::StandardLimiter;

/// Default pressure floor for reconstructed interface states.
pub const DEFAULT_SMALL_PRESSURE: f64 = 1e-10;

/// Default sound-speed floor.
pub const DEFAULT_SMALL_SOUND_SPEED: f64 = 1e-10;

fn default_gamma() -> f64 {
    5.0 / 3.0
}

fn default_small_pressure() -> f64 {
    DEFAULT_SMALL_PRESSURE
}

fn default_small_sound_speed() -> f64 {
    DEFAULT_SMALL_SOUND_SPEED
}

/// Parameters shared by every kernel of one solve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MhdConfig {
    /// Adiabatic index γ (> 1).
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Thermal pressure floor applied to reconstructed states.
    #[serde(default = "default_small_pressure")]
    pub small_pressure: f64,
    /// Sound speed floor.
    #[serde(default = "default_small_sound_speed")]
    pub small_sound_speed: f64,
    /// Slope limiter used by reconstruction.
    #[serde(default)]
    pub limiter: StandardLimiter,
}

impl Default for MhdConfig {
    fn default() -> Self {
        Self::new(default_gamma())
    }
}

impl MhdConfig {
    /// Create a configuration with default floors and limiter.
    pub fn new(gamma: f64) -> Self {
        Self {
            gamma,
            small_pressure: DEFAULT_SMALL_PRESSURE,
            small_sound_speed: DEFAULT_SMALL_SOUND_SPEED,
            limiter: StandardLimiter::default(),
        }
    }

    /// Set the adiabatic index.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the pressure floor.
    pub fn with_small_pressure(mut self, small_pressure: f64) -> Self {
        self.small_pressure = small_pressure;
        self
    }

    /// Set the sound speed floor.
    pub fn with_small_sound_speed(mut self, small_sound_speed: f64) -> Self {
        self.small_sound_speed = small_sound_speed;
        self
    }

    /// Set the slope limiter.
    pub fn with_limiter(mut self, limiter: StandardLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(MhdError::InvalidParameter {
                name: "gamma",
                value: self.gamma,
                reason: "adiabatic index must be finite and greater than 1",
            });
        }
        if !(self.small_pressure.is_finite() && self.small_pressure > 0.0) {
            return Err(MhdError::InvalidParameter {
                name: "small_pressure",
                value: self.small_pressure,
                reason: "floor must be finite and positive",
            });
        }
        if !(self.small_sound_speed.is_finite() && self.small_sound_speed > 0.0) {
            return Err(MhdError::InvalidParameter {
                name: "small_sound_speed",
                value: self.small_sound_speed,
                reason: "floor must be finite and positive",
            });
        }
        Ok(())
    }
}

/// Validate a grid spacing.
pub(crate) fn check_spacing(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MhdError::InvalidParameter {
            name,
            value,
            reason: "grid spacing must be finite and positive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MhdConfig::default();
        assert!((config.gamma - 5.0 / 3.0).abs() < 1e-15);
        assert_eq!(config.small_pressure, 1e-10);
        assert_eq!(config.small_sound_speed, 1e-10);
        assert_eq!(config.limiter, StandardLimiter::StoneGardiner);
    }

    #[test]
    fn test_invalid_gamma() {
        let err = MhdConfig::new(1.0).validate().unwrap_err();
        assert!(matches!(err, MhdError::InvalidParameter { name: "gamma", .. }));
        assert!(MhdConfig::new(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_invalid_floor() {
        let config = MhdConfig::new(1.4).with_small_pressure(0.0);
        assert!(config.validate().is_err());
        let config = MhdConfig::new(1.4).with_small_sound_speed(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: MhdConfig = serde_json::from_str(r#"{ "gamma": 2.0 }"#).unwrap();
        assert_eq!(config.gamma, 2.0);
        assert_eq!(config.small_pressure, DEFAULT_SMALL_PRESSURE);

        let config: MhdConfig =
            serde_json::from_str(r#"{ "gamma": 1.4, "limiter": "MonotonizedCentral" }"#)
                .unwrap();
        assert_eq!(config.limiter, StandardLimiter::MonotonizedCentral);
    }

    #[test]
    fn test_spacing_check() {
        assert!(check_spacing("dx", 0.1).is_ok());
        assert!(check_spacing("dx", 0.0).is_err());
        assert!(check_spacing("dy", f64::INFINITY).is_err());
    }
}
