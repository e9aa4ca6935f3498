//! Slope limiters for piecewise-linear reconstruction.
//!
//! A limiter receives the three differences of a cell along the sweep axis,
//!
//! - backward: q[i] − q[i−1]
//! - centered: ½(q[i+1] − q[i−1])
//! - forward: q[i+1] − q[i]
//!
//! and returns the limited slope. The centered difference is passed in
//! rather than rebuilt from the other two so its rounding matches a direct
//! evaluation from the cell values.

use serde::{Deserialize, Serialize};

/// Trait for slope limiters.
///
/// # Extending
///
/// To add a limiter, implement `slope` and `name`, then either pass the
/// value straight to [`interface_states`](super::interface_states) or add a
/// variant to [`StandardLimiter`] so it can be selected from configuration.
pub trait SlopeLimiter: Send + Sync {
    /// Limited slope from the backward, centered and forward differences.
    fn slope(&self, backward: f64, centered: f64, forward: f64) -> f64;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Sign function with `sign(0) = 0`.
#[inline(always)]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[inline(always)]
fn limited_magnitude(backward: f64, centered: f64, forward: f64) -> f64 {
    (2.0 * backward.abs()).min((2.0 * forward.abs()).min(centered.abs()))
}

/// Stone & Gardiner (2009) limiter.
///
/// `sign(dc) · min(2|dl|, 2|dr|, |dc|)` with no sign-agreement test between
/// the one-sided differences. At an extremum where the one-sided differences
/// disagree, the slope is small but not necessarily zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoneGardiner;

impl SlopeLimiter for StoneGardiner {
    #[inline(always)]
    fn slope(&self, backward: f64, centered: f64, forward: f64) -> f64 {
        sign(centered) * limited_magnitude(backward, centered, forward)
    }

    fn name(&self) -> &'static str {
        "stone_gardiner"
    }
}

/// Monotonized-central limiter (van Leer 1977).
///
/// Same magnitude bound as [`StoneGardiner`], but the slope vanishes
/// whenever the one-sided differences disagree in sign, so new extrema are
/// never created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonotonizedCentral;

impl SlopeLimiter for MonotonizedCentral {
    #[inline(always)]
    fn slope(&self, backward: f64, centered: f64, forward: f64) -> f64 {
        if backward * forward <= 0.0 {
            return 0.0;
        }
        sign(centered) * limited_magnitude(backward, centered, forward)
    }

    fn name(&self) -> &'static str {
        "monotonized_central"
    }
}

/// Enum of built-in limiters for zero-cost static dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardLimiter {
    /// Stone & Gardiner, no sign test
    #[default]
    StoneGardiner,
    /// Strict monotonized central
    MonotonizedCentral,
}

impl SlopeLimiter for StandardLimiter {
    #[inline(always)]
    fn slope(&self, backward: f64, centered: f64, forward: f64) -> f64 {
        match self {
            StandardLimiter::StoneGardiner => StoneGardiner.slope(backward, centered, forward),
            StandardLimiter::MonotonizedCentral => {
                MonotonizedCentral.slope(backward, centered, forward)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            StandardLimiter::StoneGardiner => StoneGardiner.name(),
            StandardLimiter::MonotonizedCentral => MonotonizedCentral.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1e-14;

    fn slope_from_values<L: SlopeLimiter>(limiter: &L, qm: f64, q0: f64, qp: f64) -> f64 {
        limiter.slope(q0 - qm, 0.5 * (qp - qm), qp - q0)
    }

    #[test]
    fn test_linear_profile_keeps_centered_slope() {
        for limiter in [StandardLimiter::StoneGardiner, StandardLimiter::MonotonizedCentral] {
            let s = slope_from_values(&limiter, 1.0, 2.0, 3.0);
            assert!((s - 1.0).abs() < TOL, "{}", limiter.name());
        }
    }

    #[test]
    fn test_steep_side_limits_slope() {
        // dl = 0.1, dr = 10, dc = 5.05: bounded by 2|dl|
        let s = slope_from_values(&StoneGardiner, 0.9, 1.0, 11.0);
        assert!((s - 0.2).abs() < TOL);
    }

    #[test]
    fn test_flat_centered_gives_zero() {
        // Symmetric extremum: dc = 0
        assert_eq!(slope_from_values(&StoneGardiner, 1.0, 2.0, 1.0), 0.0);
        assert_eq!(slope_from_values(&MonotonizedCentral, 1.0, 2.0, 1.0), 0.0);
    }

    #[test]
    fn test_asymmetric_extremum() {
        // dl = 1, dr = -0.5, dc = 0.25: no sign test keeps a small slope
        let sg = slope_from_values(&StoneGardiner, 0.0, 1.0, 0.5);
        assert!((sg - 0.25).abs() < TOL);
        assert_eq!(slope_from_values(&MonotonizedCentral, 0.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn test_default_is_stone_gardiner() {
        assert_eq!(StandardLimiter::default(), StandardLimiter::StoneGardiner);
        assert_eq!(StandardLimiter::default().name(), "stone_gardiner");
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn slope_is_bounded_and_follows_centered_sign(
            qm in -1e3f64..1e3,
            q0 in -1e3f64..1e3,
            qp in -1e3f64..1e3,
        ) {
            let dl = q0 - qm;
            let dr = qp - q0;
            let dc = 0.5 * (qp - qm);
            let s = StoneGardiner.slope(dl, dc, dr);

            prop_assert!(s.abs() <= 2.0 * dl.abs());
            prop_assert!(s.abs() <= 2.0 * dr.abs());
            prop_assert!(s.abs() <= dc.abs());
            prop_assert!(s * dc >= 0.0);
        }

        #[test]
        fn monotonized_central_never_exceeds_stone_gardiner(
            qm in -1e3f64..1e3,
            q0 in -1e3f64..1e3,
            qp in -1e3f64..1e3,
        ) {
            let dl = q0 - qm;
            let dr = qp - q0;
            let dc = 0.5 * (qp - qm);
            let mc = MonotonizedCentral.slope(dl, dc, dr);
            let sg = StoneGardiner.slope(dl, dc, dr);

            prop_assert!(mc.abs() <= sg.abs());
            if dl * dr <= 0.0 {
                prop_assert_eq!(mc, 0.0);
            } else {
                prop_assert_eq!(mc, sg);
            }
        }

        #[test]
        fn limited_states_stay_within_neighbours_for_monotone_data(
            qm in -1e3f64..1e3,
            d1 in 0.0f64..1e2,
            d2 in 0.0f64..1e2,
        ) {
            let q0 = qm + d1;
            let qp = q0 + d2;
            let s = StoneGardiner.slope(q0 - qm, 0.5 * (qp - qm), qp - q0);
            let lo = q0 - 0.5 * s;
            let hi = q0 + 0.5 * s;

            prop_assert!(lo >= qm - 1e-9);
            prop_assert!(hi <= qp + 1e-9);
        }
    }
}
