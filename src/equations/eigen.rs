//! Characteristic speeds of Roe-linearized ideal MHD.
//!
//! The Roe matrix of MHD is not unique; following Stone, Gardiner et al.
//! (2008), Appendix B.3, the non-uniqueness is absorbed by two scalars
//!
//! X = ½(b_t,l − b_t,r)² / (√ρ_l + √ρ_r),   Y = ½(ρ_l + ρ_r) / ρ̄
//!
//! which enter the dispersion relation through a corrected sound speed
//!
//! a² = (γ−1)(H − ½|v|² − b²/ρ) − (γ−2)X
//!
//! and a corrected transverse Alfvén term
//!
//! C_A² = C_Ax² + (γ−1 − (γ−2)Y) b_t²/ρ.
//!
//! The fast and slow speeds are the roots
//!
//! C²_{f,s} = ½[(a² + C_A²) ± √((a² + C_A²)² − 4a²C_Ax²)].
//!
//! Roundoff or an inconsistent Roe state can make the discriminant or the
//! slow root negative. Both are clamped to zero and counted in
//! [`NumericalDiagnostics`].
//!
//! The Roe state handed in by the HLLE solver rebuilds its energy from the
//! raw field and an averaged `γE`-based enthalpy, while the speeds here use
//! the rationalized field `B/√(4π)`. For strongly magnetized, low-density
//! states (low β) or `γ > 2` this inconsistency alone can push `a²`, the
//! discriminant or `C_s²` below zero for perfectly valid inputs, for example
//! `γ = 1.63`, `ρ_l = 10⁻³`, `p = 10⁻⁴`, `B_n = 0.93`, `B_t,r = 4.2`. The
//! resulting counts, and the `NumericalDegeneracy` error from
//! [`NumericalDiagnostics::check`], then describe the averaging and not a
//! fault in the caller's data.

use crate::diagnostics::NumericalDiagnostics;
use crate::equations::SQRT_4PI;
use crate::state::VariableLayout;
use crate::types::Direction;

/// The seven characteristic speeds, ordered
/// `[v_n − c_f, v_n − c_Ax, v_n − c_s, v_n, v_n + c_s, v_n + c_Ax, v_n + c_f]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSpeeds(pub [f64; 7]);

impl WaveSpeeds {
    /// Smallest speed (leftmost wave).
    #[inline]
    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest speed (rightmost wave).
    #[inline]
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Advection (entropy/contact) speed v_n.
    #[inline]
    pub fn contact(&self) -> f64 {
        self.0[3]
    }

    /// Raw speeds.
    #[inline]
    pub fn as_array(&self) -> &[f64; 7] {
        &self.0
    }
}

#[inline(always)]
fn clamp_discriminant(d: f64, diag: &mut NumericalDiagnostics) -> f64 {
    if d < 0.0 {
        diag.negative_discriminants += 1;
        0.0
    } else {
        d
    }
}

#[inline(always)]
fn clamp_speed_squared(c2: f64, diag: &mut NumericalDiagnostics) -> f64 {
    if c2 < 0.0 {
        diag.negative_wave_speeds += 1;
        0.0
    } else {
        c2
    }
}

/// Characteristic speeds of a Roe-averaged conservative state.
///
/// # Arguments
/// * `u` - Roe-averaged conservative state
/// * `dir` - Sweep direction
/// * `layout` - Variable layout
/// * `gamma` - Adiabatic index
/// * `x`, `y` - Roe-average correction scalars
/// * `diag` - Counters for clamped discriminants and speeds
///
/// # Panics
/// Panics if `u` is shorter than `layout.nvar()`.
pub fn roe_eigenvalues(
    u: &[f64],
    dir: Direction,
    layout: &VariableLayout,
    gamma: f64,
    x: f64,
    y: f64,
    diag: &mut NumericalDiagnostics,
) -> WaveSpeeds {
    debug_assert_eq!(u.len(), layout.nvar(), "state length must match layout");
    let rho = u[layout.density()];
    let vx = u[layout.x_momentum()] / rho;
    let vy = u[layout.y_momentum()] / rho;
    let energy = u[layout.energy()];
    let bx = u[layout.x_field()] / SQRT_4PI;
    let by = u[layout.y_field()] / SQRT_4PI;

    let v2 = vx * vx + vy * vy;
    let b2 = bx * bx + by * by;
    let rhoe = energy - 0.5 * rho * v2 - 0.5 * b2;
    let p = rhoe * (gamma - 1.0);
    let h = (energy + p + 0.5 * b2) / rho;

    let a2 = (gamma - 1.0) * (h - 0.5 * v2 - b2 / rho) - (gamma - 2.0) * x;

    let (vn, _) = dir.split(vx, vy);
    let (bn, bt) = dir.split(bx, by);

    let cax2 = bn * bn / rho;
    let bt_eff2 = (gamma - 1.0 - (gamma - 2.0) * y) * bt * bt;
    let ca2 = cax2 + bt_eff2 / rho;

    let sum = a2 + ca2;
    let root = clamp_discriminant(sum * sum - 4.0 * a2 * cax2, diag).sqrt();
    let cf = clamp_speed_squared(0.5 * (sum + root), diag).sqrt();
    let cs = clamp_speed_squared(0.5 * (sum - root), diag).sqrt();
    let cax = cax2.sqrt();

    WaveSpeeds([
        vn - cf,
        vn - cax,
        vn - cs,
        vn,
        vn + cs,
        vn + cax,
        vn + cf,
    ])
}

/// Fast magnetosonic speed of a physical state.
///
/// `c_f = √(½[(c² + C_A²) + √((c² + C_A²)² − 4c²C_Ax²)])`
///
/// # Arguments
/// * `c2` - Sound speed squared
/// * `ca2` - Total Alfvén speed squared, |b|²/ρ
/// * `cax2` - Normal Alfvén speed squared, b_n²/ρ
pub fn fast_speed(c2: f64, ca2: f64, cax2: f64, diag: &mut NumericalDiagnostics) -> f64 {
    let sum = c2 + ca2;
    let root = clamp_discriminant(sum * sum - 4.0 * c2 * cax2, diag).sqrt();
    (0.5 * (sum + root)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::primitive_to_conservative;

    const TOL: f64 = 1e-10;

    fn cons(prim: &[f64], gamma: f64) -> Vec<f64> {
        let layout = VariableLayout::standard(0);
        let mut u = vec![0.0; 6];
        primitive_to_conservative(prim, &mut u, &layout, gamma);
        u
    }

    #[test]
    fn test_hydro_limit() {
        // No field: fast = sound speed, Alfvén and slow collapse onto v_n.
        let gamma = 1.4;
        let layout = VariableLayout::standard(0);
        let u = cons(&[1.0, 0.3, 0.0, 1.0, 0.0, 0.0], gamma);
        let mut diag = NumericalDiagnostics::default();
        let ev = roe_eigenvalues(&u, Direction::X, &layout, gamma, 0.0, 1.0, &mut diag);

        let c = gamma.sqrt();
        assert!((ev.0[0] - (0.3 - c)).abs() < TOL);
        assert!((ev.0[6] - (0.3 + c)).abs() < TOL);
        for k in 1..6 {
            assert!((ev.0[k] - 0.3).abs() < TOL, "{:?}", ev);
        }
        assert!(diag.is_clean());
    }

    #[test]
    fn test_speeds_are_ordered() {
        let gamma = 5.0 / 3.0;
        let layout = VariableLayout::standard(0);
        let u = cons(&[1.2, -0.4, 0.7, 0.9, 2.0, 1.5], gamma);
        let mut diag = NumericalDiagnostics::default();

        for dir in Direction::ALL {
            let ev = roe_eigenvalues(&u, dir, &layout, gamma, 0.0, 1.0, &mut diag);
            for pair in ev.0.windows(2) {
                assert!(pair[0] <= pair[1] + TOL, "{dir}: {:?}", ev);
            }
            assert_eq!(ev.min(), ev.0[0]);
            assert_eq!(ev.max(), ev.0[6]);
        }
        assert!(!diag.has_degeneracies());
    }

    #[test]
    fn test_normal_alfven_speed() {
        let gamma = 2.0;
        let layout = VariableLayout::standard(0);
        let bn = 0.75;
        let u = cons(&[1.0, 0.0, 0.0, 1.0, bn, 0.0], gamma);
        let mut diag = NumericalDiagnostics::default();
        let ev = roe_eigenvalues(&u, Direction::X, &layout, gamma, 0.0, 1.0, &mut diag);
        assert!((ev.0[5] - bn / SQRT_4PI).abs() < TOL);
        assert_eq!(ev.contact(), 0.0);
    }

    #[test]
    fn test_negative_a2_is_clamped_and_counted() {
        // For γ > 2 a large X drives a² negative, and with it the slow root.
        let gamma = 3.0;
        let layout = VariableLayout::standard(0);
        let u = cons(&[1.0, 0.0, 0.0, 1e-6, 0.1, 0.0], gamma);
        let mut diag = NumericalDiagnostics::default();
        let ev = roe_eigenvalues(&u, Direction::X, &layout, gamma, 10.0, 1.0, &mut diag);

        assert!(ev.0.iter().all(|v| v.is_finite()), "{:?}", ev);
        assert!(diag.has_degeneracies());
    }

    #[test]
    fn test_fast_speed_limits() {
        let mut diag = NumericalDiagnostics::default();
        // Pure sound wave.
        assert!((fast_speed(4.0, 0.0, 0.0, &mut diag) - 2.0).abs() < TOL);
        // Perpendicular field: c_f² = c² + C_A².
        assert!((fast_speed(1.0, 3.0, 0.0, &mut diag) - 2.0).abs() < TOL);
        // Parallel field: c_f = max(c, C_A).
        assert!((fast_speed(1.0, 4.0, 4.0, &mut diag) - 2.0).abs() < TOL);
        assert!(diag.is_clean());
    }
}
