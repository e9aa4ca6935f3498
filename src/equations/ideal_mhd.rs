//! 2D ideal adiabatic MHD.
//!
//! Conservative state U = (ρ, ρu, ρv, E, Bx, By, ρX_k), with
//!
//! ∂ρ/∂t + ∇·(ρv) = 0
//! ∂(ρv)/∂t + ∇·(ρvv + p_T I − BB) = 0
//! ∂E/∂t + ∇·((E + p_T)v − B(B·v)) = 0
//! ∂B/∂t − ∇×(v×B) = 0
//! ∂(ρX)/∂t + ∇·(ρXv) = 0
//!
//! where p_T = p + ½|B|² and p = (γ−1)(E − ½ρ|v|² − ½|B|²). Field units
//! absorb the factor √(4π), so the Lorentz terms carry no prefactor.
//!
//! # Flux along a sweep direction
//!
//! With n/t the normal/transverse components:
//!
//! F(U) = [ρv_n, ρv_n² + p_T − B_n², ρv_n v_t − B_n B_t,
//!         (E + p_T)v_n − B_n(B_n v_n + B_t v_t), 0, B_t v_n − B_n v_t, ρX_k v_n]
//!
//! The normal-field flux is identically zero: the normal field lives on faces
//! and is advanced by constrained transport, not by this flux.

use crate::state::VariableLayout;
use crate::types::Direction;

/// √(4π), the conversion between Gaussian field units and Alfvén-speed units.
pub const SQRT_4PI: f64 = 3.544_907_701_811_032;

/// Ideal-gas MHD closure.
///
/// # Example
///
/// ```
/// use mhd_rs::equations::IdealMhd;
/// use mhd_rs::state::VariableLayout;
/// use mhd_rs::types::Direction;
///
/// let mhd = IdealMhd::new(1.4);
/// let layout = VariableLayout::standard(0);
///
/// // ρ = 1, v = 0, p = 1, B = 0
/// let u = [1.0, 0.0, 0.0, 1.0 / 0.4, 0.0, 0.0];
/// let f = mhd.flux(&u, Direction::X, &layout);
/// assert!((f[1] - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealMhd {
    /// Adiabatic index γ
    pub gamma: f64,
}

impl IdealMhd {
    /// Create the closure for a given adiabatic index.
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// Thermal pressure of a conservative state, using the cell's own field.
    #[inline]
    pub fn pressure(&self, u: &[f64], layout: &VariableLayout) -> f64 {
        let rho = u[layout.density()];
        let vx = u[layout.x_momentum()] / rho;
        let vy = u[layout.y_momentum()] / rho;
        let bx = u[layout.x_field()];
        let by = u[layout.y_field()];
        let b2 = bx * bx + by * by;
        (u[layout.energy()] - 0.5 * rho * (vx * vx + vy * vy) - 0.5 * b2) * (self.gamma - 1.0)
    }

    /// Adiabatic sound speed √(γp/ρ), without floors.
    #[inline]
    pub fn sound_speed(&self, u: &[f64], layout: &VariableLayout) -> f64 {
        (self.gamma * self.pressure(u, layout) / u[layout.density()]).sqrt()
    }

    /// Physical flux of `u` along `dir`, written into `out`.
    ///
    /// Pure: no floors and no validation. An unphysical state yields NaN or
    /// garbage, which the caller is expected to have ruled out.
    ///
    /// # Panics
    /// Panics if `u` or `out` is shorter than `layout.nvar()`.
    pub fn flux_into(&self, u: &[f64], dir: Direction, layout: &VariableLayout, out: &mut [f64]) {
        debug_assert_eq!(u.len(), layout.nvar(), "state length must match layout");
        debug_assert_eq!(out.len(), layout.nvar(), "flux length must match layout");
        let rho = u[layout.density()];
        let mx = u[layout.x_momentum()];
        let my = u[layout.y_momentum()];
        let energy = u[layout.energy()];
        let bx = u[layout.x_field()];
        let by = u[layout.y_field()];

        let vx = mx / rho;
        let vy = my / rho;
        let b2 = bx * bx + by * by;
        let p = (energy - 0.5 * rho * (vx * vx + vy * vy) - 0.5 * b2) * (self.gamma - 1.0);
        let p_total = p + 0.5 * b2;

        let (vn, vt) = dir.split(vx, vy);
        let (mn, mt) = dir.split(mx, my);
        let (bn, bt) = dir.split(bx, by);

        out[layout.density()] = rho * vn;
        out[layout.normal_momentum(dir)] = mn * vn + p_total - bn * bn;
        out[layout.transverse_momentum(dir)] = mt * vn - bn * bt;
        out[layout.energy()] = (energy + p_total) * vn - bn * (bn * vn + bt * vt);
        out[layout.normal_field(dir)] = 0.0;
        out[layout.transverse_field(dir)] = bt * vn - bn * vt;

        for k in layout.species() {
            out[k] = u[k] * vn;
        }
    }

    /// Physical flux of `u` along `dir`.
    pub fn flux(&self, u: &[f64], dir: Direction, layout: &VariableLayout) -> Vec<f64> {
        let mut out = vec![0.0; layout.nvar()];
        self.flux_into(u, dir, layout, &mut out);
        out
    }
}
