//! HLLE approximate Riemann solver for ideal MHD.
//!
//! Two-wave approximation of the Riemann fan:
//!
//! F* = (b⁺ F_l − b⁻ F_r) / (b⁺ − b⁻) + b⁺ b⁻ / (b⁺ − b⁻) · (U_r − U_l)
//!
//! with b⁺ ≥ 0 ≥ b⁻ bounding both the Roe-averaged characteristic speeds
//! and the fast speeds of the physical states (Einfeldt 1988). The normal
//! field on both sides is the face-centered value, which makes the normal
//! component single-valued at the interface.
//!
//! Reference: Stone, Gardiner et al. (2008), "Athena: A New Code for
//! Astrophysical MHD", ApJS 178, Appendix B.

use crate::config::MhdConfig;
use crate::diagnostics::NumericalDiagnostics;
use crate::equations::{IdealMhd, SQRT_4PI, WaveSpeeds, fast_speed, roe_eigenvalues};
use crate::flux::{FluxWorkspace, RiemannContext};
use crate::state::VariableLayout;
use crate::types::Direction;

/// Wave-speed bounds of one interface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HlleFan {
    /// Characteristic speeds of the Roe-averaged state
    pub waves: WaveSpeeds,
    /// Left bound b⁻ ≤ 0
    pub bm: f64,
    /// Right bound b⁺ ≥ 0
    pub bp: f64,
}

/// Floored thermodynamics of one side of the interface.
struct Side {
    sqrt_rho: f64,
    vn: f64,
    fast: f64,
    enthalpy: f64,
}

fn side_state(
    u: &[f64],
    b_face: f64,
    dir: Direction,
    layout: &VariableLayout,
    config: &MhdConfig,
    diag: &mut NumericalDiagnostics,
) -> Side {
    let gamma = config.gamma;
    let rho = u[layout.density()];
    let mx = u[layout.x_momentum()];
    let my = u[layout.y_momentum()];
    let energy = u[layout.energy()];
    let (vn, vt) = dir.split(mx / rho, my / rho);

    let bn = b_face;
    let bt = u[layout.transverse_field(dir)];
    let b2 = bn * bn + bt * bt;

    let p_raw = (energy - 0.5 * rho * (vn * vn + vt * vt) - 0.5 * b2) * (gamma - 1.0);
    if p_raw < config.small_pressure {
        diag.pressure_floors += 1;
    }
    let p = p_raw.max(config.small_pressure);

    let c_raw = (gamma * p / rho).sqrt();
    if c_raw < config.small_sound_speed {
        diag.sound_speed_floors += 1;
    }
    let c = c_raw.max(config.small_sound_speed);

    let bn_a = bn / SQRT_4PI;
    let bt_a = bt / SQRT_4PI;
    let ca2 = (bn_a * bn_a + bt_a * bt_a) / rho;
    let cax2 = bn_a * bn_a / rho;

    Side {
        sqrt_rho: rho.sqrt(),
        vn,
        fast: fast_speed(c * c, ca2, cax2, diag),
        enthalpy: (gamma * energy - (gamma - 1.0) * (mx * mx + my * my) / rho + 0.5 * gamma * b2)
            / rho,
    }
}

/// Fill `u_avg` with the Roe-averaged state and return the `(X, Y)`
/// correction scalars.
#[allow(clippy::too_many_arguments)]
fn roe_average(
    u_l: &[f64],
    u_r: &[f64],
    l: &Side,
    r: &Side,
    dir: Direction,
    layout: &VariableLayout,
    gamma: f64,
    u_avg: &mut [f64],
) -> (f64, f64) {
    let sl = l.sqrt_rho;
    let sr = r.sqrt_rho;
    let sum = sl + sr;

    let rho_l = u_l[layout.density()];
    let rho_r = u_r[layout.density()];
    let rho = (rho_l * rho_r).sqrt();

    let vx = (u_l[layout.x_momentum()] / sl + u_r[layout.x_momentum()] / sr) / sum;
    let vy = (u_l[layout.y_momentum()] / sl + u_r[layout.y_momentum()] / sr) / sum;
    let h = (l.enthalpy * sl + r.enthalpy * sr) / sum;
    let bx = (u_l[layout.x_field()] * sl + u_r[layout.x_field()] * sr) / sum;
    let by = (u_l[layout.y_field()] * sl + u_r[layout.y_field()] * sr) / sum;

    u_avg[layout.density()] = rho;
    u_avg[layout.x_momentum()] = rho * vx;
    u_avg[layout.y_momentum()] = rho * vy;
    u_avg[layout.energy()] =
        (h * rho + (gamma - 1.0) * rho * (vx * vx + vy * vy) - 0.5 * gamma * (bx * bx + by * by))
            / gamma;
    u_avg[layout.x_field()] = bx;
    u_avg[layout.y_field()] = by;
    for k in layout.species() {
        u_avg[k] = rho * (u_l[k] / sl + u_r[k] / sr) / sum;
    }

    let bt_l = u_l[layout.transverse_field(dir)] / SQRT_4PI;
    let bt_r = u_r[layout.transverse_field(dir)] / SQRT_4PI;
    let x = 0.5 * (bt_l - bt_r) * (bt_l - bt_r) / sum;
    let y = 0.5 * (rho_l + rho_r) / rho;
    (x, y)
}

/// HLLE flux at one interface using caller-provided scratch storage.
///
/// Returns the wave-speed bounds used for the blend.
///
/// # Panics
/// Panics if `u_l`, `u_r`, `out` or the workspace buffers do not hold
/// exactly `ctx.layout.nvar()` components.
pub fn hlle_flux_with(
    u_l: &[f64],
    u_r: &[f64],
    b_face: f64,
    ctx: &RiemannContext,
    ws: &mut FluxWorkspace,
    diag: &mut NumericalDiagnostics,
    out: &mut [f64],
) -> HlleFan {
    let dir = ctx.direction;
    let layout = ctx.layout;
    let gamma = ctx.config.gamma;
    let nvar = layout.nvar();
    debug_assert_eq!(u_l.len(), nvar, "u_l length must match layout");
    debug_assert_eq!(u_r.len(), nvar, "u_r length must match layout");
    debug_assert_eq!(out.len(), nvar, "flux length must match layout");
    debug_assert_eq!(ws.u_avg.len(), nvar, "workspace must be sized for layout");

    let l = side_state(u_l, b_face, dir, layout, ctx.config, diag);
    let r = side_state(u_r, b_face, dir, layout, ctx.config, diag);

    let (x, y) = roe_average(u_l, u_r, &l, &r, dir, layout, gamma, &mut ws.u_avg);
    let waves = roe_eigenvalues(&ws.u_avg, dir, layout, gamma, x, y, diag);

    let bp = waves.max().max(r.vn + r.fast).max(0.0);
    let bm = waves.min().min(l.vn - l.fast).min(0.0);

    let mhd = IdealMhd::new(gamma);
    mhd.flux_into(u_l, dir, layout, &mut ws.f_l);

    if u_l == u_r {
        out.copy_from_slice(&ws.f_l);
    } else if bp - bm == 0.0 {
        // Only reachable for a static, field-free, zero-temperature pair.
        diag.zero_spread_fans += 1;
        out.copy_from_slice(&ws.f_l);
    } else {
        mhd.flux_into(u_r, dir, layout, &mut ws.f_r);
        let inv = 1.0 / (bp - bm);
        for (n, o) in out.iter_mut().enumerate() {
            *o = (bp * ws.f_l[n] - bm * ws.f_r[n]) * inv + bp * bm * inv * (u_r[n] - u_l[n]);
        }
    }

    if out.iter().any(|v| !v.is_finite()) {
        diag.non_finite_fluxes += 1;
    }

    HlleFan { waves, bm, bp }
}

/// HLLE flux at one interface.
///
/// # Arguments
/// * `u_l`, `u_r` - Left and right conservative states
/// * `b_face` - Face-centered normal field, used on both sides
/// * `dir` - Sweep direction
/// * `layout` - Variable layout
/// * `config` - Adiabatic index and floors
/// * `diag` - Floor and degeneracy counters
/// * `out` - Flux output
///
/// # Panics
/// Panics if `u_l`, `u_r` or `out` does not hold exactly `layout.nvar()`
/// components.
#[allow(clippy::too_many_arguments)]
pub fn hlle_flux(
    u_l: &[f64],
    u_r: &[f64],
    b_face: f64,
    dir: Direction,
    layout: &VariableLayout,
    config: &MhdConfig,
    diag: &mut NumericalDiagnostics,
    out: &mut [f64],
) -> HlleFan {
    let ctx = RiemannContext::new(dir, layout, config);
    let mut ws = FluxWorkspace::new(layout.nvar());
    hlle_flux_with(u_l, u_r, b_face, &ctx, &mut ws, diag, out)
}
