//! Thin kick of a curved combined-function sector.
//!
//! Derived from the expansion of the curvilinear Hamiltonian (MAD-8
//! physics manual, eq. 5.15) with Hamilton's equation `dp/ds = -∂H/∂x`:
//!
//! ```text
//! H_kick = k0·x + ½·k1·(x² - y²) + ½·h·k0·x² + h·k1·(x³/3 - x·y²/2)
//! ```
//!
//! followed by the generic multipole kick for `knl`/`ksl`.

use bendkit_core::{Multipoles, MultipoleKick, PhaseSpace, TrackDirection};

/// Kick parameters shared by every stage of one tracking call.
#[derive(Clone, Copy, Debug)]
pub struct BendKick<'a> {
    /// Dipole strength delivered by the kick (zero for bend-kick-bend).
    pub k0: f64,
    /// Quadrupole strength.
    pub k1: f64,
    /// Curvature of the reference orbit.
    pub h: f64,
    /// Element length, already negated when backtracking.
    pub length: f64,
    /// Integrated multipole content.
    pub multipoles: &'a Multipoles,
    /// Tracking direction; integrated multipole strengths do not scale with
    /// the (negated) length, so the generic kick takes the sign from here.
    pub direction: TrackDirection,
}

/// Apply one kick stage carrying `kick_weight` of the integrated strength.
///
/// Only `px` and `py` change.
pub fn bend_multipolar_kick<M>(
    maps: &M,
    particle: &mut dyn PhaseSpace,
    kick: &BendKick<'_>,
    kick_weight: f64,
) where
    M: MultipoleKick + ?Sized,
{
    let k1l = kick.k1 * kick.length * kick_weight;
    let k0l = kick.k0 * kick.length * kick_weight;
    let h = kick.h;

    let x = particle.x();
    let y = particle.y();

    // dipole
    let mut dpx = -k0l;
    let mut dpy = 0.0;

    // quadrupole
    dpx += -k1l * x;
    dpy += k1l * y;

    // from ½·h·k0·x²
    dpx += -k0l * h * x;

    // from h·k1·(x³/3 - x·y²/2)
    dpx += h * k1l * (-x * x + 0.5 * y * y);
    dpy += h * k1l * x * y;

    particle.add_to_px(dpx);
    particle.add_to_py(dpy);

    maps.multipole_kick(
        particle,
        kick.multipoles,
        kick_weight * kick.direction.sign(),
    );
}
