//! Paraxial thick propagators for bend and combined-function sectors.
//!
//! Both maps solve the second-order expansion of the curvilinear
//! Hamiltonian exactly, with `m = 1 + delta`:
//!
//! ```text
//! H = (px² + py²) / (2m) + (k0 - h·m)·x + ½·(h·k0 + k1)·x² - ½·k1·y²
//! ```
//!
//! The bend drift is the `k1 = 0` case; the tracking core puts the
//! quadrupole and any dipole share it does not hand to the drift into
//! thin kicks instead.

use bendkit_core::PhaseSpace;

use crate::linear::LinearPlane;

/// Advance a particle through a bend sector.
///
/// `k0` is the dipole strength carried by the drift (zero when the tracker
/// delivers the dipole as kicks); `h` is the curvature of the reference
/// orbit.
pub fn paraxial_bend_drift(particle: &mut dyn PhaseSpace, length: f64, k0: f64, h: f64) {
    paraxial_combined_function_drift(particle, length, k0, 0.0, h);
}

/// Advance a particle through a combined-function sector.
pub fn paraxial_combined_function_drift(
    particle: &mut dyn PhaseSpace,
    length: f64,
    k0: f64,
    k1: f64,
    h: f64,
) {
    let m = 1.0 + particle.delta();

    let horizontal = LinearPlane::new(m, k0 - h * m, h * k0 + k1);
    let (x, px) = horizontal.advance(particle.x(), particle.px(), length);

    let vertical = LinearPlane::new(m, 0.0, -k1);
    let (y, py) = vertical.advance(particle.y(), particle.py(), length);

    particle.set_x(x);
    particle.set_px(px);
    particle.set_y(y);
    particle.set_py(py);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bendkit_core::Particle;

    #[test]
    fn straight_field_free_is_a_drift() {
        let mut p = Particle::new(1e-3, 2e-4, -5e-4, 1e-4);
        paraxial_bend_drift(&mut p, 2.0, 0.0, 0.0);
        assert!((p.x - (1e-3 + 4e-4)).abs() < 1e-18);
        assert!((p.y - (-5e-4 + 2e-4)).abs() < 1e-18);
        assert_eq!(p.px, 2e-4);
        assert_eq!(p.py, 1e-4);
    }

    #[test]
    fn off_momentum_drift_scales_by_mass() {
        let mut p = Particle::new(0.0, 1e-3, 0.0, 0.0).with_delta(0.01);
        paraxial_bend_drift(&mut p, 1.0, 0.0, 0.0);
        assert!((p.x - 1e-3 / 1.01).abs() < 1e-18);
    }

    #[test]
    fn matched_sector_bend_keeps_reference_orbit() {
        // k0 == h: the design orbit is x = px = 0.
        let mut p = Particle::default();
        paraxial_bend_drift(&mut p, 1.3, 0.25, 0.25);
        assert_eq!(p.transverse(), [0.0; 4]);
    }

    #[test]
    fn matched_sector_bend_is_weak_focusing() {
        let h = 0.5;
        let l = 1.2;
        let mut p = Particle::new(1e-3, 0.0, 0.0, 0.0);
        paraxial_bend_drift(&mut p, l, h, h);
        assert!((p.x - 1e-3 * (h * l).cos()).abs() < 1e-16);
        assert!((p.px + 1e-3 * h * (h * l).sin()).abs() < 1e-16);
    }

    #[test]
    fn pure_curvature_bends_away_from_orbit() {
        // No field with curvature h: px grows by h·s for an on-momentum particle.
        let mut p = Particle::default();
        paraxial_bend_drift(&mut p, 2.0, 0.0, 0.1);
        assert!((p.px - 0.2).abs() < 1e-15);
        assert!((p.x - 0.2).abs() < 1e-15);
    }

    #[test]
    fn quadrupole_focuses_x_and_defocuses_y() {
        let k1 = 0.4;
        let l = 0.5;
        let mut p = Particle::new(1e-3, 0.0, 1e-3, 0.0);
        paraxial_combined_function_drift(&mut p, l, 0.0, k1, 0.0);
        let w = k1.sqrt();
        assert!((p.x - 1e-3 * (w * l).cos()).abs() < 1e-16);
        assert!((p.y - 1e-3 * (w * l).cosh()).abs() < 1e-16);
    }
}
