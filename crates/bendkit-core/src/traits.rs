//! Capability traits supplied by the surrounding element framework.
//!
//! The bend tracking core composes these maps but never implements them:
//! exact or near-exact thick propagators and the generic multipole kick
//! belong to the framework. `bendkit-maps` ships paraxial reference
//! implementations.

use crate::multipole::Multipoles;
use crate::particle::PhaseSpace;

/// Thick propagator through a bend sector, with no kick applied.
///
/// # Contract
///
/// - `length` may be negative (backtracking); the map for `-length` must
///   invert the map for `length`.
/// - `k0` is the part of the dipole strength carried by the drift; the
///   tracking core passes zero for schemes that deliver the dipole as a
///   kick.
pub trait BendDrift: Send + Sync {
    /// Advance one particle through a bend sector of the given length,
    /// dipole strength and curvature.
    fn bend_drift(&self, particle: &mut dyn PhaseSpace, length: f64, k0: f64, h: f64);
}

/// Thick propagator through a combined-function sector carrying dipole,
/// quadrupole and curvature content together.
pub trait CombinedFunctionDrift: Send + Sync {
    /// Advance one particle through a combined-function sector.
    fn combined_function_drift(
        &self,
        particle: &mut dyn PhaseSpace,
        length: f64,
        k0: f64,
        k1: f64,
        h: f64,
    );
}

/// Generic thin multipole kick of arbitrary order.
pub trait MultipoleKick: Send + Sync {
    /// Apply the Taylor-expansion kick of `multipoles`, scaled by `weight`.
    ///
    /// Only `px` and `py` may be modified.
    fn multipole_kick(&self, particle: &mut dyn PhaseSpace, multipoles: &Multipoles, weight: f64);
}

/// Everything the bend tracker needs from the framework.
///
/// Blanket-implemented for any type providing the three capabilities.
pub trait ElementMaps: BendDrift + CombinedFunctionDrift + MultipoleKick {}

impl<T> ElementMaps for T where T: BendDrift + CombinedFunctionDrift + MultipoleKick {}
