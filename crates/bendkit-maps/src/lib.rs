//! Paraxial reference maps for bendkit.
//!
//! Provides implementations of the capability traits from `bendkit-core`
//! that the tracking core composes:
//!
//! - [`paraxial_bend_drift`]: exact flow of the second-order bend-sector
//!   Hamiltonian with an optional dipole share.
//! - [`paraxial_combined_function_drift`]: same, with quadrupole focusing.
//! - [`taylor_multipole_kick`]: thin kick of arbitrary multipole order.
//!
//! [`ParaxialMaps`] bundles all three for use with the tracker.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod drift;
pub mod kick;
pub mod linear;

pub use drift::{paraxial_bend_drift, paraxial_combined_function_drift};
pub use kick::taylor_multipole_kick;
pub use linear::LinearPlane;

use bendkit_core::{
    BendDrift, CombinedFunctionDrift, MultipoleKick, Multipoles, PhaseSpace,
};

/// The paraxial reference maps as one zero-sized capability provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParaxialMaps;

impl BendDrift for ParaxialMaps {
    fn bend_drift(&self, particle: &mut dyn PhaseSpace, length: f64, k0: f64, h: f64) {
        paraxial_bend_drift(particle, length, k0, h);
    }
}

impl CombinedFunctionDrift for ParaxialMaps {
    fn combined_function_drift(
        &self,
        particle: &mut dyn PhaseSpace,
        length: f64,
        k0: f64,
        k1: f64,
        h: f64,
    ) {
        paraxial_combined_function_drift(particle, length, k0, k1, h);
    }
}

impl MultipoleKick for ParaxialMaps {
    fn multipole_kick(&self, particle: &mut dyn PhaseSpace, multipoles: &Multipoles, weight: f64) {
        taylor_multipole_kick(particle, multipoles, weight);
    }
}
