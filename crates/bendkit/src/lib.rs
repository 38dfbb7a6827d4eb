//! bendkit: symplectic particle tracking through combined-function bending
//! magnets.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the bendkit sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use bendkit::prelude::*;
//!
//! let config = BendConfig::builder()
//!     .length(2.0)
//!     .k0(0.1)
//!     .k1(0.02)
//!     .h(0.1)
//!     .model(BendModel::BendKickBend)
//!     .knl([0.0, 0.0, 0.5])
//!     .build()
//!     .unwrap();
//! let tracker = BendTracker::new(config);
//!
//! let mut bunch = vec![Particle::new(1e-3, 0.0, -1e-3, 0.0); 8];
//! tracker.track(&mut bunch, TrackDirection::Forward);
//! tracker.track(&mut bunch, TrackDirection::Backward);
//! assert!(bunch.iter().all(|p| (p.x - 1e-3).abs() < 1e-12));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `bendkit-core` | Particle accessor, multipoles, direction, capability traits, errors |
//! | [`maps`] | `bendkit-maps` | Paraxial reference drifts and the Taylor multipole kick |
//! | [`element`] | `bendkit-element` | Model selection, slicing, integrators, the batch tracker |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and capability traits (`bendkit-core`).
///
/// Implement [`types::PhaseSpace`] for your particle storage and the
/// [`types::ElementMaps`] capabilities for your framework's propagators.
pub use bendkit_core as types;

/// Paraxial reference maps (`bendkit-maps`).
///
/// [`maps::ParaxialMaps`] is the default collaborator of
/// [`element::BendTracker`].
pub use bendkit_maps as maps;

/// The bend tracking core (`bendkit-element`).
pub use bendkit_element as element;

/// Common imports for typical bendkit usage.
pub mod prelude {
    // Core types and traits
    pub use bendkit_core::{
        ConfigError, ElementMaps, Multipoles, Particle, PhaseSpace, TrackDirection,
    };

    // Reference maps
    pub use bendkit_maps::ParaxialMaps;

    // Element
    pub use bendkit_element::{BendConfig, BendModel, BendSpec, BendTracker, TrackPlan};
}
