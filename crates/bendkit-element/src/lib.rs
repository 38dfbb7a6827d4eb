//! Symplectic tracking through combined-function bending magnets.
//!
//! A bend element carries a dipole (`k0`), a quadrupole (`k1`), a
//! reference-orbit curvature (`h`) and arbitrary-order normal/skew
//! multipoles. Particles are mapped through it by one of five schemes
//! ([`BendModel`]):
//!
//! - the composed schemes slice the element ([`SlicePlan`]) and apply a
//!   sixth-order Yoshida unit ([`yoshida`]) per slice, splitting the dipole
//!   between bend drifts and thin kicks ([`bend_multipolar_kick`]);
//! - the expanded scheme interleaves uniform combined-function drifts with
//!   plain multipole kicks ([`track_expanded`]).
//!
//! The thick propagators and the generic kick come from the framework
//! through the capability traits of `bendkit-core`.
//!
//! ```
//! use bendkit_core::{Particle, TrackDirection};
//! use bendkit_element::{BendConfig, BendTracker};
//!
//! let config = BendConfig::builder()
//!     .length(2.0)
//!     .k0(0.1)
//!     .h(0.1)
//!     .build()
//!     .unwrap();
//! let tracker = BendTracker::new(config);
//! let mut bunch = vec![Particle::new(1e-3, 0.0, 0.0, 0.0)];
//! tracker.track(&mut bunch, TrackDirection::Forward);
//! tracker.track(&mut bunch, TrackDirection::Backward);
//! assert!((bunch[0].x - 1e-3).abs() < 1e-12);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod expanded;
pub mod kick;
pub mod model;
pub mod plan;
pub mod slicing;
pub mod tracker;
pub mod yoshida;

pub use config::{BendConfig, BendConfigBuilder, BendSpec, ModelSelector};
pub use expanded::{track_expanded, ExpandedPlan};
pub use kick::{bend_multipolar_kick, BendKick};
pub use model::{BendModel, KickSplit};
pub use plan::{Scheme, TrackPlan};
pub use slicing::{auto_kick_count, SlicePlan};
pub use tracker::BendTracker;
pub use yoshida::{track_yoshida_slice, YoshidaSlice};
