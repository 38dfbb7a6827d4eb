//! Core types and traits for bendkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces shared by the tracking core and the element framework around it:
//! the particle accessor, multipole strengths, the tracking direction,
//! the capability traits for thick propagators and the generic kick, and
//! the configuration error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod multipole;
pub mod particle;
pub mod traits;

pub use direction::TrackDirection;
pub use error::{ConfigError, MultipoleKind};
pub use multipole::Multipoles;
pub use particle::{Particle, PhaseSpace};
pub use traits::{BendDrift, CombinedFunctionDrift, ElementMaps, MultipoleKick};
