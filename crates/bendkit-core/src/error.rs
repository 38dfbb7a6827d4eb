//! Error types for bendkit.
//!
//! Tracking itself has no per-particle failure mode: every check happens
//! once, when an element configuration is built, so a rejected element
//! never reaches the particle loop.

use std::error::Error;
use std::fmt;

/// Which multipole sequence a coefficient belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultipoleKind {
    /// Integrated normal strengths (`knl`).
    Normal,
    /// Integrated skew strengths (`ksl`).
    Skew,
}

impl fmt::Display for MultipoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "knl"),
            Self::Skew => write!(f, "ksl"),
        }
    }
}

/// Errors detected while building a bend element configuration.
///
/// Returned by the element builder and by the fallible tracking entry
/// points before any particle has been touched.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The model id is not one of 0..=4.
    UnknownModel {
        /// The rejected id.
        id: i64,
    },
    /// The model name does not match any known tracking scheme.
    UnknownModelName {
        /// The rejected name.
        name: String,
    },
    /// The expanded model was selected without a positive kick count.
    ///
    /// The expanded scheme divides the integrated strength by the kick
    /// count, so zero (auto) is not meaningful for it.
    ExpandedWithoutKicks {
        /// The configured kick count.
        num_multipole_kicks: i64,
    },
    /// A negative kick count was configured.
    NegativeKickCount {
        /// The configured kick count.
        value: i64,
    },
    /// A scalar element parameter is NaN or infinite.
    NonFinite {
        /// Parameter name (`length`, `k0`, `k1` or `h`).
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A multipole coefficient is NaN or infinite.
    NonFiniteMultipole {
        /// Which sequence the coefficient belongs to.
        kind: MultipoleKind,
        /// Order of the offending coefficient.
        index: usize,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModel { id } => {
                write!(f, "unknown bend model id {id}, expected 0..=4")
            }
            Self::UnknownModelName { name } => write!(f, "unknown bend model '{name}'"),
            Self::ExpandedWithoutKicks {
                num_multipole_kicks,
            } => write!(
                f,
                "expanded model requires num_multipole_kicks > 0, got {num_multipole_kicks}"
            ),
            Self::NegativeKickCount { value } => {
                write!(f, "num_multipole_kicks must be >= 0, got {value}")
            }
            Self::NonFinite { parameter, value } => {
                write!(f, "{parameter} must be finite, got {value}")
            }
            Self::NonFiniteMultipole { kind, index, value } => {
                write!(f, "{kind}[{index}] must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
