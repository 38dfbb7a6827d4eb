//! Tracking-scheme selection for the bend element.
//!
//! Five schemes are addressable by numeric id (the lattice-file
//! convention) or by name. Three of them share one code path: the
//! adaptive scheme is currently a fixed alias of the full scheme, as is
//! rot-kick-rot.

use std::fmt;
use std::str::FromStr;

use bendkit_core::ConfigError;

/// Tracking scheme of a bend element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BendModel {
    /// Id 0. Alias of [`BendModel::Full`].
    #[default]
    Adaptive,
    /// Id 1. Dipole delivered entirely by the kicks of the composed
    /// integrator; drifts are field-free curved sectors.
    Full,
    /// Id 2. Dipole carried entirely by the drifts; kicks only deliver
    /// quadrupole and multipole content.
    BendKickBend,
    /// Id 3. Alias of [`BendModel::Full`].
    RotKickRot,
    /// Id 4. Uniform slicing with combined-function drifts and plain
    /// multipole kicks; no composition.
    Expanded,
}

/// How the dipole strength is split between drift and kick stages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KickSplit {
    /// Dipole strength delivered by the kick stages.
    pub k0_kick: f64,
    /// Dipole strength carried by the bend drifts.
    pub k0_drift: f64,
}

impl BendModel {
    /// All models in id order.
    pub const ALL: [BendModel; 5] = [
        BendModel::Adaptive,
        BendModel::Full,
        BendModel::BendKickBend,
        BendModel::RotKickRot,
        BendModel::Expanded,
    ];

    /// Resolve a numeric model id.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownModel`] for ids outside `0..=4`.
    pub fn from_id(id: i64) -> Result<Self, ConfigError> {
        match id {
            0 => Ok(Self::Adaptive),
            1 => Ok(Self::Full),
            2 => Ok(Self::BendKickBend),
            3 => Ok(Self::RotKickRot),
            4 => Ok(Self::Expanded),
            _ => Err(ConfigError::UnknownModel { id }),
        }
    }

    /// Numeric id of the model.
    pub fn id(self) -> i64 {
        match self {
            Self::Adaptive => 0,
            Self::Full => 1,
            Self::BendKickBend => 2,
            Self::RotKickRot => 3,
            Self::Expanded => 4,
        }
    }

    /// Canonical name of the model.
    pub fn name(self) -> &'static str {
        match self {
            Self::Adaptive => "adaptive",
            Self::Full => "full",
            Self::BendKickBend => "bend-kick-bend",
            Self::RotKickRot => "rot-kick-rot",
            Self::Expanded => "expanded",
        }
    }

    /// Whether the model uses the composed (Yoshida) integrator.
    pub fn is_composed(self) -> bool {
        self != Self::Expanded
    }

    /// Split `k0` between kicks and drifts for the composed models.
    ///
    /// Returns `None` for [`BendModel::Expanded`], which carries the full
    /// field in its combined-function drifts.
    pub fn kick_split(self, k0: f64) -> Option<KickSplit> {
        match self {
            Self::Adaptive | Self::Full | Self::RotKickRot => Some(KickSplit {
                k0_kick: k0,
                k0_drift: 0.0,
            }),
            Self::BendKickBend => Some(KickSplit {
                k0_kick: 0.0,
                k0_drift: k0,
            }),
            Self::Expanded => None,
        }
    }
}

impl fmt::Display for BendModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BendModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ConfigError::UnknownModelName {
                name: s.to_string(),
            })
    }
}
