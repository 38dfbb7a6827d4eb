//! Tracking direction (forward or backtracking).

/// Direction in which an element is traversed.
///
/// Backtracking runs the identical algorithm with the element length
/// negated before any planning happens. The stage order of the
/// integrator is never reversed; the palindromic composition makes the
/// negated map the inverse of the forward one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrackDirection {
    /// Regular tracking along the reference orbit.
    #[default]
    Forward,
    /// Backtracking: the element is traversed with negated length.
    Backward,
}

impl TrackDirection {
    /// `+1.0` for forward tracking, `-1.0` for backtracking.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Apply the direction to an element length.
    pub fn apply(self, length: f64) -> f64 {
        match self {
            Self::Forward => length,
            Self::Backward => -length,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Whether this is the backtracking direction.
    pub fn is_backward(self) -> bool {
        self == Self::Backward
    }
}
