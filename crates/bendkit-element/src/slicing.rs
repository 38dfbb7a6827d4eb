//! Slice planning for the composed integrator.
//!
//! When no kick count is configured it is derived from an accuracy target
//! of about 0.1 mrad average kick angle per kick. Kicks are then grouped
//! into slices of one 7-kick Yoshida unit each.

use std::f64::consts::PI;

/// Curvatures below this magnitude are treated as a straight magnet.
pub const STRAIGHT_THRESHOLD: f64 = 1e-8;

/// Target bending angle per kick, as a fraction of a full turn.
pub const KICK_ANGLE_TARGET: f64 = 1e-4;

/// Below this many kicks the element is tracked as a single slice.
pub const MIN_KICKS_FOR_SLICING: i64 = 8;

/// Kicks in one Yoshida unit.
pub const KICKS_PER_SLICE: i64 = 7;

/// Kick count derived from the element geometry.
///
/// Zero for a straight magnet; otherwise `⌊|L| / (2π/|h|) / 1e-4⌋`.
pub fn auto_kick_count(length: f64, h: f64) -> i64 {
    if h.abs() < STRAIGHT_THRESHOLD {
        return 0;
    }
    let circumference = 2.0 * PI / h.abs();
    // Truncation toward zero; `as` saturates for out-of-range values.
    (length.abs() / circumference / KICK_ANGLE_TARGET) as i64
}

/// Batch-uniform slicing decisions for one tracking call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlicePlan {
    /// Kicks configured or derived for the element.
    pub num_kicks: i64,
    /// Number of Yoshida units applied in sequence.
    pub num_slices: u64,
    /// Length of one unit; negative when backtracking.
    pub slice_length: f64,
    /// Fraction of the integrated strength delivered by one unit.
    pub kick_weight: f64,
}

impl SlicePlan {
    /// Plan the slicing of an element of (signed) `length`.
    ///
    /// A positive `num_multipole_kicks` is used directly; zero requests the
    /// geometric estimate from [`auto_kick_count`].
    pub fn new(length: f64, h: f64, num_multipole_kicks: i64) -> Self {
        let num_kicks = if num_multipole_kicks > 0 {
            num_multipole_kicks
        } else {
            auto_kick_count(length, h)
        };

        let num_slices = if num_kicks < MIN_KICKS_FOR_SLICING {
            1
        } else {
            (num_kicks / KICKS_PER_SLICE + 1) as u64
        };

        Self {
            num_kicks,
            num_slices,
            slice_length: length / num_slices as f64,
            kick_weight: 1.0 / num_slices as f64,
        }
    }
}
