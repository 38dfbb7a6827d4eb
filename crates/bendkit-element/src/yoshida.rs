//! Sixth-order Yoshida composition of bend drifts and thin kicks.
//!
//! One unit is the symmetric sequence
//!
//! ```text
//! D0 K0 D1 K1 D2 K2 D3 K3 D3 K2 D2 K1 D1 K0 D0
//! ```
//!
//! with eight drifts and seven kicks. Drift coefficients sum to ½ over
//! `D0..D3`; kick coefficients satisfy `2(K0+K1+K2) + K3 = 1`.

use bendkit_core::{ElementMaps, PhaseSpace};

use crate::kick::{bend_multipolar_kick, BendKick};

/// Drift fractions `D0..D3` (bit-exact).
pub const DRIFT_COEFFS: [f64; 4] = [
    f64::from_bits(0x3fd9_1abc_4988_937b),
    f64::from_bits(0x3fe0_5246_8fb7_5c74),
    f64::from_bits(0xbfde_25bd_1940_51b9),
    f64::from_bits(0x3fb1_99ce_c124_1558),
];

/// Kick fractions `K0..K3` (bit-exact).
pub const KICK_COEFFS: [f64; 4] = [
    f64::from_bits(0x3fe9_1abc_4988_937b),
    f64::from_bits(0x3fce_2743_5798_95b4),
    f64::from_bits(0xbff2_d7c6_f793_3b93),
    f64::from_bits(0x3ff5_0b00_cfb7_be3e),
];

/// Drift coefficient index for each drift in a unit.
pub const DRIFT_SEQUENCE: [usize; 8] = [0, 1, 2, 3, 3, 2, 1, 0];

/// Kick coefficient index for each kick in a unit.
pub const KICK_SEQUENCE: [usize; 7] = [0, 1, 2, 3, 2, 1, 0];

/// Parameters of one Yoshida unit.
#[derive(Clone, Copy, Debug)]
pub struct YoshidaSlice<'a> {
    /// Signed length of the unit.
    pub slice_length: f64,
    /// Fraction of the integrated strength delivered by the unit.
    pub kick_weight: f64,
    /// Dipole strength carried by the drifts.
    pub k0_drift: f64,
    /// Kick content.
    pub kick: BendKick<'a>,
}

/// Apply one unit to `particle`.
pub fn track_yoshida_slice<M>(maps: &M, particle: &mut dyn PhaseSpace, slice: &YoshidaSlice<'_>)
where
    M: ElementMaps + ?Sized,
{
    let h = slice.kick.h;
    for (stage, &d) in DRIFT_SEQUENCE.iter().enumerate() {
        maps.bend_drift(
            particle,
            slice.slice_length * DRIFT_COEFFS[d],
            slice.k0_drift,
            h,
        );
        if let Some(&k) = KICK_SEQUENCE.get(stage) {
            bend_multipolar_kick(
                maps,
                particle,
                &slice.kick,
                slice.kick_weight * KICK_COEFFS[k],
            );
        }
    }
}
