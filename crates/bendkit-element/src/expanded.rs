//! Expanded scheme: uniform combined-function drifts interleaved with
//! plain multipole kicks.

use bendkit_core::{ElementMaps, Multipoles, PhaseSpace, TrackDirection};

/// Drift/kick layout of the expanded scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpandedPlan {
    /// Number of kicks; always positive.
    pub num_kicks: u64,
    /// Length of each of the `num_kicks + 1` drifts; negative when
    /// backtracking.
    pub drift_length: f64,
    /// Weight of each kick, already carrying the direction sign.
    pub kick_weight: f64,
}

impl ExpandedPlan {
    /// Lay out `num_kicks` kicks over an element of (signed) `length`.
    pub fn new(length: f64, num_kicks: u64, direction: TrackDirection) -> Self {
        Self {
            num_kicks,
            drift_length: length / (num_kicks + 1) as f64,
            kick_weight: direction.sign() / num_kicks as f64,
        }
    }
}

/// Track one particle: `cfd`, then `num_kicks` times `[kick, cfd]`.
pub fn track_expanded<M>(
    maps: &M,
    particle: &mut dyn PhaseSpace,
    plan: &ExpandedPlan,
    k0: f64,
    k1: f64,
    h: f64,
    multipoles: &Multipoles,
) where
    M: ElementMaps + ?Sized,
{
    maps.combined_function_drift(particle, plan.drift_length, k0, k1, h);
    for _ in 0..plan.num_kicks {
        maps.multipole_kick(particle, multipoles, plan.kick_weight);
        maps.combined_function_drift(particle, plan.drift_length, k0, k1, h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bendkit_core::Particle;
    use bendkit_test_utils::{MapCall, RecordingMaps};

    #[test]
    fn layout_alternates_drifts_and_kicks() {
        let maps = RecordingMaps::new();
        let m = Multipoles::new(&[0.0, 0.0, 0.1], &[]).unwrap();
        let plan = ExpandedPlan::new(6.0, 3, TrackDirection::Forward);
        let mut p = Particle::default();
        track_expanded(&maps, &mut p, &plan, 0.1, 0.2, 0.1, &m);

        let cfd = MapCall::CombinedFunctionDrift {
            length: 1.5,
            k0: 0.1,
            k1: 0.2,
            h: 0.1,
        };
        let kick = MapCall::MultipoleKick {
            weight: 1.0 / 3.0,
            order: 2,
        };
        assert_eq!(
            maps.calls(),
            vec![
                cfd.clone(),
                kick.clone(),
                cfd.clone(),
                kick.clone(),
                cfd.clone(),
                kick,
                cfd
            ]
        );
    }

    #[test]
    fn backward_plan_flips_lengths_and_weights() {
        let plan = ExpandedPlan::new(-6.0, 3, TrackDirection::Backward);
        assert_eq!(plan.drift_length, -1.5);
        assert_eq!(plan.kick_weight, -1.0 / 3.0);
    }
}
