//! Batch-uniform tracking decisions.
//!
//! Everything that depends only on the element and the direction is
//! resolved once per tracking call here, so the per-particle path is a
//! plain match on [`Scheme`].

use bendkit_core::TrackDirection;

use crate::config::BendConfig;
use crate::expanded::ExpandedPlan;
use crate::model::KickSplit;
use crate::slicing::SlicePlan;

/// Resolved per-particle scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scheme {
    /// No kick content: one full-length bend drift.
    SingleDrift {
        /// Signed element length.
        length: f64,
        /// Dipole strength carried by the drift.
        k0_drift: f64,
    },
    /// Composed integrator over `slices.num_slices` Yoshida units.
    Yoshida {
        /// Dipole split between drifts and kicks.
        split: KickSplit,
        /// Slicing of the element.
        slices: SlicePlan,
    },
    /// Uniform combined-function drifts with multipole kicks.
    Expanded(ExpandedPlan),
}

/// Decisions for one (configuration, direction) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPlan {
    /// Tracking direction.
    pub direction: TrackDirection,
    /// Element length with the direction applied.
    pub length: f64,
    /// Scheme applied to every particle.
    pub scheme: Scheme,
}

impl TrackPlan {
    /// Resolve the plan for `config` tracked in `direction`.
    pub fn resolve(config: &BendConfig, direction: TrackDirection) -> Self {
        let length = direction.apply(config.length());
        let model = config.model();

        let scheme = match model.kick_split(config.k0()) {
            Some(split) => {
                let no_kick = split.k0_kick == 0.0
                    && config.k1() == 0.0
                    && config.multipoles().is_zero();
                if no_kick {
                    tracing::debug!(%model, ?direction, length, "no kick content, single drift");
                    Scheme::SingleDrift {
                        length,
                        k0_drift: split.k0_drift,
                    }
                } else {
                    Scheme::Yoshida {
                        split,
                        slices: SlicePlan::new(length, config.h(), config.num_multipole_kicks()),
                    }
                }
            }
            // Validated positive at build time.
            None => Scheme::Expanded(ExpandedPlan::new(
                length,
                config.num_multipole_kicks().unsigned_abs(),
                direction,
            )),
        };

        let plan = Self {
            direction,
            length,
            scheme,
        };
        tracing::debug!(
            %model,
            ?direction,
            stages = plan.num_stages(),
            "resolved bend tracking plan"
        );
        plan
    }

    /// Number of repeated units: Yoshida slices, expanded kicks, or one
    /// for the single drift.
    pub fn num_stages(&self) -> u64 {
        match self.scheme {
            Scheme::SingleDrift { .. } => 1,
            Scheme::Yoshida { slices, .. } => slices.num_slices,
            Scheme::Expanded(plan) => plan.num_kicks,
        }
    }

    /// Whether the plan is the kick-free single drift.
    pub fn is_single_drift(&self) -> bool {
        matches!(self.scheme, Scheme::SingleDrift { .. })
    }
}
