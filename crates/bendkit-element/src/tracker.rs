//! Batch entry point for bend tracking.
//!
//! [`BendTracker`] owns a validated [`BendConfig`] and the framework maps.
//! Each call to [`BendTracker::track`] resolves a [`TrackPlan`] once and
//! then maps every particle independently through it; with the
//! `parallel` feature the batch is split across the rayon pool.

use bendkit_core::{ConfigError, ElementMaps, PhaseSpace, TrackDirection};
use bendkit_maps::ParaxialMaps;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{BendConfig, BendSpec};
use crate::expanded::track_expanded;
use crate::kick::BendKick;
use crate::plan::{Scheme, TrackPlan};
use crate::yoshida::{track_yoshida_slice, YoshidaSlice};

/// Tracks particle batches through one bend element.
#[derive(Clone, Debug)]
pub struct BendTracker<M = ParaxialMaps> {
    config: BendConfig,
    maps: M,
}

impl BendTracker<ParaxialMaps> {
    /// Tracker using the paraxial reference maps.
    pub fn new(config: BendConfig) -> Self {
        Self {
            config,
            maps: ParaxialMaps,
        }
    }

    /// Validate `spec` and track `particles` through it with the paraxial
    /// reference maps.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from validation. Particles are untouched on
    /// error.
    pub fn track_spec<P>(
        spec: BendSpec,
        particles: &mut [P],
        direction: TrackDirection,
    ) -> Result<(), ConfigError>
    where
        P: PhaseSpace + Send,
    {
        let config = BendConfig::try_from(spec)?;
        Self::new(config).track(particles, direction);
        Ok(())
    }
}

impl<M: ElementMaps> BendTracker<M> {
    /// Tracker using caller-supplied maps.
    pub fn with_maps(config: BendConfig, maps: M) -> Self {
        Self { config, maps }
    }

    /// The element configuration.
    pub fn config(&self) -> &BendConfig {
        &self.config
    }

    /// The framework maps.
    pub fn maps(&self) -> &M {
        &self.maps
    }

    /// Resolve the batch-uniform decisions for `direction`.
    pub fn plan(&self, direction: TrackDirection) -> TrackPlan {
        TrackPlan::resolve(&self.config, direction)
    }

    /// Track every particle of `particles` through the element, in place.
    pub fn track<P>(&self, particles: &mut [P], direction: TrackDirection)
    where
        P: PhaseSpace + Send,
    {
        let plan = self.plan(direction);
        tracing::trace!(
            particles = particles.len(),
            ?direction,
            "tracking batch through bend"
        );

        #[cfg(feature = "parallel")]
        particles
            .par_iter_mut()
            .for_each(|p| self.track_particle(p, &plan));

        #[cfg(not(feature = "parallel"))]
        for p in particles.iter_mut() {
            self.track_particle(p, &plan);
        }
    }

    /// Track a single particle through a previously resolved `plan`.
    pub fn track_particle(&self, particle: &mut dyn PhaseSpace, plan: &TrackPlan) {
        let cfg = &self.config;
        match plan.scheme {
            Scheme::SingleDrift { length, k0_drift } => {
                self.maps.bend_drift(particle, length, k0_drift, cfg.h());
            }
            Scheme::Yoshida { split, slices } => {
                let slice = YoshidaSlice {
                    slice_length: slices.slice_length,
                    kick_weight: slices.kick_weight,
                    k0_drift: split.k0_drift,
                    kick: BendKick {
                        k0: split.k0_kick,
                        k1: cfg.k1(),
                        h: cfg.h(),
                        length: plan.length,
                        multipoles: cfg.multipoles(),
                        direction: plan.direction,
                    },
                };
                for _ in 0..slices.num_slices {
                    track_yoshida_slice(&self.maps, particle, &slice);
                }
            }
            Scheme::Expanded(expanded) => track_expanded(
                &self.maps,
                particle,
                &expanded,
                cfg.k0(),
                cfg.k1(),
                cfg.h(),
                cfg.multipoles(),
            ),
        }
    }
}
