//! Test utilities and mock maps for bendkit development.
//!
//! Provides [`RecordingMaps`], a capability provider that records every
//! call the tracker makes without applying any physics, plus numeric
//! fixtures in [`fixtures`]: seeded particle bunches, analytic transfer
//! matrices and finite-difference Jacobians.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::Mutex;

use bendkit_core::{BendDrift, CombinedFunctionDrift, MultipoleKick, Multipoles, PhaseSpace};

/// One call made by the tracker into its collaborators.
#[derive(Clone, Debug, PartialEq)]
pub enum MapCall {
    BendDrift { length: f64, k0: f64, h: f64 },
    CombinedFunctionDrift { length: f64, k0: f64, k1: f64, h: f64 },
    MultipoleKick { weight: f64, order: usize },
}

impl MapCall {
    /// Whether this call is one of the two drift propagators.
    pub fn is_drift(&self) -> bool {
        matches!(self, Self::BendDrift { .. } | Self::CombinedFunctionDrift { .. })
    }

    /// Length of a drift call, `None` for kicks.
    pub fn length(&self) -> Option<f64> {
        match self {
            Self::BendDrift { length, .. } | Self::CombinedFunctionDrift { length, .. } => {
                Some(*length)
            }
            Self::MultipoleKick { .. } => None,
        }
    }

    /// Weight of a kick call, `None` for drifts.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Self::MultipoleKick { weight, .. } => Some(*weight),
            _ => None,
        }
    }
}

/// Mock collaborators that record calls and leave particles untouched.
///
/// Track a single particle through an element to get the exact call
/// sequence the tracker issues per particle.
#[derive(Default)]
pub struct RecordingMaps {
    calls: Mutex<Vec<MapCall>>,
}

impl RecordingMaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call so far, in order.
    pub fn calls(&self) -> Vec<MapCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Drop the recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: MapCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl BendDrift for RecordingMaps {
    fn bend_drift(&self, _particle: &mut dyn PhaseSpace, length: f64, k0: f64, h: f64) {
        self.record(MapCall::BendDrift { length, k0, h });
    }
}

impl CombinedFunctionDrift for RecordingMaps {
    fn combined_function_drift(
        &self,
        _particle: &mut dyn PhaseSpace,
        length: f64,
        k0: f64,
        k1: f64,
        h: f64,
    ) {
        self.record(MapCall::CombinedFunctionDrift { length, k0, k1, h });
    }
}

impl MultipoleKick for RecordingMaps {
    fn multipole_kick(&self, _particle: &mut dyn PhaseSpace, multipoles: &Multipoles, weight: f64) {
        self.record(MapCall::MultipoleKick {
            weight,
            order: multipoles.order(),
        });
    }
}
