//! Bend element configuration, validation, and the serde-facing element
//! description.
//!
//! [`BendConfig`] is immutable once built and shared read-only by every
//! particle of a tracking call. All checks happen in
//! [`BendConfigBuilder::build`], so a rejected element never touches a
//! particle.

use bendkit_core::{ConfigError, Multipoles};
use serde::Deserialize;

use crate::model::BendModel;
use crate::slicing::SlicePlan;

/// Auto-derived slice counts above this are reported with `warn!`.
pub const LARGE_SLICE_COUNT: u64 = 10_000;

// ── BendConfig ─────────────────────────────────────────────────────

/// Validated configuration of one bend element.
#[derive(Clone, Debug, PartialEq)]
pub struct BendConfig {
    length: f64,
    k0: f64,
    k1: f64,
    h: f64,
    model: BendModel,
    num_multipole_kicks: i64,
    multipoles: Multipoles,
}

impl BendConfig {
    /// Create a new builder. Defaults: zero length and strengths, the
    /// adaptive model, auto-derived kick count, no multipoles.
    pub fn builder() -> BendConfigBuilder {
        BendConfigBuilder {
            length: 0.0,
            k0: 0.0,
            k1: 0.0,
            h: 0.0,
            model: BendModel::default(),
            num_multipole_kicks: 0,
            knl: Vec::new(),
            ksl: Vec::new(),
        }
    }

    /// Element length in metres.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Dipole strength.
    pub fn k0(&self) -> f64 {
        self.k0
    }

    /// Quadrupole strength.
    pub fn k1(&self) -> f64 {
        self.k1
    }

    /// Reference-orbit curvature.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Tracking scheme.
    pub fn model(&self) -> BendModel {
        self.model
    }

    /// Configured kick count; zero means auto-derived.
    pub fn num_multipole_kicks(&self) -> i64 {
        self.num_multipole_kicks
    }

    /// Integrated multipole content.
    pub fn multipoles(&self) -> &Multipoles {
        &self.multipoles
    }
}

// ── BendConfigBuilder ──────────────────────────────────────────────

/// Builder for [`BendConfig`].
#[derive(Clone, Debug)]
pub struct BendConfigBuilder {
    length: f64,
    k0: f64,
    k1: f64,
    h: f64,
    model: BendModel,
    num_multipole_kicks: i64,
    knl: Vec<f64>,
    ksl: Vec<f64>,
}

impl BendConfigBuilder {
    /// Set the element length.
    pub fn length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Set the dipole strength.
    pub fn k0(mut self, k0: f64) -> Self {
        self.k0 = k0;
        self
    }

    /// Set the quadrupole strength.
    pub fn k1(mut self, k1: f64) -> Self {
        self.k1 = k1;
        self
    }

    /// Set the reference-orbit curvature.
    pub fn h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Set the tracking scheme.
    pub fn model(mut self, model: BendModel) -> Self {
        self.model = model;
        self
    }

    /// Set the kick count; zero requests the geometric estimate.
    pub fn num_multipole_kicks(mut self, n: i64) -> Self {
        self.num_multipole_kicks = n;
        self
    }

    /// Set the integrated normal multipole strengths.
    pub fn knl(mut self, knl: impl Into<Vec<f64>>) -> Self {
        self.knl = knl.into();
        self
    }

    /// Set the integrated skew multipole strengths.
    pub fn ksl(mut self, ksl: impl Into<Vec<f64>>) -> Self {
        self.ksl = ksl.into();
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonFinite`] for a NaN or infinite length, `k0`,
    ///   `k1` or `h`.
    /// - [`ConfigError::NonFiniteMultipole`] for a bad `knl`/`ksl` entry.
    /// - [`ConfigError::NegativeKickCount`] for `num_multipole_kicks < 0`.
    /// - [`ConfigError::ExpandedWithoutKicks`] for the expanded model
    ///   without a positive kick count.
    pub fn build(self) -> Result<BendConfig, ConfigError> {
        for (parameter, value) in [
            ("length", self.length),
            ("k0", self.k0),
            ("k1", self.k1),
            ("h", self.h),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { parameter, value });
            }
        }

        if self.num_multipole_kicks < 0 {
            return Err(ConfigError::NegativeKickCount {
                value: self.num_multipole_kicks,
            });
        }

        if self.model == BendModel::Expanded && self.num_multipole_kicks == 0 {
            return Err(ConfigError::ExpandedWithoutKicks {
                num_multipole_kicks: self.num_multipole_kicks,
            });
        }

        let multipoles = Multipoles::new(&self.knl, &self.ksl)?;

        if self.model.is_composed() && self.num_multipole_kicks == 0 {
            let plan = SlicePlan::new(self.length, self.h, 0);
            if plan.num_slices > LARGE_SLICE_COUNT {
                tracing::warn!(
                    length = self.length,
                    h = self.h,
                    num_slices = plan.num_slices,
                    "auto-derived slice count is very large; consider setting num_multipole_kicks"
                );
            }
        }

        Ok(BendConfig {
            length: self.length,
            k0: self.k0,
            k1: self.k1,
            h: self.h,
            model: self.model,
            num_multipole_kicks: self.num_multipole_kicks,
            multipoles,
        })
    }
}

// ── BendSpec ───────────────────────────────────────────────────────

/// Model selector as written in an element description: a numeric id or
/// a model name.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ModelSelector {
    /// Numeric id, `0..=4`.
    Id(i64),
    /// Model name, e.g. `"bend-kick-bend"`.
    Name(String),
}

impl Default for ModelSelector {
    fn default() -> Self {
        Self::Id(0)
    }
}

impl ModelSelector {
    /// Resolve to a [`BendModel`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownModel`] or [`ConfigError::UnknownModelName`].
    pub fn resolve(&self) -> Result<BendModel, ConfigError> {
        match self {
            Self::Id(id) => BendModel::from_id(*id),
            Self::Name(name) => name.parse(),
        }
    }
}

/// Unvalidated bend element description, deserializable from any serde
/// format.
///
/// Every field except `length` is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BendSpec {
    /// Element length.
    pub length: f64,
    /// Dipole strength.
    #[serde(default)]
    pub k0: f64,
    /// Quadrupole strength.
    #[serde(default)]
    pub k1: f64,
    /// Reference-orbit curvature.
    #[serde(default)]
    pub h: f64,
    /// Tracking scheme, by id or name.
    #[serde(default)]
    pub model: ModelSelector,
    /// Kick count; zero means auto-derived.
    #[serde(default)]
    pub num_multipole_kicks: i64,
    /// Integrated normal multipole strengths.
    #[serde(default)]
    pub knl: Vec<f64>,
    /// Integrated skew multipole strengths.
    #[serde(default)]
    pub ksl: Vec<f64>,
}

impl TryFrom<BendSpec> for BendConfig {
    type Error = ConfigError;

    fn try_from(spec: BendSpec) -> Result<Self, Self::Error> {
        BendConfig::builder()
            .length(spec.length)
            .k0(spec.k0)
            .k1(spec.k1)
            .h(spec.h)
            .model(spec.model.resolve()?)
            .num_multipole_kicks(spec.num_multipole_kicks)
            .knl(spec.knl)
            .ksl(spec.ksl)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bendkit_core::MultipoleKind;

    // ---------------------------------------------------------------
    // Builder tests
    // ---------------------------------------------------------------

    #[test]
    fn builder_defaults() {
        let cfg = BendConfig::builder().length(1.0).build().unwrap();
        assert_eq!(cfg.length(), 1.0);
        assert_eq!(cfg.k0(), 0.0);
        assert_eq!(cfg.k1(), 0.0);
        assert_eq!(cfg.h(), 0.0);
        assert_eq!(cfg.model(), BendModel::Adaptive);
        assert_eq!(cfg.num_multipole_kicks(), 0);
        assert!(cfg.multipoles().is_zero());
    }

    #[test]
    fn builder_full() {
        let cfg = BendConfig::builder()
            .length(2.0)
            .k0(0.1)
            .k1(-0.02)
            .h(0.1)
            .model(BendModel::BendKickBend)
            .num_multipole_kicks(21)
            .knl([0.0, 0.0, 0.3])
            .ksl(vec![0.0, 0.01])
            .build()
            .unwrap();
        assert_eq!(cfg.model(), BendModel::BendKickBend);
        assert_eq!(cfg.num_multipole_kicks(), 21);
        assert_eq!(cfg.multipoles().order(), 2);
        assert_eq!(cfg.multipoles().ksl(), &[0.0, 0.01, 0.0]);
    }

    #[test]
    fn builder_rejects_nan_length() {
        let err = BendConfig::builder().length(f64::NAN).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonFinite {
                parameter: "length",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_infinite_strengths() {
        for (parameter, b) in [
            ("k0", BendConfig::builder().k0(f64::INFINITY)),
            ("k1", BendConfig::builder().k1(f64::NEG_INFINITY)),
            ("h", BendConfig::builder().h(f64::NAN)),
        ] {
            match b.length(1.0).build() {
                Err(ConfigError::NonFinite { parameter: p, .. }) => assert_eq!(p, parameter),
                other => panic!("expected NonFinite for {parameter}, got {other:?}"),
            }
        }
    }

    #[test]
    fn builder_rejects_negative_kick_count() {
        for model in BendModel::ALL {
            let err = BendConfig::builder()
                .length(1.0)
                .model(model)
                .num_multipole_kicks(-3)
                .build()
                .unwrap_err();
            assert_eq!(err, ConfigError::NegativeKickCount { value: -3 });
        }
    }

    #[test]
    fn builder_rejects_expanded_without_kicks() {
        let err = BendConfig::builder()
            .length(1.0)
            .model(BendModel::Expanded)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ExpandedWithoutKicks {
                num_multipole_kicks: 0
            }
        );
    }

    #[test]
    fn builder_rejects_bad_multipole() {
        let err = BendConfig::builder()
            .length(1.0)
            .ksl([0.0, f64::NAN])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonFiniteMultipole {
                kind: MultipoleKind::Skew,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn huge_auto_slice_count_still_builds() {
        let cfg = BendConfig::builder().length(100.0).h(10.0).build();
        assert!(cfg.is_ok());
    }

    // ---------------------------------------------------------------
    // BendSpec tests
    // ---------------------------------------------------------------

    #[test]
    fn bend_spec_model_by_id_and_name() {
        assert_eq!(ModelSelector::Id(2).resolve(), Ok(BendModel::BendKickBend));
        assert_eq!(
            ModelSelector::Name("expanded".into()).resolve(),
            Ok(BendModel::Expanded)
        );
        assert_eq!(
            ModelSelector::Id(7).resolve(),
            Err(ConfigError::UnknownModel { id: 7 })
        );
    }

    #[test]
    fn bend_spec_converts_to_config() {
        let spec = BendSpec {
            length: 3.0,
            h: 0.2,
            k0: 0.2,
            model: ModelSelector::Name("full".into()),
            knl: vec![0.0, 0.1],
            ..BendSpec::default()
        };
        let cfg = BendConfig::try_from(spec).unwrap();
        assert_eq!(cfg.model(), BendModel::Full);
        assert_eq!(cfg.multipoles().knl(), &[0.0, 0.1]);
    }

    #[test]
    fn bend_spec_unknown_model_is_rejected() {
        let spec = BendSpec {
            length: 1.0,
            model: ModelSelector::Id(5),
            ..BendSpec::default()
        };
        assert_eq!(
            BendConfig::try_from(spec),
            Err(ConfigError::UnknownModel { id: 5 })
        );
    }
}
