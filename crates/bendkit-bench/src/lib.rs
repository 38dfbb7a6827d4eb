//! Benchmark profiles for bendkit.
//!
//! Provides pre-built [`BendConfig`] profiles:
//!
//! - [`arc_dipole_profile`]: long gentle arc dipole, auto-derived slicing
//! - [`combined_function_profile`]: strong combined-function magnet with
//!   sextupole and octupole content, fixed kick count
//! - [`expanded_profile`]: same magnet tracked with the expanded scheme

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bendkit_element::{BendConfig, BendConfigBuilder, BendModel};

/// Transverse RMS sizes `[σx, σpx, σy, σpy]` used for benchmark bunches.
pub const BUNCH_SIGMA: [f64; 4] = [1e-3, 1e-4, 1e-3, 1e-4];

/// 14.3 m arc dipole bending by 2π/1232, tracked with the adaptive model.
///
/// Auto-derived slicing gives 8 kicks, 2 slices.
pub fn arc_dipole_profile() -> BendConfig {
    let length = 14.3;
    let angle = 2.0 * std::f64::consts::PI / 1232.0;
    let h = angle / length;
    build(
        BendConfig::builder()
            .length(length)
            .k0(h)
            .h(h)
            .model(BendModel::Adaptive),
    )
}

/// 2 m combined-function magnet with multipoles, 70 kicks (11 slices).
pub fn combined_function_profile() -> BendConfig {
    build(combined_function(BendModel::Full, 70))
}

/// [`combined_function_profile`] tracked with the expanded scheme.
pub fn expanded_profile() -> BendConfig {
    build(combined_function(BendModel::Expanded, 70))
}

fn combined_function(model: BendModel, kicks: i64) -> BendConfigBuilder {
    BendConfig::builder()
        .length(2.0)
        .k0(0.1)
        .k1(0.05)
        .h(0.1)
        .model(model)
        .num_multipole_kicks(kicks)
        .knl([0.0, 0.0, 0.4, 3.0])
        .ksl([0.0, 0.0, 0.02])
}

fn build(builder: BendConfigBuilder) -> BendConfig {
    match builder.build() {
        Ok(cfg) => cfg,
        Err(e) => panic!("benchmark profile is invalid: {e}"),
    }
}
