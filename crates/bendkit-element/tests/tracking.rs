//! End-to-end tracking properties with the paraxial reference maps.

use bendkit_core::{Particle, PhaseSpace, TrackDirection};
use bendkit_element::{BendConfig, BendModel, BendTracker};
use bendkit_maps::paraxial_bend_drift;
use bendkit_test_utils::fixtures::{
    apply2, gaussian_bunch, jacobian, max_relative_deviation, sector_bend_matrix,
    symplectic_defect, State4,
};
use bendkit_test_utils::{MapCall, RecordingMaps};
use proptest::prelude::*;

fn skewed_bend(model: BendModel) -> BendConfig {
    let kicks = if model == BendModel::Expanded { 40 } else { 0 };
    BendConfig::builder()
        .length(1.5)
        .k0(0.2)
        .k1(0.05)
        .h(0.2)
        .model(model)
        .num_multipole_kicks(kicks)
        .knl([0.0, 0.01, 0.3, 2.0])
        .ksl([0.0, 0.0, 0.1])
        .build()
        .unwrap()
}

fn track_state(tracker: &BendTracker, s: State4) -> State4 {
    let mut p = [Particle::new(s[0], s[1], s[2], s[3])];
    tracker.track(&mut p, TrackDirection::Forward);
    p[0].transverse()
}

// ---------------------------------------------------------------
// Field-free reduction
// ---------------------------------------------------------------

#[test]
fn field_free_element_is_a_pure_drift() {
    for model in BendModel::ALL {
        let kicks = if model == BendModel::Expanded { 5 } else { 0 };
        let cfg = BendConfig::builder()
            .length(2.0)
            .model(model)
            .num_multipole_kicks(kicks)
            .build()
            .unwrap();
        let tracker = BendTracker::new(cfg);
        let mut p = [Particle::new(1e-3, 2e-4, -5e-4, 1e-4)];
        tracker.track(&mut p, TrackDirection::Forward);
        let [x, px, y, py] = p[0].transverse();
        assert!((x - 1.4e-3).abs() < 1e-15, "{model}: x = {x}");
        assert!((y + 3e-4).abs() < 1e-15, "{model}: y = {y}");
        assert_eq!(px, 2e-4, "{model}");
        assert_eq!(py, 1e-4, "{model}");
    }
}

// ---------------------------------------------------------------
// Shortcut
// ---------------------------------------------------------------

#[test]
fn shortcut_is_bit_identical_to_a_direct_drift() {
    let cfg = BendConfig::builder()
        .length(2.0)
        .k0(0.1)
        .h(0.1)
        .model(BendModel::BendKickBend)
        .build()
        .unwrap();
    let tracker = BendTracker::new(cfg);

    let mut tracked = gaussian_bunch(32, [1e-3, 1e-4, 1e-3, 1e-4], 11);
    let mut direct = tracked.clone();
    tracker.track(&mut tracked, TrackDirection::Forward);
    for p in &mut direct {
        paraxial_bend_drift(p, 2.0, 0.1, 0.1);
    }
    assert_eq!(tracked, direct);
}

#[test]
fn backward_shortcut_uses_negated_length() {
    let cfg = BendConfig::builder()
        .length(2.0)
        .k0(0.1)
        .h(0.1)
        .model(BendModel::BendKickBend)
        .build()
        .unwrap();
    let tracker = BendTracker::with_maps(cfg, RecordingMaps::new());
    let mut p = [Particle::default()];
    tracker.track(&mut p, TrackDirection::Backward);
    assert_eq!(
        tracker.maps().calls(),
        vec![MapCall::BendDrift {
            length: -2.0,
            k0: 0.1,
            h: 0.1
        }]
    );
}

// ---------------------------------------------------------------
// Expanded slicing
// ---------------------------------------------------------------

#[test]
fn expanded_alternates_four_drifts_and_three_kicks() {
    let cfg = BendConfig::builder()
        .length(6.0)
        .k0(0.05)
        .k1(0.01)
        .h(0.05)
        .model(BendModel::Expanded)
        .num_multipole_kicks(3)
        .build()
        .unwrap();
    let tracker = BendTracker::with_maps(cfg, RecordingMaps::new());
    let mut p = [Particle::default()];
    tracker.track(&mut p, TrackDirection::Forward);

    let calls = tracker.maps().calls();
    assert_eq!(calls.len(), 7);
    for (i, call) in calls.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(
                *call,
                MapCall::CombinedFunctionDrift {
                    length: 1.5,
                    k0: 0.05,
                    k1: 0.01,
                    h: 0.05
                }
            );
        } else {
            assert_eq!(call.weight(), Some(1.0 / 3.0));
        }
    }
}

// ---------------------------------------------------------------
// Accuracy
// ---------------------------------------------------------------

fn sector_error(num_multipole_kicks: i64) -> f64 {
    let (h, length) = (1.0, 2.0);
    let cfg = BendConfig::builder()
        .length(length)
        .k0(h)
        .h(h)
        .num_multipole_kicks(num_multipole_kicks)
        .build()
        .unwrap();
    let tracker = BendTracker::new(cfg);
    let (x0, px0) = (1e-3, 2e-4);
    let mut p = [Particle::new(x0, px0, 0.0, 0.0)];
    tracker.track(&mut p, TrackDirection::Forward);
    let (x, px) = apply2(sector_bend_matrix(h, length), x0, px0);
    (p[0].x - x).abs().max((p[0].px - px).abs())
}

#[test]
fn pure_dipole_converges_at_high_order() {
    // 21, 49, 105 kicks give 4, 8, 16 slices.
    let errors: Vec<f64> = [21, 49, 105].into_iter().map(sector_error).collect();
    for pair in errors.windows(2) {
        let order = (pair[0] / pair[1]).log2();
        assert!(order > 4.0, "observed order {order}, errors {errors:?}");
    }
    assert!(errors[2] < 1e-7, "errors {errors:?}");
}

// ---------------------------------------------------------------
// Structure
// ---------------------------------------------------------------

#[test]
fn every_model_is_symplectic() {
    let point = [2e-3, -1e-4, 1e-3, 3e-4];
    for model in BendModel::ALL {
        let tracker = BendTracker::new(skewed_bend(model));
        let jac = jacobian(|s| track_state(&tracker, s), point, 1e-7);
        let defect = symplectic_defect(&jac);
        assert!(defect < 1e-6, "{model}: defect {defect}");
    }
}

#[test]
fn batch_matches_particle_by_particle() {
    let tracker = BendTracker::new(skewed_bend(BendModel::Full));
    let mut bunch = gaussian_bunch(256, [1e-3, 1e-4, 1e-3, 1e-4], 3);
    let mut single = bunch.clone();

    tracker.track(&mut bunch, TrackDirection::Forward);
    let plan = tracker.plan(TrackDirection::Forward);
    for p in &mut single {
        tracker.track_particle(p, &plan);
    }
    assert_eq!(bunch, single);
}

#[test]
fn longitudinal_coordinates_are_untouched() {
    let tracker = BendTracker::new(skewed_bend(BendModel::RotKickRot));
    let mut p = [Particle {
        zeta: 0.25,
        ..Particle::new(1e-3, 0.0, 0.0, 0.0).with_delta(1e-3)
    }];
    tracker.track(&mut p, TrackDirection::Forward);
    assert_eq!(p[0].zeta, 0.25);
    assert_eq!(p[0].delta(), 1e-3);
}

// ---------------------------------------------------------------
// Reversibility
// ---------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn forward_then_backward_is_identity(
        model_id in 0i64..5,
        x in -5e-3f64..5e-3,
        px in -5e-4f64..5e-4,
        y in -5e-3f64..5e-3,
        py in -5e-4f64..5e-4,
    ) {
        let model = BendModel::from_id(model_id).unwrap();
        let tracker = BendTracker::new(skewed_bend(model));
        let start = Particle::new(x, px, y, py);
        let mut p = [start];
        tracker.track(&mut p, TrackDirection::Forward);
        tracker.track(&mut p, TrackDirection::Backward);
        let dev = max_relative_deviation(p[0].transverse(), start.transverse(), 1e-6);
        prop_assert!(dev < 1e-9, "{}: deviation {}", model, dev);
    }
}
