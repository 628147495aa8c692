#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use yare::parameterized;

fn swipe(recognizer: &mut GestureRecognizer, from: f64, to: f64) -> GestureEvent {
    recognizer.start(from);
    recognizer.update(to);
    recognizer.end().unwrap()
}

#[test]
fn test_start_emits_drag_started() {
    let mut g = GestureRecognizer::default();
    assert_eq!(g.start(120.0), GestureEvent::DragStarted { origin: 120.0 });
    assert!(g.is_active());
    assert_eq!(g.delta(), 0.0);
}

#[test]
fn test_update_reports_delta_from_origin() {
    let mut g = GestureRecognizer::default();
    g.start(200.0);
    assert_eq!(
        g.update(170.0),
        Some(GestureEvent::DragProgress {
            delta: -30.0,
            offset: -30.0
        })
    );
    assert_eq!(g.delta(), -30.0);
}

#[parameterized(
    just_under_left = { -49.0 },
    just_under_right = { 49.0 },
    exactly_threshold_left = { -50.0 },
    exactly_threshold_right = { 50.0 },
    no_movement = { 0.0 },
)]
fn test_short_drags_snap_back(delta: f64) {
    let mut g = GestureRecognizer::default();
    assert_eq!(
        swipe(&mut g, 300.0, 300.0 + delta),
        GestureEvent::SnapBack { delta }
    );
}

#[parameterized(
    just_over = { -51.0 },
    long = { -240.0 },
)]
fn test_left_swipes_advance(delta: f64) {
    let mut g = GestureRecognizer::default();
    assert_eq!(
        swipe(&mut g, 300.0, 300.0 + delta),
        GestureEvent::Advance { delta }
    );
}

#[parameterized(
    just_over = { 51.0 },
    long = { 240.0 },
)]
fn test_right_swipes_retreat(delta: f64) {
    let mut g = GestureRecognizer::default();
    assert_eq!(
        swipe(&mut g, 300.0, 300.0 + delta),
        GestureEvent::Retreat { delta }
    );
}

#[test]
fn test_custom_threshold() {
    let mut g = GestureRecognizer::new(20.0, 0.5);
    assert_eq!(
        swipe(&mut g, 0.0, -21.0),
        GestureEvent::Advance { delta: -21.0 }
    );
    assert_eq!(
        swipe(&mut g, 0.0, 19.0),
        GestureEvent::SnapBack { delta: 19.0 }
    );
}

#[test]
fn test_end_without_start_is_ignored() {
    let mut g = GestureRecognizer::default();
    assert_eq!(g.end(), None);
    assert_eq!(g.update(40.0), None);
    assert_eq!(g.cancel(), None);
}

#[test]
fn test_end_clears_drag() {
    let mut g = GestureRecognizer::default();
    swipe(&mut g, 0.0, -80.0);
    assert!(!g.is_active());
    assert_eq!(g.delta(), 0.0);
    assert_eq!(g.end(), None);
}

#[test]
fn test_cancel_snaps_back_even_past_threshold() {
    let mut g = GestureRecognizer::default();
    g.start(0.0);
    g.update(-200.0);
    assert_eq!(g.cancel(), Some(GestureEvent::SnapBack { delta: -200.0 }));
    assert!(!g.is_active());
}

#[test]
fn test_restart_uses_new_origin() {
    let mut g = GestureRecognizer::default();
    g.start(0.0);
    g.update(-200.0);
    g.start(500.0);
    g.update(480.0);
    assert_eq!(g.end(), Some(GestureEvent::SnapBack { delta: -20.0 }));
}

#[test]
fn test_reset_discards_drag() {
    let mut g = GestureRecognizer::default();
    g.start(0.0);
    g.update(90.0);
    g.reset();
    assert!(!g.is_active());
    assert_eq!(g.end(), None);
}

#[parameterized(
    inside = { 30.0, 30.0 },
    at_threshold = { -50.0, -50.0 },
    beyond_right = { 150.0, 100.0 },
    beyond_left = { -90.0, -70.0 },
)]
fn test_follow_offset_damping(delta: f64, expected: f64) {
    let g = GestureRecognizer::default();
    assert_eq!(g.follow_offset(delta), expected);
}

#[test]
fn test_decision_mapping() {
    assert_eq!(
        GestureEvent::Advance { delta: -60.0 }.decision(),
        Some(SwipeDecision::Advance)
    );
    assert_eq!(
        GestureEvent::Retreat { delta: 60.0 }.decision(),
        Some(SwipeDecision::Retreat)
    );
    assert_eq!(
        GestureEvent::SnapBack { delta: 0.0 }.decision(),
        Some(SwipeDecision::SnapBack)
    );
    assert_eq!(GestureEvent::DragStarted { origin: 0.0 }.decision(), None);
}

proptest! {
    #[test]
    fn offset_never_exceeds_delta(delta in -2000.0f64..2000.0) {
        let g = GestureRecognizer::default();
        let offset = g.follow_offset(delta);
        prop_assert!(offset.abs() <= delta.abs());
        prop_assert!(offset == 0.0 || offset.signum() == delta.signum());
    }

    #[test]
    fn decision_matches_threshold(delta in -500.0f64..500.0) {
        let mut g = GestureRecognizer::default();
        let event = swipe(&mut g, 1000.0, 1000.0 + delta);
        let moved = (1000.0 + delta) - 1000.0;
        let expected = if moved.abs() > DEFAULT_SWIPE_THRESHOLD_PX {
            if moved < 0.0 { SwipeDecision::Advance } else { SwipeDecision::Retreat }
        } else {
            SwipeDecision::SnapBack
        };
        prop_assert_eq!(event.decision(), Some(expected));
    }
}
