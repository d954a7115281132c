use super::*;

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
    assert_eq!(Button::from_dom(3), Button::Other);
    assert_eq!(Button::from_dom(-1), Button::Other);
}

// =============================================================
// WheelDelta
// =============================================================

#[test]
fn wheel_delta_default_is_zero() {
    let d = WheelDelta::default();
    assert!(d.dx.abs() < f64::EPSILON);
    assert!(d.dy.abs() < f64::EPSILON);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::default().is_panning());
}

#[test]
fn idle_has_no_anchor() {
    assert_eq!(InputState::Idle.anchor(), None);
}

#[test]
fn panning_exposes_anchor() {
    let state = InputState::Panning { anchor: Point::new(3.0, 4.0) };
    assert!(state.is_panning());
    assert_eq!(state.anchor(), Some(Point::new(3.0, 4.0)));
}
