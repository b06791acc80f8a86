//! Input Tests
//!
//! Tests for:
//! - Platform key codes
//! - Enable gate and held-key bookkeeping
//! - Movement axes

use wayfarer::{InputState, Key, KeyEvent};

// ============================================================================
// Key Codes
// ============================================================================

#[test]
fn key_codes_round_trip() {
    for key in Key::ALL {
        assert_eq!(Key::from_code(key.code()), Some(key));
    }
}

#[test]
fn unknown_codes_are_not_keys() {
    for code in ["KeyQ", "keyw", "ArrowUp", "", "Space "] {
        assert_eq!(Key::from_code(code), None, "{code:?}");
    }
}

#[test]
fn space_is_not_directional() {
    assert!(!Key::Space.is_directional());
    assert!(Key::ALL.iter().filter(|k| k.is_directional()).count() == 4);
}

// ============================================================================
// Enable Gate
// ============================================================================

#[test]
fn input_starts_disabled() {
    let mut input = InputState::new();
    assert!(!input.is_enabled());
    assert_eq!(input.apply("KeyW", true), None);
    assert!(!input.is_held(Key::W));
}

#[test]
fn enabled_input_reports_transitions() {
    let mut input = InputState::new();
    input.enable();

    assert_eq!(input.apply("KeyW", true), Some(KeyEvent::Down(Key::W)));
    assert!(input.is_held(Key::W));
    assert_eq!(input.apply("KeyW", false), Some(KeyEvent::Up(Key::W)));
    assert!(!input.is_held(Key::W));
}

#[test]
fn unknown_code_is_ignored_when_enabled() {
    let mut input = InputState::new();
    input.enable();
    assert_eq!(input.apply("KeyE", true), None);
    assert!(!input.any_directional());
}

#[test]
fn disable_releases_everything() {
    let mut input = InputState::new();
    input.enable();
    input.apply("KeyA", true);
    input.apply("Space", true);

    input.disable();
    assert!(Key::ALL.iter().all(|&k| !input.is_held(k)));

    input.enable();
    assert!(!input.is_held(Key::A), "re-enabling does not restore keys");
}

// ============================================================================
// Axes
// ============================================================================

#[test]
fn axes_follow_held_keys() {
    let mut input = InputState::new();
    input.enable();
    assert_eq!(input.axes(), (0.0, 0.0));

    input.apply_key(Key::W, true);
    input.apply_key(Key::D, true);
    assert_eq!(input.axes(), (1.0, 1.0));

    input.apply_key(Key::W, false);
    input.apply_key(Key::S, true);
    input.apply_key(Key::A, true);
    assert_eq!(input.axes(), (-1.0, 0.0));
}

#[test]
fn space_alone_is_not_movement() {
    let mut input = InputState::new();
    input.enable();
    input.apply_key(Key::Space, true);
    assert!(!input.any_directional());
    assert!(input.is_held(Key::Space));
}

#[cfg(feature = "winit")]
#[test]
fn winit_physical_keys_translate() {
    use wayfarer::app::input_adapter::translate_key;
    use winit::keyboard::{KeyCode, PhysicalKey};

    assert_eq!(translate_key(PhysicalKey::Code(KeyCode::KeyW)), Some(Key::W));
    assert_eq!(translate_key(PhysicalKey::Code(KeyCode::Space)), Some(Key::Space));
    assert_eq!(translate_key(PhysicalKey::Code(KeyCode::KeyQ)), None);
}

#[cfg(feature = "winit")]
#[test]
fn winit_transitions_become_key_codes() {
    use wayfarer::app::input_adapter::translate_transition;
    use winit::event::ElementState;
    use winit::keyboard::{KeyCode, PhysicalKey};

    let w = PhysicalKey::Code(KeyCode::KeyW);
    assert_eq!(translate_transition(w, ElementState::Pressed, false), Some(("KeyW", true)));
    assert_eq!(translate_transition(w, ElementState::Released, false), Some(("KeyW", false)));
    assert_eq!(translate_transition(w, ElementState::Pressed, true), None);
    assert_eq!(
        translate_transition(PhysicalKey::Code(KeyCode::Escape), ElementState::Pressed, false),
        None
    );

    let mut input = InputState::new();
    input.enable();
    let (code, pressed) = translate_transition(w, ElementState::Pressed, false).unwrap();
    assert_eq!(input.apply(code, pressed), Some(KeyEvent::Down(Key::W)));
}
