//! Winit input adapter
//!
//! Translates winit keyboard events into the controller's key set.

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::app::input::Key;

/// Maps a winit physical key to a [`Key`]; untracked keys yield `None`.
#[must_use]
pub fn translate_key(physical_key: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::Space => Some(Key::Space),
        _ => None,
    }
}

/// `(key code, pressed)` for a winit key transition, skipping key repeats.
///
/// Takes the fields of `winit::event::KeyEvent` so window handlers can pass
/// `event.physical_key, event.state, event.repeat` straight through.
#[must_use]
pub fn translate_transition(
    physical_key: PhysicalKey,
    state: ElementState,
    repeat: bool,
) -> Option<(&'static str, bool)> {
    if repeat {
        return None;
    }
    let key = translate_key(physical_key)?;
    Some((key.code(), state == ElementState::Pressed))
}
