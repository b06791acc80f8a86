//! Held-key state for character movement.
//!
//! Platform key events are identified by their physical key code
//! (`"KeyW"`, `"Space"`, ...). Only the movement keys are tracked; anything
//! else is ignored without logging.

/// A key the character controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    A,
    D,
    Space,
}

impl Key {
    pub const ALL: [Key; 5] = [Key::W, Key::S, Key::A, Key::D, Key::Space];

    /// Maps a platform key code to a [`Key`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "KeyW" => Some(Key::W),
            "KeyS" => Some(Key::S),
            "KeyA" => Some(Key::A),
            "KeyD" => Some(Key::D),
            "Space" => Some(Key::Space),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Key::W => "KeyW",
            Key::S => "KeyS",
            Key::A => "KeyA",
            Key::D => "KeyD",
            Key::Space => "Space",
        }
    }

    /// W, A, S and D; Space is not a direction.
    #[must_use]
    pub fn is_directional(self) -> bool {
        !matches!(self, Key::Space)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// A key transition that passed the enable gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

#[derive(Default, Debug, Clone)]
pub struct InputState {
    held: [bool; 5],
    enabled: bool,
}

impl InputState {
    /// Starts disabled; control is handed over once the scene is ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disables control and releases every held key.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.held = [false; 5];
    }

    /// Records a key transition by platform code.
    ///
    /// Returns the resulting event, or `None` when the key is not tracked or
    /// input is disabled.
    pub fn apply(&mut self, code: &str, pressed: bool) -> Option<KeyEvent> {
        let key = Key::from_code(code)?;
        self.apply_key(key, pressed)
    }

    pub fn apply_key(&mut self, key: Key, pressed: bool) -> Option<KeyEvent> {
        if !self.enabled {
            return None;
        }
        self.held[key.slot()] = pressed;
        Some(if pressed { KeyEvent::Down(key) } else { KeyEvent::Up(key) })
    }

    #[must_use]
    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.slot()]
    }

    /// Whether any of W, A, S, D is held.
    #[must_use]
    pub fn any_directional(&self) -> bool {
        Key::ALL
            .into_iter()
            .filter(|k| k.is_directional())
            .any(|k| self.is_held(k))
    }

    /// `(forward, side)` in `{-1, 0, 1}`: W/S and D/A.
    #[must_use]
    pub fn axes(&self) -> (f32, f32) {
        let axis = |pos: Key, neg: Key| {
            f32::from(u8::from(self.is_held(pos))) - f32::from(u8::from(self.is_held(neg)))
        };
        (axis(Key::W, Key::S), axis(Key::D, Key::A))
    }
}
