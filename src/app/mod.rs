//! Input plumbing between the host and the world.
//!
//! External collaborators (window event handlers, UI buttons) do not touch
//! controller state directly. They push [`WorldCommand`]s through a cloneable
//! [`InputHandle`]; [`crate::world::World::update`] drains the queue once per
//! frame, on the frame-update path. Going the other way, the world reports
//! [`WorldEvent`]s such as load progress on a second queue.

pub mod input;
#[cfg(feature = "winit")]
pub mod input_adapter;

pub use input::{InputState, Key, KeyEvent};

/// A request queued for the next frame.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldCommand {
    /// Physical key transition, by platform code (`"KeyW"`, `"Space"`, ...).
    Key { code: String, pressed: bool },
    /// Play a one-shot gesture that overrides locomotion animation.
    ForceAction(String),
    /// Turn keyboard control on or off.
    SetControlEnabled(bool),
    /// Put the character and camera back at the spawn point.
    Reset,
}

/// Something the world reports back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldEvent {
    /// An asset request finished, successfully or not. `total` counts the
    /// requests started so far, so it can grow while a load is running.
    LoadProgress {
        path: String,
        loaded: usize,
        total: usize,
    },
    /// An asset request failed; a `LoadProgress` for the same path follows.
    LoadFailed { path: String, reason: String },
    /// [`crate::world::World::load`] finished.
    Loaded { environment: bool, player: bool },
}

/// Sending side of the world's command queue.
#[derive(Debug, Clone)]
pub struct InputHandle {
    sender: flume::Sender<WorldCommand>,
}

impl InputHandle {
    pub(crate) fn new(sender: flume::Sender<WorldCommand>) -> Self {
        Self { sender }
    }

    pub fn key_down(&self, code: impl Into<String>) {
        self.send(WorldCommand::Key {
            code: code.into(),
            pressed: true,
        });
    }

    pub fn key_up(&self, code: impl Into<String>) {
        self.send(WorldCommand::Key {
            code: code.into(),
            pressed: false,
        });
    }

    pub fn trigger_action(&self, name: impl Into<String>) {
        self.send(WorldCommand::ForceAction(name.into()));
    }

    pub fn set_control_enabled(&self, enabled: bool) {
        self.send(WorldCommand::SetControlEnabled(enabled));
    }

    pub fn reset(&self) {
        self.send(WorldCommand::Reset);
    }

    pub fn send(&self, command: WorldCommand) {
        // The world owns the receiver; once it is gone there is nobody to tell.
        if self.sender.send(command).is_err() {
            log::debug!("World dropped, input command discarded");
        }
    }
}
