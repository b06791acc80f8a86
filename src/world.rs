//! Frame orchestration.
//!
//! The world owns the environment, the player, the held-key state and the
//! render context. Input arrives either through direct method calls or
//! through [`InputHandle`]s; queued commands are applied at the start of
//! [`World::update`], so all state changes happen on the frame path.

use wayfarer_collision::SpatialIndex;

use crate::app::input::{InputState, KeyEvent};
use crate::app::{InputHandle, WorldCommand, WorldEvent};
use crate::assets::{AssetLoader, ProgressLoader};
use crate::config::WorldConfig;
use crate::player::Player;
use crate::render::RenderContext;
use crate::scene::{Environment, StaticEnvironment};
use crate::utils::FrameClock;

pub struct World<E: Environment = StaticEnvironment> {
    environment: E,
    player: Player,
    input: InputState,
    render: RenderContext,
    clock: FrameClock,

    sender: flume::Sender<WorldCommand>,
    commands: flume::Receiver<WorldCommand>,

    event_sender: flume::Sender<WorldEvent>,
    events: flume::Receiver<WorldEvent>,
}

impl World<StaticEnvironment> {
    #[must_use]
    pub fn new(config: WorldConfig, render: RenderContext) -> Self {
        let environment = StaticEnvironment::new(config.environment.clone());
        Self::with_environment(config, environment, render)
    }

    /// Loads the environment and the character, then resets the camera.
    ///
    /// Returns whether both loaded. Either may fail independently; failures
    /// are logged and the world keeps running without them. Every asset
    /// request is reported on [`World::events`], followed by a final
    /// [`WorldEvent::Loaded`].
    pub async fn load<L: AssetLoader>(&mut self, loader: &L) -> bool {
        let loader = ProgressLoader::new(loader, self.event_sender.clone());
        let environment = self.environment.load(&loader).await;
        let player = self.player.load(&loader).await;
        self.player.reset(&mut self.render.camera);

        log::info!(
            "World loaded ({}/{} assets): environment={environment} player={player}",
            loader.finished(),
            loader.requested()
        );
        if self
            .event_sender
            .send(WorldEvent::Loaded { environment, player })
            .is_err()
        {
            log::debug!("No listener for world events");
        }
        environment && player
    }
}

impl<E: Environment> World<E> {
    pub fn with_environment(config: WorldConfig, environment: E, render: RenderContext) -> Self {
        let (sender, commands) = flume::unbounded();
        let (event_sender, events) = flume::unbounded();
        let mut world = Self {
            environment,
            player: Player::new(config.player),
            input: InputState::new(),
            render,
            clock: FrameClock::new(config.max_frame_delta),
            sender,
            commands,
            event_sender,
            events,
        };
        world.player.reset(&mut world.render.camera);
        world
    }

    /// A cloneable handle for code outside the frame loop.
    #[must_use]
    pub fn input_handle(&self) -> InputHandle {
        InputHandle::new(self.sender.clone())
    }

    /// Receiving side of the world's event queue. Clones share the queue,
    /// so each event goes to whichever receiver takes it first.
    #[must_use]
    pub fn events(&self) -> flume::Receiver<WorldEvent> {
        self.events.clone()
    }

    /// Measures the time since the previous frame and updates with it,
    /// clamped to the configured maximum.
    pub fn frame(&mut self) -> f32 {
        self.clock.tick();
        let dt = self.clock.dt_seconds();
        self.update(dt);
        dt
    }

    /// Advances one frame by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.drain_commands();

        self.environment.update(dt);

        // Colliding against a half-built or empty index would drop the character through the floor.
        if self.environment.is_loaded()
            && let Some(index) = self.environment.spatial_index()
            && !index.is_empty()
        {
            self.player
                .update(dt, index, &self.input, &mut self.render.camera);
        }

        self.render.camera.update(dt);
    }

    fn drain_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: WorldCommand) {
        match command {
            WorldCommand::Key { code, pressed } => {
                if pressed {
                    self.key_down(&code);
                } else {
                    self.key_up(&code);
                }
            }
            WorldCommand::ForceAction(name) => self.trigger_action(&name),
            WorldCommand::SetControlEnabled(enabled) => self.set_control_enabled(enabled),
            WorldCommand::Reset => self.reset(),
        }
    }

    pub fn key_down(&mut self, code: &str) {
        if let Some(KeyEvent::Down(key)) = self.input.apply(code, true) {
            self.player.on_key_down(key);
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(KeyEvent::Up(key)) = self.input.apply(code, false) {
            self.player.on_key_up(key);
        }
    }

    pub fn trigger_action(&mut self, name: &str) {
        self.player.trigger_action(name);
    }

    pub fn set_control_enabled(&mut self, enabled: bool) {
        if enabled {
            self.input.enable();
        } else {
            self.input.disable();
        }
        log::debug!("Control {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn reset(&mut self) {
        self.player.reset(&mut self.render.camera);
    }

    #[must_use]
    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.environment
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn render(&self) -> &RenderContext {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut RenderContext {
        &mut self.render
    }
}
