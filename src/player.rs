//! Character controller.
//!
//! Each frame the player integrates a per-frame displacement (damping,
//! gravity and input), moves its collision capsule, resolves a single
//! contact against the environment, drags the camera along and picks the
//! locomotion clip. One-shot gestures (`trigger_action`) suspend the
//! automatic clip selection until they finish or any key goes down.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::{Quat, Vec3};
use wayfarer_animation::MixerEvent;
use wayfarer_collision::{Capsule, CollisionResult, SpatialIndex};

use crate::animation::AnimationDriver;
use crate::app::input::{InputState, Key};
use crate::assets::AssetLoader;
use crate::config::PlayerConfig;
use crate::scene::Actor;
use crate::utils::OrbitControls;

pub const IDLE: &str = "idle";
pub const RUNNING: &str = "running";
pub const JUMP: &str = "jump";

/// Damping decay rate per second on the ground.
const GROUND_DAMPING_RATE: f32 = 4.0;
/// Airborne damping is this fraction of ground damping.
const AIR_DAMPING_SCALE: f32 = 0.1;

pub struct Player {
    config: PlayerConfig,
    character: Option<Actor>,
    capsule: Option<Capsule>,
    driver: AnimationDriver,

    velocity: Vec3,
    last_step_velocity: Vec3,
    last_contact: Option<CollisionResult>,
    grounded: bool,
    jumping: bool,

    current_action: String,
    force_action: Option<String>,
}

impl Player {
    #[must_use]
    pub fn new(config: PlayerConfig) -> Self {
        let driver = AnimationDriver::with_base_path(config.clip_base_path.clone());
        Self {
            config,
            character: None,
            capsule: None,
            driver,

            velocity: Vec3::ZERO,
            last_step_velocity: Vec3::ZERO,
            last_contact: None,
            grounded: false,
            jumping: false,

            current_action: IDLE.to_string(),
            force_action: None,
        }
    }

    /// Loads the character model and its clips, then attaches it.
    ///
    /// A failed model load is logged and leaves the player unloaded; failed
    /// clips only leave their names unregistered.
    pub async fn load<L: AssetLoader>(&mut self, loader: &L) -> bool {
        let path = self.config.model_path.clone();
        let mut actor = match loader.fetch_model(&path).await {
            Ok(actor) => actor,
            Err(err) => {
                log::error!("Character unavailable: {err}");
                return false;
            }
        };
        actor.set_scale(self.config.model_scale);

        let clips = self.config.clips.clone();
        self.driver.load(loader, &clips).await;

        log::info!("Character '{}' loaded", actor.name);
        self.attach(actor);
        true
    }

    /// Takes ownership of a loaded character, places it at the spawn point
    /// and starts idling.
    pub fn attach(&mut self, actor: Actor) {
        self.character = Some(actor);
        self.reset_body();

        self.force_action = None;
        self.current_action = IDLE.to_string();
        if let Some(character) = self.character.as_ref() {
            self.driver.play(&character.rig, &[IDLE], true);
        }
    }

    /// Puts capsule, character and camera back to their defaults.
    pub fn reset(&mut self, camera: &mut OrbitControls) {
        self.reset_body();

        let target = self
            .capsule
            .map_or(self.config.spawn_position, |capsule| capsule.end);
        camera.apply_limits(&self.config.camera);
        camera.set_position_and_target(self.config.camera.default_position, target);
    }

    fn reset_body(&mut self) {
        let capsule = self
            .config
            .capsule
            .to_capsule()
            .translated(self.config.spawn_position);

        if let Some(character) = self.character.as_mut() {
            character.transform.position = capsule.start + self.config.model_offset;
            character.transform.rotation = Quat::IDENTITY;
        }

        self.capsule = Some(capsule);
        self.velocity = Vec3::ZERO;
        self.last_step_velocity = Vec3::ZERO;
        self.last_contact = None;
        self.grounded = false;
        self.jumping = false;
    }

    /// Advances the controller by one frame.
    ///
    /// Does nothing until a character is attached.
    pub fn update<I>(&mut self, dt: f32, index: &I, input: &InputState, camera: &mut OrbitControls)
    where
        I: SpatialIndex + ?Sized,
    {
        if self.character.is_none() || self.capsule.is_none() {
            return;
        }

        self.apply_damping_and_gravity(dt);
        self.apply_input(dt, input, camera.azimuthal_angle());
        self.integrate();
        self.collide(index);
        self.follow_camera(camera);

        // Re-derived from input every frame.
        self.velocity = Vec3::ZERO;

        if self.force_action.is_none() {
            self.select_action(input);
        }
        self.advance_animation(dt);
    }

    fn apply_damping_and_gravity(&mut self, dt: f32) {
        let mut damping = (-GROUND_DAMPING_RATE * dt).exp() - 1.0;
        if !self.grounded {
            self.velocity.y -= self.config.gravity * dt;
            damping *= AIR_DAMPING_SCALE;
        }
        self.velocity += self.velocity * damping;
    }

    fn apply_input(&mut self, dt: f32, input: &InputState, azimuth: f32) {
        if !input.any_directional() {
            return;
        }

        let (forward, side) = input.axes();
        // Opposite keys cancel out; keep the current facing.
        if axis_sign(forward) == 0 && axis_sign(side) == 0 {
            return;
        }
        if let Some(character) = self.character.as_mut() {
            character
                .transform
                .set_rotation_y(azimuth + PI + facing_offset(forward, side));
        }

        let step = self.config.speed * dt;
        self.velocity.z -= step * forward;
        self.velocity.x += step * side;
        self.velocity = Quat::from_rotation_y(azimuth) * self.velocity;
    }

    fn integrate(&mut self) {
        self.last_step_velocity = self.velocity;
        if let Some(capsule) = self.capsule.as_mut() {
            capsule.translate(self.velocity);
        }
    }

    fn collide<I: SpatialIndex + ?Sized>(&mut self, index: &I) {
        let Some(capsule) = self.capsule.as_mut() else {
            return;
        };

        let contact = index.capsule_intersect(capsule);
        self.grounded = false;

        if let Some(hit) = contact {
            self.grounded = hit.normal.y >= 0.0;
            if self.grounded {
                self.jumping = false;
            } else {
                self.velocity -= hit.normal * hit.normal.dot(self.velocity);
            }
            capsule.translate(hit.normal * hit.depth);
        }

        self.last_contact = contact;
    }

    fn follow_camera(&mut self, camera: &mut OrbitControls) {
        let (Some(character), Some(capsule)) = (self.character.as_mut(), self.capsule.as_ref())
        else {
            return;
        };

        let offset = camera.position() - character.transform.position;
        character.transform.position = capsule.start + self.config.model_offset;
        camera.set_position_and_target(character.transform.position + offset, capsule.end);
    }

    fn select_action(&mut self, input: &InputState) {
        let next = if self.jumping {
            JUMP
        } else if input.any_directional() {
            RUNNING
        } else {
            IDLE
        };

        if self.current_action != next {
            log::debug!("Player action {} -> {next}", self.current_action);
            if let Some(character) = self.character.as_ref() {
                self.driver.play(&character.rig, &[next], true);
            }
            self.current_action = next.to_string();
        }
    }

    fn advance_animation(&mut self, dt: f32) {
        let Some(character) = self.character.as_mut() else {
            return;
        };

        for event in self.driver.advance(dt, &mut character.rig) {
            let MixerEvent::Finished { clip, .. } = event;
            if self.force_action.as_deref() == Some(clip.as_str()) {
                log::debug!("Forced action '{clip}' finished");
                self.force_action = None;
                self.current_action = IDLE.to_string();
                self.driver.play(&character.rig, &[IDLE], true);
            }
        }
    }

    /// Key pressed while control is enabled.
    ///
    /// Any key cancels a forced action; Space jumps when grounded.
    pub fn on_key_down(&mut self, key: Key) {
        if let Some(action) = self.force_action.take() {
            log::debug!("Forced action '{action}' interrupted by {key:?}");
        }

        if key == Key::Space && self.grounded {
            self.jumping = true;
            self.velocity.y = self.config.jump_height;
        }
    }

    /// Key released while control is enabled. Held-key state lives in
    /// [`InputState`]; releasing a key changes nothing here.
    pub fn on_key_up(&mut self, _key: Key) {}

    /// Plays `name` once, suspending automatic clip selection until it
    /// finishes or a key goes down.
    pub fn trigger_action(&mut self, name: &str) {
        self.current_action = name.to_string();
        self.force_action = Some(name.to_string());
        if let Some(character) = self.character.as_ref() {
            self.driver.play(&character.rig, &[name], false);
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.character.is_some()
    }

    #[must_use]
    pub fn current_action(&self) -> &str {
        &self.current_action
    }

    #[must_use]
    pub fn force_action(&self) -> Option<&str> {
        self.force_action.as_deref()
    }

    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[must_use]
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    /// Pending displacement; zero between frames except right after a jump.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Displacement the capsule was moved by in the last update, before
    /// collision response.
    #[must_use]
    pub fn last_step_velocity(&self) -> Vec3 {
        self.last_step_velocity
    }

    #[must_use]
    pub fn last_contact(&self) -> Option<CollisionResult> {
        self.last_contact
    }

    #[must_use]
    pub fn capsule(&self) -> Option<&Capsule> {
        self.capsule.as_ref()
    }

    #[must_use]
    pub fn character(&self) -> Option<&Actor> {
        self.character.as_ref()
    }

    pub fn character_mut(&mut self) -> Option<&mut Actor> {
        self.character.as_mut()
    }

    #[must_use]
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut AnimationDriver {
        &mut self.driver
    }

    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}

/// Turn relative to the camera's forward so the character faces where it
/// travels; backwards faces away instead of moonwalking.
fn facing_offset(forward: f32, side: f32) -> f32 {
    match (axis_sign(forward), axis_sign(side)) {
        (1, -1) => FRAC_PI_4,
        (1, 1) => -FRAC_PI_4,
        (-1, 0) => PI,
        (-1, -1) => 3.0 * FRAC_PI_4,
        (-1, 1) => -3.0 * FRAC_PI_4,
        (0, -1) => FRAC_PI_2,
        (0, 1) => -FRAC_PI_2,
        _ => 0.0,
    }
}

fn axis_sign(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
