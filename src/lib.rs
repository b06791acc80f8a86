//! Wayfarer
//!
//! Third-person character controller for a static 3D scene: a capsule that
//! walks, jumps and slides against the scene's triangles, an orbit camera
//! that follows it and a small animation state machine choosing between
//! idle, running, jump and one-shot gestures.
//!
//! Rendering, windowing and asset decoding stay with the host. The host
//! drives one [`World::update`] per frame and feeds key events through
//! [`World::key_down`] / [`World::key_up`] or an [`InputHandle`].

pub mod animation;
pub mod app;
pub mod assets;
pub mod config;
pub mod errors;
pub mod player;
pub mod render;
pub mod scene;
pub mod utils;
pub mod world;

pub use animation::{AnimationClip, AnimationDriver, AnimationMixer, LoopMode, MixerEvent, Rig};
pub use app::{InputHandle, InputState, Key, KeyEvent, WorldCommand, WorldEvent};
pub use assets::{AssetLoader, MemoryLoader, ProgressLoader};
pub use config::{CameraConfig, CapsuleConfig, EnvironmentConfig, PlayerConfig, WorldConfig};
pub use errors::{Error, Result};
pub use player::Player;
pub use render::RenderContext;
pub use scene::{Actor, CollisionMesh, Environment, StaticEnvironment};
pub use utils::{FrameClock, OrbitControls};
pub use world::World;

pub use wayfarer_collision::{Capsule, CollisionResult, Octree, SpatialIndex, Triangle};
pub use wayfarer_core::Transform;
