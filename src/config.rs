//! Configuration
//!
//! Explicit, serde-loadable settings for the player, the environment and the
//! world loop. Every field has a documented default, so a partial JSON file
//! only needs the values it changes:
//!
//! ```rust,ignore
//! let config = WorldConfig::from_json_str(r#"{ "player": { "speed": 4.0 } }"#)?;
//! assert_eq!(config.player.gravity, 9.8);
//! ```

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use wayfarer_collision::Capsule;

use crate::errors::Result;

/// Canonical collision capsule, relative to the spawn position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleConfig {
    /// Lower end of the capsule axis. Default `(0, 0.35, 0)`.
    pub start: Vec3,
    /// Upper end of the capsule axis. Default `(0, 1.35, 0)`.
    pub end: Vec3,
    /// Default `0.35`.
    pub radius: f32,
}

impl Default for CapsuleConfig {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, 0.35, 0.0),
            end: Vec3::new(0.0, 1.35, 0.0),
            radius: 0.35,
        }
    }
}

impl CapsuleConfig {
    #[must_use]
    pub fn to_capsule(&self) -> Capsule {
        Capsule::new(self.start, self.end, self.radius)
    }
}

/// Follow-camera defaults and orbit limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position after a reset. Default `(0, 3, -5)`.
    pub default_position: Vec3,
    /// Closest orbit distance. Default `2.0`.
    pub min_distance: f32,
    /// Farthest orbit distance. Default `8.0`.
    pub max_distance: f32,
    /// Smallest polar angle (from straight above). Default `0.35`.
    pub min_polar: f32,
    /// Largest polar angle; keeps the camera above the shoulder line.
    /// Default `π/2 - 0.05`.
    pub max_polar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_position: Vec3::new(0.0, 3.0, -5.0),
            min_distance: 2.0,
            max_distance: 8.0,
            min_polar: 0.35,
            max_polar: FRAC_PI_2 - 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal displacement per second of held input. Default `6.0`.
    pub speed: f32,
    /// Downward acceleration while airborne. Default `9.8`.
    pub gravity: f32,
    /// Vertical velocity set by a jump. Default `1.0`.
    pub jump_height: f32,
    /// Where reset places the capsule and the character. Default origin.
    pub spawn_position: Vec3,
    pub capsule: CapsuleConfig,
    /// From capsule `start` to the model origin (the feet). Default `(0, -0.35, 0)`.
    pub model_offset: Vec3,
    /// Uniform scale applied to the loaded model. Default `0.01`.
    pub model_scale: f32,
    /// Default `"models/character.glb"`.
    pub model_path: String,
    /// Directory clip paths are resolved against. Default `"animations/"`.
    pub clip_base_path: String,
    /// Clip registry name to path, loaded in order.
    pub clips: Vec<(String, String)>,
    pub camera: CameraConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let clips = ["idle", "running", "jump", "sitting", "waving", "dancing"]
            .into_iter()
            .map(|name| (name.to_string(), format!("{name}.fbx")))
            .collect();

        Self {
            speed: 6.0,
            gravity: 9.8,
            jump_height: 1.0,
            spawn_position: Vec3::ZERO,
            capsule: CapsuleConfig::default(),
            model_offset: Vec3::new(0.0, -0.35, 0.0),
            model_scale: 0.01,
            model_path: "models/character.glb".to_string(),
            clip_base_path: "animations/".to_string(),
            clips,
            camera: CameraConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Default `"models/environment.glb"`.
    pub scene_path: String,
    /// Clips bundled with the scene that loop once it is loaded.
    pub ambient_clips: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            scene_path: "models/environment.glb".to_string(),
            ambient_clips: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Upper bound for a single frame step, in seconds. Default `0.05`.
    pub max_frame_delta: f32,
    pub player: PlayerConfig,
    pub environment: EnvironmentConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: 0.05,
            player: PlayerConfig::default(),
            environment: EnvironmentConfig::default(),
        }
    }
}

impl WorldConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
