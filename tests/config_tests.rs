//! Configuration Tests
//!
//! Tests for:
//! - Documented defaults
//! - Partial JSON overrides
//! - File loading and error reporting

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use wayfarer::{Error, PlayerConfig, WorldConfig};

#[test]
fn defaults_match_documentation() {
    let config = WorldConfig::default();
    assert_eq!(config.max_frame_delta, 0.05);

    let player = &config.player;
    assert_eq!(player.speed, 6.0);
    assert_eq!(player.gravity, 9.8);
    assert_eq!(player.jump_height, 1.0);
    assert_eq!(player.spawn_position, Vec3::ZERO);
    assert_eq!(player.capsule.start, Vec3::new(0.0, 0.35, 0.0));
    assert_eq!(player.capsule.end, Vec3::new(0.0, 1.35, 0.0));
    assert_eq!(player.capsule.radius, 0.35);
    assert_eq!(player.model_offset, Vec3::new(0.0, -0.35, 0.0));
    assert_eq!(player.model_scale, 0.01);
    assert_eq!(player.camera.default_position, Vec3::new(0.0, 3.0, -5.0));
    assert_eq!(player.camera.max_polar, FRAC_PI_2 - 0.05);
}

#[test]
fn default_clip_list() {
    let config = PlayerConfig::default();
    let names: Vec<&str> = config
        .clips
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, ["idle", "running", "jump", "sitting", "waving", "dancing"]);
    assert_eq!(PlayerConfig::default().clips[1].1, "running.fbx");
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = WorldConfig::from_json_str(
        r#"{
            "player": {
                "speed": 4.5,
                "spawn_position": [1.0, 2.0, 3.0],
                "capsule": { "radius": 0.3 }
            },
            "environment": { "ambient_clips": ["fan", "door"] }
        }"#,
    )
    .unwrap();

    assert_eq!(config.player.speed, 4.5);
    assert_eq!(config.player.spawn_position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(config.player.capsule.radius, 0.3);
    assert_eq!(config.player.capsule.end, Vec3::new(0.0, 1.35, 0.0));
    assert_eq!(config.player.gravity, 9.8);
    assert_eq!(config.environment.ambient_clips, ["fan", "door"]);
    assert_eq!(config.environment.scene_path, "models/environment.glb");
    assert_eq!(config.max_frame_delta, 0.05);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(WorldConfig::from_json_str("{}").unwrap(), WorldConfig::default());
}

#[test]
fn malformed_json_is_a_config_error() {
    let result = WorldConfig::from_json_str(r#"{ "player": { "speed": "fast" } }"#);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn config_round_trips_through_file() -> anyhow::Result<()> {
    let mut config = WorldConfig::default();
    config.player.jump_height = 2.5;
    config.environment.scene_path = "models/garden.glb".to_string();

    let path = std::env::temp_dir().join(format!("wayfarer-config-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string_pretty(&config)?)?;
    let loaded = WorldConfig::from_json_file(&path);
    std::fs::remove_file(&path)?;

    assert_eq!(loaded?, config);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let result = WorldConfig::from_json_file("/definitely/not/here/wayfarer.json");
    assert!(matches!(result, Err(Error::Io(_))));
}
