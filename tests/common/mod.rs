//! Shared fixtures: a small rig, clips that animate it, a flat floor and a
//! loader serving them under the default config paths.

#![allow(dead_code)]

use glam::{Quat, Vec3};

use wayfarer::animation::{
    AnimationClip, InterpolationMode, KeyframeTrack, Rig, TargetPath, Track, TrackData,
};
use wayfarer::{
    Actor, CollisionMesh, MemoryLoader, Octree, OrbitControls, Player, PlayerConfig, RenderContext,
    StaticEnvironment,
};

pub const EPSILON: f32 = 1e-4;
pub const DT: f32 = 0.016;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

pub fn rig() -> Rig {
    let mut rig = Rig::new();
    let hips = rig.add_joint("Hips", None);
    rig.add_joint("Spine", Some(hips));
    rig
}

/// One-second-per-unit clip turning the hips half a revolution.
pub fn clip(name: &str, duration: f32) -> AnimationClip {
    AnimationClip::new(
        name,
        vec![Track::new(
            "Hips",
            TargetPath::Rotation,
            TrackData::Quaternion(KeyframeTrack::new(
                vec![0.0, duration],
                vec![Quat::IDENTITY, Quat::from_rotation_y(std::f32::consts::PI)],
                InterpolationMode::Linear,
            )),
        )],
    )
}

/// Square floor at `y = 0` spanning `[-half, half]` on X and Z, facing up.
pub fn floor_mesh(half: f32) -> CollisionMesh {
    CollisionMesh::new(
        vec![
            Vec3::new(-half, 0.0, -half),
            Vec3::new(-half, 0.0, half),
            Vec3::new(half, 0.0, half),
            Vec3::new(half, 0.0, -half),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}

pub fn floor_octree() -> Octree {
    let mesh = floor_mesh(50.0);
    Octree::from_mesh(&mesh.positions, &mesh.indices).expect("valid floor mesh")
}

pub fn character() -> Actor {
    Actor::new("character", rig())
}

pub fn environment_actor() -> Actor {
    Actor::new("meeting room", rig())
        .with_clips(vec![clip("fan", 2.0)])
        .with_collision_mesh(floor_mesh(50.0))
}

/// Loader with the character, the floor scene and every default clip except
/// `sitting` and `dancing`.
pub fn loader() -> MemoryLoader {
    MemoryLoader::new()
        .with_model("models/character.glb", character())
        .with_model("models/environment.glb", environment_actor())
        .with_clip("animations/idle.fbx", clip("Armature|idle", 2.0))
        .with_clip("animations/running.fbx", clip("Armature|run", 0.8))
        .with_clip("animations/jump.fbx", clip("Armature|jump", 1.2))
        .with_clip("animations/waving.fbx", clip("Armature|wave", 1.0))
}

pub fn render_context(config: &PlayerConfig) -> RenderContext {
    RenderContext::new(1280, 720, 1.0, &config.camera)
}

/// A player with the character attached and every locomotion clip
/// registered, reset against a fresh camera.
pub fn ready_player() -> (Player, OrbitControls) {
    let config = PlayerConfig::default();
    let mut camera = render_context(&config).camera;

    let mut player = Player::new(config);
    let driver = player.driver_mut();
    for name in ["idle", "running", "jump", "waving"] {
        let duration = if name == "waving" { 1.0 } else { 2.0 };
        driver.register(name, clip(name, duration));
    }
    player.attach(character());
    player.reset(&mut camera);

    (player, camera)
}

pub fn loaded_environment() -> StaticEnvironment {
    let mut environment = StaticEnvironment::default();
    environment
        .install(environment_actor())
        .expect("floor installs");
    environment
}
