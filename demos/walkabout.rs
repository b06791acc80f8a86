//! Headless walk around a flat room.
//!
//! Serves a procedural character, floor and clips from memory, then plays a
//! short key script: run forward, strafe, jump, wave. Run with
//! `RUST_LOG=info cargo run --example walkabout [config.json]`.

use std::f32::consts::PI;

use glam::{Quat, Vec3};
use wayfarer::animation::{InterpolationMode, KeyframeTrack, TargetPath, Track, TrackData};
use wayfarer::{
    Actor, AnimationClip, CollisionMesh, MemoryLoader, RenderContext, Rig, World, WorldConfig,
};

const DT: f32 = 1.0 / 60.0;

fn rig() -> Rig {
    let mut rig = Rig::new();
    let hips = rig.add_joint("Hips", None);
    rig.add_joint("Spine", Some(hips));
    rig.add_joint("RightArm", Some(hips));
    rig
}

fn swing(name: &str, joint: &str, duration: f32, angle: f32) -> AnimationClip {
    AnimationClip::new(
        name,
        vec![Track::new(
            joint,
            TargetPath::Rotation,
            TrackData::Quaternion(KeyframeTrack::new(
                vec![0.0, duration * 0.5, duration],
                vec![Quat::IDENTITY, Quat::from_rotation_z(angle), Quat::IDENTITY],
                InterpolationMode::Linear,
            )),
        )],
    )
}

fn room(half: f32) -> CollisionMesh {
    let h = 3.0;
    CollisionMesh::new(
        vec![
            Vec3::new(-half, 0.0, -half),
            Vec3::new(-half, 0.0, half),
            Vec3::new(half, 0.0, half),
            Vec3::new(half, 0.0, -half),
            // Wall along +Z.
            Vec3::new(-half, 0.0, half),
            Vec3::new(half, 0.0, half),
            Vec3::new(half, h, half),
            Vec3::new(-half, h, half),
        ],
        vec![0, 1, 2, 0, 2, 3, 4, 6, 5, 4, 7, 6],
    )
}

fn loader(config: &WorldConfig) -> MemoryLoader {
    let environment = Actor::new("room", Rig::new()).with_collision_mesh(room(10.0));
    let player = &config.player;

    let mut loader = MemoryLoader::new()
        .with_model(player.model_path.clone(), Actor::new("wanderer", rig()))
        .with_model(config.environment.scene_path.clone(), environment);

    for (name, path) in &player.clips {
        let clip = match name.as_str() {
            "running" => swing(name, "Hips", 0.8, 0.2),
            "waving" => swing(name, "RightArm", 1.5, PI * 0.6),
            _ => swing(name, "Spine", 2.0, 0.05),
        };
        loader.insert_clip(format!("{}{path}", player.clip_base_path), clip);
    }
    loader
}

/// `(frame, key code, pressed)`; `"wave"` triggers a gesture instead.
const SCRIPT: &[(u32, &str, bool)] = &[
    (30, "KeyW", true),
    (120, "KeyD", true),
    (180, "KeyD", false),
    (200, "Space", true),
    (201, "Space", false),
    (260, "KeyW", false),
    (300, "wave", true),
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => WorldConfig::from_json_file(path)?,
        None => WorldConfig::default(),
    };

    let render = RenderContext::new(1280, 720, 1.0, &config.player.camera);
    let loader = loader(&config);
    let mut world = World::new(config, render);

    if !pollster::block_on(world.load(&loader)) {
        anyhow::bail!("scene failed to load");
    }

    for event in world.events().try_iter() {
        log::info!("{event:?}");
    }

    let handle = world.input_handle();
    handle.set_control_enabled(true);

    for frame in 0..480_u32 {
        for &(at, code, pressed) in SCRIPT.iter().filter(|(at, ..)| *at == frame) {
            log::info!("frame {at}: {code} {}", if pressed { "down" } else { "up" });
            match code {
                "wave" => handle.trigger_action("waving"),
                _ if pressed => handle.key_down(code),
                _ => handle.key_up(code),
            }
        }

        world.update(DT);

        if frame % 30 == 0 {
            let player = world.player();
            let feet = player.capsule().map_or(Vec3::ZERO, |c| c.start);
            log::info!(
                "frame {frame}: action={} grounded={} feet=({:.2}, {:.2}, {:.2}) camera azimuth={:.2}",
                player.current_action(),
                player.is_grounded(),
                feet.x,
                feet.y,
                feet.z,
                world.render().camera.azimuthal_angle(),
            );
        }
    }

    Ok(())
}
