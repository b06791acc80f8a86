//! The static world the character walks through.

use wayfarer_collision::{Octree, SpatialIndex};
use wayfarer_core::Result;

use crate::animation::AnimationDriver;
use crate::assets::AssetLoader;
use crate::config::EnvironmentConfig;
use crate::scene::Actor;

/// What the world needs from its environment each frame.
pub trait Environment {
    type Index: SpatialIndex;

    /// Collision geometry, once built.
    fn spatial_index(&self) -> Option<&Self::Index>;

    /// Whether loading finished; the player is only simulated after this.
    fn is_loaded(&self) -> bool;

    /// Advances the environment's own animation.
    fn update(&mut self, dt: f32);
}

/// A single loaded scene: static collision geometry plus looping ambient clips.
pub struct StaticEnvironment {
    config: EnvironmentConfig,
    scene: Option<Actor>,
    octree: Option<Octree>,
    driver: AnimationDriver,
    loaded: bool,
}

impl StaticEnvironment {
    #[must_use]
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config,
            scene: None,
            octree: None,
            driver: AnimationDriver::new(),
            loaded: false,
        }
    }

    /// Loads the configured scene model and installs it.
    ///
    /// Failures are logged; the environment then stays unloaded.
    pub async fn load<L: AssetLoader>(&mut self, loader: &L) -> bool {
        let path = self.config.scene_path.clone();
        match loader.fetch_model(&path).await {
            Ok(actor) => {
                if let Err(err) = self.install(actor) {
                    log::error!("Failed to install environment '{path}': {err}");
                }
            }
            Err(err) => log::error!("Environment unavailable: {err}"),
        }
        self.loaded
    }

    /// Builds the collision octree from `actor` and starts its ambient clips.
    ///
    /// A scene without collision triangles still animates, but exposes no
    /// spatial index, so nothing is simulated against it.
    pub fn install(&mut self, mut actor: Actor) -> Result<()> {
        actor.transform.update_local_matrix();
        let world = *actor.transform.local_matrix();

        let octree = match &actor.collision_mesh {
            Some(mesh) => Some(mesh.build_octree(world)?).filter(|octree| !octree.is_empty()),
            None => None,
        };
        if octree.is_none() {
            log::warn!("Environment '{}' has no collision triangles", actor.name);
        }

        self.driver.merge_clips(actor.clips.iter().cloned());
        if !self.config.ambient_clips.is_empty() {
            let names: Vec<&str> = self.config.ambient_clips.iter().map(String::as_str).collect();
            self.driver.play(&actor.rig, &names, true);
        }

        log::info!(
            "Environment '{}' loaded: {} triangles",
            actor.name,
            octree.as_ref().map_or(0, Octree::triangle_count)
        );

        self.octree = octree;
        self.scene = Some(actor);
        self.loaded = true;
        Ok(())
    }

    #[must_use]
    pub fn scene(&self) -> Option<&Actor> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn octree(&self) -> Option<&Octree> {
        self.octree.as_ref()
    }

    #[must_use]
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::new(EnvironmentConfig::default())
    }
}

impl Environment for StaticEnvironment {
    type Index = Octree;

    fn spatial_index(&self) -> Option<&Octree> {
        self.octree.as_ref()
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn update(&mut self, dt: f32) {
        if let Some(scene) = self.scene.as_mut() {
            self.driver.advance(dt, &mut scene.rig);
        }
    }
}
