use std::future::Future;

use rustc_hash::FxHashMap;
use wayfarer_animation::AnimationClip;
use wayfarer_core::{Error, Result};

use crate::scene::Actor;

/// Asset loader trait
///
/// Decoding model and clip formats is the host's business; the controller
/// only needs decoded results, resolved asynchronously by path.
pub trait AssetLoader {
    /// Loads one animation clip.
    fn load_clip(&self, path: &str) -> impl Future<Output = Result<AnimationClip>>;

    /// Loads a model with its rig, bundled clips and optional collision mesh.
    fn load_model(&self, path: &str) -> impl Future<Output = Result<Actor>>;

    /// [`Self::load_clip`], with a failure reported as [`Error::ClipLoad`]
    /// under the registry `name`.
    fn fetch_clip(&self, name: &str, path: &str) -> impl Future<Output = Result<AnimationClip>> {
        async move {
            self.load_clip(path).await.map_err(|err| Error::ClipLoad {
                name: name.to_string(),
                reason: err.to_string(),
            })
        }
    }

    /// [`Self::load_model`], with a failure reported as [`Error::ModelLoad`].
    fn fetch_model(&self, path: &str) -> impl Future<Output = Result<Actor>> {
        async move {
            self.load_model(path).await.map_err(|err| Error::ModelLoad {
                path: path.to_string(),
                reason: err.to_string(),
            })
        }
    }
}

/// In-memory asset loader.
///
/// Serves pre-built clips and actors by path. Used by the demo and the tests,
/// and by hosts that decode assets up front.
#[derive(Default)]
pub struct MemoryLoader {
    clips: FxHashMap<String, AnimationClip>,
    models: FxHashMap<String, Actor>,
}

impl MemoryLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_clip(&mut self, path: impl Into<String>, clip: AnimationClip) {
        self.clips.insert(path.into(), clip);
    }

    pub fn insert_model(&mut self, path: impl Into<String>, actor: Actor) {
        self.models.insert(path.into(), actor);
    }

    #[must_use]
    pub fn with_clip(mut self, path: impl Into<String>, clip: AnimationClip) -> Self {
        self.insert_clip(path, clip);
        self
    }

    #[must_use]
    pub fn with_model(mut self, path: impl Into<String>, actor: Actor) -> Self {
        self.insert_model(path, actor);
        self
    }
}

impl AssetLoader for MemoryLoader {
    async fn load_clip(&self, path: &str) -> Result<AnimationClip> {
        self.clips
            .get(path)
            .cloned()
            .ok_or_else(|| Error::AssetNotFound(path.to_string()))
    }

    async fn load_model(&self, path: &str) -> Result<Actor> {
        self.models
            .get(path)
            .cloned()
            .ok_or_else(|| Error::AssetNotFound(path.to_string()))
    }
}
