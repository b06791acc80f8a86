//! Animation driver
//!
//! Plays clips by name on a rig. The player and the environment each own one
//! driver; both only ever have a single mixer live at a time.

use std::sync::Arc;

use futures::future::join_all;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use wayfarer_animation::{
    AnimationAction, AnimationClip, AnimationMixer, Binder, LoopMode, MixerEvent, Rig,
};

use crate::assets::AssetLoader;

/// Fade-in applied to every action started by [`AnimationDriver::play`].
pub const FADE_IN: f32 = 0.1;

/// Named clip registry plus a single live mixer.
///
/// Clips are registered under a name (last writer wins). [`Self::play`]
/// always builds a fresh mixer for the requested names; unknown names are
/// warned about and skipped, never fatal.
#[derive(Default)]
pub struct AnimationDriver {
    clips: FxHashMap<String, Arc<AnimationClip>>,
    mixer: Option<AnimationMixer>,
    base_path: String,
    last_missing: Vec<String>,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver whose [`Self::load`] prefixes every source path with `base_path`.
    #[must_use]
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Loads `(name, path)` entries concurrently through `loader`.
    ///
    /// A failed entry is logged and leaves its name unregistered; the rest of
    /// the batch still lands. Returns how many clips were registered.
    pub async fn load<L: AssetLoader>(&mut self, loader: &L, sources: &[(String, String)]) -> usize {
        let requests: Vec<(&str, String)> = sources
            .iter()
            .map(|(name, path)| (name.as_str(), format!("{}{}", self.base_path, path)))
            .collect();

        let results = join_all(
            requests
                .iter()
                .map(|(name, path)| async move { (*name, loader.fetch_clip(name, path).await) }),
        )
        .await;

        let mut loaded = 0;
        for (name, result) in results {
            match result {
                Ok(clip) => {
                    self.register(name, clip);
                    loaded += 1;
                }
                Err(err) => log::error!("{err}"),
            }
        }

        log::info!("Loaded {loaded}/{} animations", sources.len());
        loaded
    }

    /// Registers `clip` under `name`, replacing any clip of that name.
    pub fn register(&mut self, name: &str, mut clip: AnimationClip) {
        clip.name = name.to_string();
        if self.clips.insert(name.to_string(), Arc::new(clip)).is_some() {
            log::debug!("Animation '{name}' replaced");
        }
    }

    /// Registers clips under their own names; later entries win.
    pub fn merge_clips(&mut self, clips: impl IntoIterator<Item = AnimationClip>) {
        for clip in clips {
            let name = clip.name.clone();
            self.register(&name, clip);
        }
    }

    #[must_use]
    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    #[must_use]
    pub fn clip(&self, name: &str) -> Option<&Arc<AnimationClip>> {
        self.clips.get(name)
    }

    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    /// Replaces the mixer with a fresh one bound to `rig` playing `names`.
    ///
    /// Returns `None` when none of the names is registered.
    pub fn play(&mut self, rig: &Rig, names: &[&str], looping: bool) -> Option<&mut AnimationMixer> {
        let loop_mode = if looping { LoopMode::Loop } else { LoopMode::Once };

        let mut mixer = AnimationMixer::new(rig.id);
        let mut started = 0;
        self.last_missing.clear();

        for &name in names {
            let Some(clip) = self.clips.get(name) else {
                log::warn!("Animation '{name}' is not loaded");
                self.last_missing.push(name.to_string());
                continue;
            };

            let bindings = Binder::bind(rig, clip);
            let action = AnimationAction::new(Arc::clone(clip), bindings)
                .with_loop_mode(loop_mode)
                .fade_in(FADE_IN);
            mixer.add_action(action);
            started += 1;
        }

        let mixer = self.mixer.insert(mixer);
        (started > 0).then_some(mixer)
    }

    /// Names skipped by the last [`Self::play`] call.
    #[must_use]
    pub fn last_missing(&self) -> &[String] {
        &self.last_missing
    }

    /// Steps the mixer and poses `rig`.
    ///
    /// Does nothing without a mixer or when `rig` is not the one the mixer
    /// was started on.
    pub fn advance(&mut self, dt: f32, rig: &mut Rig) -> SmallVec<[MixerEvent; 2]> {
        let Some(mixer) = self.mixer.as_mut() else {
            return SmallVec::new();
        };
        if mixer.target() != rig.id {
            return SmallVec::new();
        }

        let events = mixer.update(dt);
        mixer.apply(rig);
        events
    }

    pub fn stop(&mut self) {
        self.mixer = None;
    }

    #[must_use]
    pub fn mixer(&self) -> Option<&AnimationMixer> {
        self.mixer.as_ref()
    }

    pub fn mixer_mut(&mut self) -> Option<&mut AnimationMixer> {
        self.mixer.as_mut()
    }
}
