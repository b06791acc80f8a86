use std::sync::Arc;

use glam::{Quat, Vec3};

use crate::binding::PropertyBinding;
use crate::clip::{AnimationClip, TrackData};
use crate::tracks::KeyframeCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Play to the end, pause and report completion.
    Once,
    Loop,
    PingPong,
}

#[derive(Debug, Clone, Copy)]
struct Fade {
    duration: f32,
    elapsed: f32,
}

/// One clip playing inside a mixer.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,

    pub bindings: Vec<PropertyBinding>,

    fade: Option<Fade>,
    track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>, bindings: Vec<PropertyBinding>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: true,
            bindings,
            fade: None,
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    /// Ramps the effective weight from zero up to `weight` over `duration` seconds.
    #[must_use]
    pub fn fade_in(mut self, duration: f32) -> Self {
        self.fade = (duration > 0.0).then_some(Fade {
            duration,
            elapsed: 0.0,
        });
        self
    }

    /// `weight` scaled by the fade-in progress.
    #[must_use]
    pub fn effective_weight(&self) -> f32 {
        match self.fade {
            Some(fade) => self.weight * (fade.elapsed / fade.duration).clamp(0.0, 1.0),
            None => self.weight,
        }
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Advances playback time.
    ///
    /// Returns `true` on the step a [`LoopMode::Once`] action reaches either
    /// end of its clip.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.paused || !self.enabled {
            return false;
        }

        if let Some(fade) = &mut self.fade {
            fade.elapsed += dt;
            if fade.elapsed >= fade.duration {
                self.fade = None;
            }
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            // Nothing to play: a one-shot completes at once.
            if self.loop_mode == LoopMode::Once {
                self.paused = true;
                return true;
            }
            return false;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration || self.time < 0.0 {
                    self.time = self.time.clamp(0.0, duration);
                    self.paused = true;
                    return true;
                }
            }
            LoopMode::Loop => {
                self.time = self.time.rem_euclid(duration);
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                let t = self.time.rem_euclid(double_duration);
                self.time = if t > duration { double_duration - t } else { t };
            }
        }

        false
    }

    /// Samples track `track_index` at the current time.
    pub fn sample_track(&mut self, track_index: usize) -> Option<TrackValue> {
        let track = self.clip.tracks.get(track_index)?;
        let cursor = self.track_cursors.get_mut(track_index)?;

        Some(match &track.data {
            TrackData::Vector3(t) => TrackValue::Vector3(t.sample_with_cursor(self.time, cursor)),
            TrackData::Quaternion(t) => TrackValue::Quaternion(t.sample_with_cursor(self.time, cursor)),
            TrackData::Scalar(t) => TrackValue::Scalar(t.sample_with_cursor(self.time, cursor)),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackValue {
    Vector3(Vec3),
    Quaternion(Quat),
    Scalar(f32),
}
