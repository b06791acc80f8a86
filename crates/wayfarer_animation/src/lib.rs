//! Keyframe animation for Wayfarer.
//!
//! Clips hold keyframe tracks addressed by joint name. A [`Binder`] resolves
//! those names against a [`Rig`], an [`AnimationMixer`] plays any number of
//! [`AnimationAction`]s over one rig and writes the blended pose back to it.

pub mod action;
pub mod binder;
pub mod binding;
pub mod clip;
pub mod mixer;
pub mod rig;
pub mod tracks;
pub mod values;

pub use action::{AnimationAction, LoopMode, TrackValue};
pub use binder::Binder;
pub use binding::{PropertyBinding, TargetPath};
pub use clip::{AnimationClip, Track, TrackData, TrackMeta};
pub use mixer::{ActionKey, AnimationMixer, MixerEvent};
pub use rig::{Joint, Rig};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
