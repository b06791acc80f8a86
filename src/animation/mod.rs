//! Animation
//!
//! Keyframe primitives come from `wayfarer_animation`; this module adds the
//! [`AnimationDriver`], a named-clip registry with one live mixer.

pub mod driver;

pub use driver::AnimationDriver;
pub use wayfarer_animation::*;
