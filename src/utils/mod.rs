//! Utility Module
//!
//! - [`OrbitControls`]: orbit camera rig the follow camera is built on
//! - [`FrameClock`]: frame delta measurement with an upper clamp

pub mod orbit_control;
pub mod time;

pub use orbit_control::OrbitControls;
pub use time::FrameClock;
