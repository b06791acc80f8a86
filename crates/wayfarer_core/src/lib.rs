//! Foundational types shared by every Wayfarer crate.
//!
//! - [`Transform`]: position / rotation / scale of a node
//! - [`Error`] and [`Result`]: the error type used across the workspace

pub mod errors;
pub mod transform;

pub use errors::{Error, Result};
pub use transform::Transform;
