//! Render-side state the controller shares with the host renderer.

pub mod context;

pub use context::{MAX_PIXEL_RATIO, RenderContext};
