//! Asset access
//!
//! - [`AssetLoader`]: async source of decoded clips and models
//! - [`MemoryLoader`]: serves pre-built assets by path
//! - [`ProgressLoader`]: reports each finished request as a world event

pub mod loader;
pub mod progress;

pub use loader::{AssetLoader, MemoryLoader};
pub use progress::ProgressLoader;
