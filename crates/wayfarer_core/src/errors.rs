//! Error Types
//!
//! This module defines the error types used throughout Wayfarer.
//!
//! # Overview
//!
//! The main error type [`Error`] covers the failure modes that can leave the
//! frame loop:
//! - Asset loading failures (clips, models, scenes)
//! - Invalid collision geometry
//! - Configuration parsing
//!
//! Nothing on the per-frame update path returns an error. Missing clips and
//! not-yet-loaded assets are logged or skipped instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wayfarer_core::{Error, Result};
//!
//! fn load_config(text: &str) -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for Wayfarer.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// An animation clip could not be fetched or decoded.
    #[error("Failed to load clip '{name}': {reason}")]
    ClipLoad {
        /// Registry name the clip was requested under
        name: String,
        /// Collaborator-provided description of the failure
        reason: String,
    },

    /// A model could not be fetched or decoded.
    #[error("Failed to load model '{path}': {reason}")]
    ModelLoad {
        /// Path handed to the loader
        path: String,
        /// Collaborator-provided description of the failure
        reason: String,
    },

    // ========================================================================
    // Geometry Errors
    // ========================================================================
    /// Collision mesh data is malformed (index out of range, ragged index list).
    #[error("Invalid collision mesh: {0}")]
    InvalidMesh(String),

    // ========================================================================
    // Configuration & I/O Errors
    // ========================================================================
    /// Configuration could not be parsed.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, wayfarer_core::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
