//! Error Types
//!
//! Re-exports the workspace error type. All fallible public APIs return
//! [`Result<T>`], an alias for `std::result::Result<T, Error>`.
//!
//! Failures never unwind the frame loop: the update path logs and skips
//! instead of returning errors, so the worst visible outcome of a failed load
//! is a missing animation or a character that does not appear.

pub use wayfarer_core::errors::{Error, Result};
