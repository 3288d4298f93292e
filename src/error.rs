//! Pointer State Error Types
//!
//! Error handling for the pointer state core.

use thiserror::Error;

/// Result type for pointer state operations
pub type Result<T> = std::result::Result<T, PointerError>;

/// Pointer state error types
#[derive(Error, Debug)]
pub enum PointerError {
    /// Window or backbuffer extent with a zero dimension
    #[error("Invalid extent: {width}x{height} (both dimensions must be > 0)")]
    InvalidExtent {
        /// Rejected width
        width: u32,
        /// Rejected height
        height: u32,
    },

    /// Platform delegation failure
    #[error("Platform backend error: {0}")]
    PlatformError(String),
}
