//! Error types for spritecut-core
//!
//! Provides a unified error type for the data structures in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal representation details.

use thiserror::Error;

/// spritecut core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the raster dimensions
    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the raster
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Point whose half-open boundary cannot be represented in `i32`
    #[error("coordinate out of range: ({x}, {y})")]
    CoordinateOverflow { x: i32, y: i32 },

    /// Empty input where at least one point is required
    #[error("null or empty input: {0}")]
    NullInput(&'static str),
}

/// Result type alias for spritecut core operations
pub type Result<T> = std::result::Result<T, Error>;
