//! Error types for spritecut-region

use thiserror::Error;

/// Errors that can occur during region discovery
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spritecut_core::Error),

    /// Step outside `1..=MAX_STEP`
    #[error("invalid step: {step} (must be between 1 and {max})")]
    InvalidStep { step: u32, max: u32 },

    /// Region growth was asked to start from a point that is not waiting
    /// to be assigned
    #[error("seed point not found: ({x}, {y})")]
    SeedNotFound { x: i32, y: i32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
