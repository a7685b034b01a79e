//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write a region image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// Failed to read back a region image
    #[error("failed to load image '{path}': {message}")]
    ImageLoad { path: String, message: String },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
