//! Error types for arena data loading.

use thiserror::Error;

/// Errors that can occur when loading arena data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Ghost threshold range is empty or starts at zero.
    #[error("Invalid ghost threshold range {min}..={max}")]
    InvalidThresholdRange { min: u32, max: u32 },

    /// Arena must have room for entities.
    #[error("Arena half extents must be positive, got ({0}, {1})")]
    InvalidExtents(f32, f32),
}
