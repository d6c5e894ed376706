//! Error types for capture configuration.

use thiserror::Error;

/// Errors raised while loading or validating a [`super::CaptureConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A hit threshold must be at least one.
    #[error("{category} threshold must be positive, got {value}")]
    NonPositiveThreshold { category: &'static str, value: u32 },

    /// Line budget and sampling interval must be positive, with room for several samples.
    #[error("invalid line limits: interval {interval}, max length {max_length}")]
    InvalidLineLimits { interval: f32, max_length: f32 },

    /// Ghosts may shrink, never grow or vanish.
    #[error("min shrink ratio must be in (0, 1], got {0}")]
    InvalidShrinkRatio(f32),

    /// Config file could not be read.
    #[error("Failed to read config '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}
