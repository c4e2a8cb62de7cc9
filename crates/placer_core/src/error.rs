//! Error types for the placement core.
//!
//! Per-frame placement outcomes are never errors; they collapse into a
//! boolean validity that drives the preview color. Errors here cover
//! configuration problems only.

use thiserror::Error;

/// Result type alias using [`PlacementError`].
pub type Result<T> = std::result::Result<T, PlacementError>;

/// Top-level error type for placement setup.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// Configuration failed validation.
    #[error("Invalid placement config: {0}")]
    InvalidConfig(String),

    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Failed to read a configuration file.
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Failed to parse a RON configuration file.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),
}
