//! Script loading and configuration.
//!
//! Scripts define a placement config plus an ordered frame sequence:
//! tile selections and per-frame pointer state. They stand in for the
//! engine's input and raycast seams.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use placer_core::config::PlacementConfig;

/// Error type for script operations.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// File not found.
    #[error("Script file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read script file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse script: {0}")]
    ParseError(#[from] ron::error::SpannedError),
    /// The embedded placement config was rejected.
    #[error(transparent)]
    ConfigError(#[from] placer_core::error::PlacementError),
}

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScriptStep {
    /// Select a tile kind for placement (implicitly cancels any
    /// pending tile).
    Begin {
        /// Tile kind id.
        kind: u32,
    },
    /// One frame of pointer state.
    Frame {
        /// Raycast hit on the placement surface, if any, as planar
        /// world coordinates.
        hit: Option<(f64, f64)>,
        /// Whether the primary action was pressed this frame.
        confirm: bool,
    },
}

/// A complete scripted run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Script name.
    pub name: String,
    /// Placement configuration for the run.
    pub config: PlacementConfig,
    /// Ordered steps to drive through the session.
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// Load a script from a RON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, fails to
    /// parse, or carries an invalid placement config.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScriptError::FileNotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let script: Self = ron::from_str(&contents)?;
        script.config.validate()?;
        Ok(script)
    }

    /// Built-in demo script: a handful of commits on a 10x10 field,
    /// one out-of-field attempt, and one frame with no raycast hit.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            name: "demo".to_string(),
            config: PlacementConfig::default(),
            steps: vec![
                ScriptStep::Begin { kind: 1 },
                ScriptStep::Frame {
                    hit: Some((-1.5, -1.5)),
                    confirm: false,
                },
                ScriptStep::Frame {
                    hit: Some((-1.5, -1.5)),
                    confirm: true,
                },
                ScriptStep::Begin { kind: 1 },
                // Same cell again: denied, the session keeps previewing
                ScriptStep::Frame {
                    hit: Some((-1.5, -1.5)),
                    confirm: true,
                },
                // Outside the field: denied
                ScriptStep::Frame {
                    hit: Some((6.0, 0.0)),
                    confirm: true,
                },
                // Pointer misses the surface entirely
                ScriptStep::Frame {
                    hit: None,
                    confirm: false,
                },
                ScriptStep::Frame {
                    hit: Some((3.2, 2.7)),
                    confirm: true,
                },
                ScriptStep::Begin { kind: 2 },
                ScriptStep::Frame {
                    hit: Some((-4.5, 4.5)),
                    confirm: true,
                },
            ],
        }
    }
}
