//! Placement configuration.
//!
//! Fixed at session start and immutable thereafter. The occupancy grid
//! and the coordinate mapper are both derived from the same config, so
//! the world-space field bound and the grid's index range can never
//! diverge silently.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, Result};
use crate::visual::Color;

/// Configuration for a placement field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Field width in cells (X axis).
    pub field_width: u32,
    /// Field depth in cells (Z axis).
    pub field_depth: u32,
    /// Cell size in world units (for coordinate conversion).
    pub cell_size: u32,
    /// Preview color while placement is legal.
    pub permit_color: Color,
    /// Preview color while placement is illegal.
    pub deny_color: Color,
    /// Color restored at commit time.
    pub default_color: Color,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            field_width: 10,
            field_depth: 10,
            cell_size: 1,
            permit_color: Color::rgba(0, 255, 0, 102),
            deny_color: Color::rgba(255, 0, 0, 102),
            default_color: Color::WHITE,
        }
    }
}

impl PlacementConfig {
    /// Set the field dimensions in cells.
    #[must_use]
    pub const fn with_field_size(mut self, width: u32, depth: u32) -> Self {
        self.field_width = width;
        self.field_depth = depth;
        self
    }

    /// Set the cell size in world units.
    #[must_use]
    pub const fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidConfig`] for a zero-sized field
    /// or a zero cell size.
    pub fn validate(&self) -> Result<()> {
        if self.field_width == 0 || self.field_depth == 0 {
            return Err(PlacementError::InvalidConfig(format!(
                "field must have positive dimensions, got {}x{}",
                self.field_width, self.field_depth
            )));
        }
        if self.cell_size == 0 {
            return Err(PlacementError::InvalidConfig(
                "cell_size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a RON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, fails to
    /// parse, or fails validation.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PlacementError::ConfigNotFound(
                path.display().to_string(),
            ));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = ron::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}
