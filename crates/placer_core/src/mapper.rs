//! World-space to cell-space coordinate mapping.
//!
//! The field is centered on the world origin and spans
//! `[-extent, +extent]` per axis, where `extent = cells * cell_size / 2`.
//! The mapper is built from the same [`PlacementConfig`] as the
//! occupancy grid, so the world-space field bound and the grid's index
//! range always describe the same cells.

use crate::config::PlacementConfig;
use crate::grid::CellCoord;
use crate::math::{Fixed, WorldPos};

/// Converts between world positions and integer cell coordinates on a
/// centered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMapper {
    width: u32,
    depth: u32,
    cell_size: Fixed,
}

impl GridMapper {
    /// Build a mapper from a placement config.
    #[must_use]
    pub fn new(config: &PlacementConfig) -> Self {
        Self {
            width: config.field_width,
            depth: config.field_depth,
            cell_size: Fixed::from_num(config.cell_size),
        }
    }

    /// Half the field extent along X, in world units.
    #[must_use]
    pub fn half_extent_x(&self) -> Fixed {
        Fixed::from_num(self.width) * self.cell_size / Fixed::from_num(2)
    }

    /// Half the field extent along Z, in world units.
    #[must_use]
    pub fn half_extent_z(&self) -> Fixed {
        Fixed::from_num(self.depth) * self.cell_size / Fixed::from_num(2)
    }

    /// World-space bounds check: whether `pos` lies inside the field,
    /// inclusive on both edges.
    #[must_use]
    pub fn field_contains(&self, pos: WorldPos) -> bool {
        let hx = self.half_extent_x();
        let hz = self.half_extent_z();
        pos.x >= -hx && pos.x <= hx && pos.z >= -hz && pos.z <= hz
    }

    /// Map a world position to the cell containing it.
    ///
    /// The result is raw: positions outside the field map to cells
    /// outside the grid's index range (including negative indices).
    /// Callers establish validity against the occupancy grid.
    #[must_use]
    pub fn world_to_cell(&self, pos: WorldPos) -> CellCoord {
        // Saturating: a pathologically distant raycast hit must map to
        // an out-of-range cell, not overflow
        let x = (pos.x.saturating_add(self.half_extent_x()) / self.cell_size).floor();
        let z = (pos.z.saturating_add(self.half_extent_z()) / self.cell_size).floor();
        CellCoord::new(x.to_num::<i32>(), z.to_num::<i32>())
    }

    /// World position of a cell's center.
    ///
    /// Accepts raw out-of-range cells; the result saturates instead of
    /// overflowing.
    #[must_use]
    pub fn cell_to_world_center(&self, cell: CellCoord) -> WorldPos {
        let half_cell = self.cell_size / Fixed::from_num(2);
        WorldPos::new(
            Fixed::from_num(cell.x)
                .saturating_mul(self.cell_size)
                .saturating_add(half_cell)
                .saturating_sub(self.half_extent_x()),
            Fixed::from_num(cell.z)
                .saturating_mul(self.cell_size)
                .saturating_add(half_cell)
                .saturating_sub(self.half_extent_z()),
        )
    }
}
