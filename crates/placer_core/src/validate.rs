//! Placement legality checks.
//!
//! A placement is legal iff the position lies inside the world-space
//! field bound and the hovered cell is free. Out-of-range cell lookups
//! read as "not free" through an explicit pre-lookup range check;
//! nothing here can fault.

use crate::grid::{CellCoord, OccupancyGrid};
use crate::mapper::GridMapper;
use crate::math::WorldPos;

/// Decides whether a tile may be placed at a world position.
///
/// Borrows the grid and mapper for the duration of one check; the
/// session constructs one per frame.
#[derive(Debug)]
pub struct PlacementValidator<'a> {
    grid: &'a OccupancyGrid,
    mapper: &'a GridMapper,
}

impl<'a> PlacementValidator<'a> {
    /// Build a validator over a grid and its mapper.
    #[must_use]
    pub fn new(grid: &'a OccupancyGrid, mapper: &'a GridMapper) -> Self {
        Self { grid, mapper }
    }

    /// Whether a tile may be placed at `pos`.
    ///
    /// Both the field bound and the occupancy lookup are evaluated;
    /// either alone is sufficient to deny. A hovered cell outside the
    /// grid's index range counts as not free.
    #[must_use]
    pub fn is_valid(&self, pos: WorldPos) -> bool {
        let in_field = self.mapper.field_contains(pos);
        let cell = self.mapper.world_to_cell(pos);
        let cell_free = self.grid.get(cell).is_some_and(|occupied| !occupied);
        in_field && cell_free
    }

    /// The hovered cell for `pos`, if it lies within the grid's index
    /// range.
    #[must_use]
    pub fn hovered_cell(&self, pos: WorldPos) -> Option<CellCoord> {
        let cell = self.mapper.world_to_cell(pos);
        self.grid.in_bounds(cell).then_some(cell)
    }
}
