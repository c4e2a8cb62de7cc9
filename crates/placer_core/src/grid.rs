//! Occupancy tracking for the placement field.
//!
//! A fixed-dimension boolean table: a cell is occupied iff a tile has
//! been committed there. The table is created empty at session start,
//! grows never, and shrinks never; committed tiles cannot be removed.
//!
//! Out-of-range access is a caller precondition handled by explicit
//! bounds checks, never by catching a runtime fault.

use serde::{Deserialize, Serialize};

/// Integer cell coordinate on the placement field.
///
/// Raw mapper output; may be negative or past the field edge. Validity
/// is established only by checking against [`OccupancyGrid::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoord {
    /// Cell index along the X axis.
    pub x: i32,
    /// Cell index along the Z axis.
    pub z: i32,
}

impl CellCoord {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// Boolean occupancy table over the placement field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    /// Grid width in cells (X axis).
    width: u32,
    /// Grid depth in cells (Z axis).
    depth: u32,
    /// Cell data stored in row-major order.
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create a new grid with every cell free.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `depth` is zero. Session construction
    /// validates its config before getting here.
    #[must_use]
    pub fn new(width: u32, depth: u32) -> Self {
        assert!(width > 0, "OccupancyGrid width must be positive");
        assert!(depth > 0, "OccupancyGrid depth must be positive");

        let cell_count = (width as usize) * (depth as usize);
        Self {
            width,
            depth,
            cells: vec![false; cell_count],
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid depth in cells.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Convert a cell coordinate to a storage index.
    #[inline]
    fn coords_to_index(&self, cell: CellCoord) -> usize {
        (cell.z as usize) * (self.width as usize) + (cell.x as usize)
    }

    /// Check whether a cell lies within the grid's index range.
    #[must_use]
    pub fn in_bounds(&self, cell: CellCoord) -> bool {
        cell.x >= 0
            && cell.z >= 0
            && (cell.x as u32) < self.width
            && (cell.z as u32) < self.depth
    }

    /// Occupancy at a cell.
    /// Returns `None` if the cell is out of the grid's index range.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<bool> {
        if self.in_bounds(cell) {
            Some(self.cells[self.coords_to_index(cell)])
        } else {
            None
        }
    }

    /// Whether a cell holds a committed tile.
    ///
    /// Out-of-range cells read as unoccupied; callers that need to
    /// distinguish "free" from "outside the grid" must use [`Self::get`].
    #[must_use]
    pub fn is_occupied(&self, cell: CellCoord) -> bool {
        self.get(cell).unwrap_or(false)
    }

    /// Mark a cell as occupied. Idempotent.
    ///
    /// Returns `false` (and logs) if the cell is out of the grid's
    /// index range; the grid is unchanged in that case.
    pub fn mark_occupied(&mut self, cell: CellCoord) -> bool {
        if self.in_bounds(cell) {
            let index = self.coords_to_index(cell);
            self.cells[index] = true;
            true
        } else {
            tracing::warn!("mark_occupied out of range: ({}, {})", cell.x, cell.z);
            false
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }
}
