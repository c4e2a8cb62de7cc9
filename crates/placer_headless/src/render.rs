//! ASCII occupancy rendering.

use placer_core::grid::{CellCoord, OccupancyGrid};

/// Render the occupancy grid as ASCII art: `#` occupied, `.` free.
///
/// Rows are printed with +Z upward, so the output matches a top-down
/// view of the field.
#[must_use]
pub fn render_ascii(grid: &OccupancyGrid) -> String {
    let mut out = String::with_capacity(
        (grid.width() as usize + 1) * grid.depth() as usize,
    );
    for z in (0..grid.depth() as i32).rev() {
        for x in 0..grid.width() as i32 {
            out.push(if grid.is_occupied(CellCoord::new(x, z)) {
                '#'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}
