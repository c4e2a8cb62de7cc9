//! Property-based testing strategies.
//!
//! Strategies generate world positions relative to a centered field of
//! half-extent `half` world units per axis, and in-range cell
//! coordinates for a grid of the given dimensions.

use proptest::prelude::*;

use placer_core::grid::CellCoord;
use placer_core::math::WorldPos;

/// Any in-range cell coordinate for a `width` x `depth` grid.
pub fn in_range_cell(width: u32, depth: u32) -> impl Strategy<Value = CellCoord> {
    (0..width as i32, 0..depth as i32).prop_map(|(x, z)| CellCoord::new(x, z))
}

/// A world position strictly inside the field (both axes within
/// `(-half, half)`).
pub fn in_field_pos(half: f64) -> impl Strategy<Value = WorldPos> {
    let axis = -half + 1e-3..half - 1e-3;
    (axis.clone(), axis).prop_map(|(x, z)| WorldPos::from_num(x, z))
}

/// A coordinate strictly beyond the field bound on one side.
fn beyond(half: f64) -> impl Strategy<Value = f64> {
    prop_oneof![
        half + 1e-3..half + 100.0,
        -half - 100.0..-half - 1e-3,
    ]
}

/// A world position strictly outside the field on at least one axis.
pub fn out_of_field_pos(half: f64) -> impl Strategy<Value = WorldPos> {
    let anywhere = -half - 100.0..half + 100.0;
    prop_oneof![
        (beyond(half), anywhere.clone()).prop_map(|(x, z)| WorldPos::from_num(x, z)),
        (anywhere, beyond(half)).prop_map(|(x, z)| WorldPos::from_num(x, z)),
    ]
}
