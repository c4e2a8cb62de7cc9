//! Test fixtures and helpers.
//!
//! Pre-built sessions and a recording spawner double for consistent
//! testing across crates.

use fixed::types::I32F32;

use placer_core::prelude::*;

/// Create a fixed-point number from an integer.
#[must_use]
pub fn fixed(n: i32) -> I32F32 {
    I32F32::from_num(n)
}

/// Create a world position from floats (for tests only).
///
/// Note: In real placement code, positions arrive through the raycast
/// seam already converted. This is only for convenient test setup.
#[must_use]
pub fn pos(x: f64, z: f64) -> WorldPos {
    WorldPos::from_num(x, z)
}

/// Create a session over a `width` x `depth` field with unit cells and
/// default colors.
///
/// # Panics
///
/// Panics if the dimensions fail config validation.
#[must_use]
pub fn session(width: u32, depth: u32) -> PlacementSession {
    PlacementSession::new(PlacementConfig::default().with_field_size(width, depth))
        .expect("fixture config must be valid")
}

/// A [`TileSpawner`] double that records every call.
#[derive(Debug, Default)]
pub struct RecordingSpawner {
    /// Number of sub-elements each preview visual gets.
    pub preview_elements: usize,
    /// Kinds that previews were built for, in order.
    pub previewed: Vec<TileKind>,
    /// Every permanent spawn, in order.
    pub spawned: Vec<(TileKind, WorldPos)>,
}

impl RecordingSpawner {
    /// Create a recording spawner with 3-element previews.
    #[must_use]
    pub fn new() -> Self {
        Self {
            preview_elements: 3,
            previewed: Vec::new(),
            spawned: Vec::new(),
        }
    }
}

impl TileSpawner for RecordingSpawner {
    fn preview(&mut self, kind: TileKind) -> TileVisual {
        self.previewed.push(kind);
        TileVisual::new(self.preview_elements, Color::WHITE)
    }

    fn spawn(&mut self, kind: TileKind, position: WorldPos) -> TileId {
        self.spawned.push((kind, position));
        TileId(self.spawned.len() as u64)
    }
}
