//! # Placer Core
//!
//! Deterministic tile-placement core for a grid-based building game.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No engine loop
//! - No floating-point math in placement decisions (uses fixed-point)
//!
//! The host engine resolves pointer rays and owns the actual assets;
//! it feeds per-frame state into [`session::PlacementSession::on_frame`]
//! as plain data and implements the [`session::TileSpawner`] seam. This
//! separation enables deterministic unit testing without a live engine
//! loop.
//!
//! ## Crate Structure
//!
//! - [`config`] - Placement field configuration
//! - [`grid`] - Occupancy tracking
//! - [`mapper`] - World-space to cell-space conversion
//! - [`validate`] - Placement legality checks
//! - [`session`] - The placement state machine
//! - [`visual`] - Preview color feedback
//! - [`math`] - Fixed-point math utilities
//!
//! ## Example
//!
//! ```
//! use placer_core::prelude::*;
//!
//! struct NullSpawner(u64);
//!
//! impl TileSpawner for NullSpawner {
//!     fn preview(&mut self, _kind: TileKind) -> TileVisual {
//!         TileVisual::new(1, Color::WHITE)
//!     }
//!     fn spawn(&mut self, _kind: TileKind, _position: WorldPos) -> TileId {
//!         self.0 += 1;
//!         TileId(self.0)
//!     }
//! }
//!
//! let mut session = PlacementSession::new(PlacementConfig::default()).unwrap();
//! let mut spawner = NullSpawner(0);
//!
//! session.begin(TileKind(1), &mut spawner);
//! let event = session.on_frame(
//!     &FrameInput::confirm(WorldPos::from_num(1.2, 1.2)),
//!     &mut spawner,
//! );
//! assert!(matches!(event, Some(PlacementEvent::Committed { .. })));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod grid;
pub mod mapper;
pub mod math;
pub mod session;
pub mod validate;
pub mod visual;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::PlacementConfig;
    pub use crate::error::{PlacementError, Result};
    pub use crate::grid::{CellCoord, OccupancyGrid};
    pub use crate::mapper::GridMapper;
    pub use crate::math::{Fixed, WorldPos};
    pub use crate::session::{
        FrameInput, PlacementEvent, PlacementSession, SessionState, TileId, TileKind, TileSpawner,
    };
    pub use crate::validate::PlacementValidator;
    pub use crate::visual::{Color, TileVisual};
}
