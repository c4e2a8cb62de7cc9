//! Cursor-driven placement session.
//!
//! The session owns the occupancy grid and at most one pending tile.
//! Each frame it receives the already-resolved pointer state, snaps the
//! preview to the hovered cell center, recomputes validity, recolors
//! the preview, and commits on a confirmed valid frame.
//!
//! All per-frame external state arrives as plain data in [`FrameInput`],
//! so a session is fully deterministic and testable without an engine
//! loop.

use serde::{Deserialize, Serialize};

use crate::config::PlacementConfig;
use crate::error::Result;
use crate::grid::{CellCoord, OccupancyGrid};
use crate::mapper::GridMapper;
use crate::math::WorldPos;
use crate::validate::PlacementValidator;
use crate::visual::TileVisual;

/// Identifies a tile kind (the asset selected for placement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKind(pub u32);

/// Identifies a committed tile instance, issued by the spawner seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u64);

/// Instantiation seam: produces preview visuals and permanent tile
/// instances. The engine-side implementation owns the actual assets.
pub trait TileSpawner {
    /// Build the colorable preview visual for a tile kind.
    fn preview(&mut self, kind: TileKind) -> TileVisual;

    /// Spawn a permanent, independent tile instance at a world
    /// position.
    fn spawn(&mut self, kind: TileKind, position: WorldPos) -> TileId;
}

/// Per-frame external state, resolved by the host before the frame
/// callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Where the pointer ray intersected the placement surface this
    /// frame, if anywhere.
    pub pointer_hit: Option<WorldPos>,
    /// Edge-triggered: primary action pressed this frame.
    pub confirm: bool,
}

impl FrameInput {
    /// A frame hovering at `pos` with no confirmation.
    #[must_use]
    pub const fn hover(pos: WorldPos) -> Self {
        Self {
            pointer_hit: Some(pos),
            confirm: false,
        }
    }

    /// A frame hovering at `pos` with the primary action pressed.
    #[must_use]
    pub const fn confirm(pos: WorldPos) -> Self {
        Self {
            pointer_hit: Some(pos),
            confirm: true,
        }
    }

    /// A frame where the pointer ray hit nothing.
    pub const NO_HIT: Self = Self {
        pointer_hit: None,
        confirm: false,
    };
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No pending tile; frames are no-ops.
    #[default]
    Idle,
    /// A pending tile is tracking the cursor.
    Previewing,
}

/// Events produced by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEvent {
    /// A tile was committed to the grid.
    Committed {
        /// Kind of the committed tile.
        kind: TileKind,
        /// Cell the tile occupies.
        cell: CellCoord,
        /// World position of the spawned instance (cell center).
        position: WorldPos,
        /// Instance id issued by the spawner.
        tile: TileId,
    },
}

/// The in-progress preview tile.
#[derive(Debug, Clone)]
struct PendingTile {
    kind: TileKind,
    visual: TileVisual,
    position: WorldPos,
    valid: bool,
}

/// Tracks one tile-placement interaction from selection to commit.
#[derive(Debug)]
pub struct PlacementSession {
    config: PlacementConfig,
    grid: OccupancyGrid,
    mapper: GridMapper,
    pending: Option<PendingTile>,
}

impl PlacementSession {
    /// Create a session over an empty field.
    ///
    /// The occupancy grid and the coordinate mapper are both derived
    /// from `config`, so their bounds cannot diverge.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation.
    pub fn new(config: PlacementConfig) -> Result<Self> {
        config.validate()?;
        let grid = OccupancyGrid::new(config.field_width, config.field_depth);
        let mapper = GridMapper::new(&config);
        Ok(Self {
            config,
            grid,
            mapper,
            pending: None,
        })
    }

    /// Start placing a tile of `kind`.
    ///
    /// Any existing pending tile is discarded without touching the
    /// grid (implicit cancel); only the new preview is active
    /// afterwards.
    pub fn begin(&mut self, kind: TileKind, spawner: &mut dyn TileSpawner) {
        if let Some(previous) = self.pending.take() {
            tracing::debug!(
                "Replacing pending tile {:?} with {:?}",
                previous.kind,
                kind
            );
        }

        let mut visual = spawner.preview(kind);
        visual.set_color(self.config.deny_color);
        self.pending = Some(PendingTile {
            kind,
            visual,
            position: WorldPos::ZERO,
            valid: false,
        });
    }

    /// Advance the session by one frame.
    ///
    /// No-op in [`SessionState::Idle`]. In [`SessionState::Previewing`]:
    /// snaps the preview to the hovered cell center (or the origin
    /// sentinel when the ray hit nothing), recomputes validity,
    /// applies the permit/deny color, and commits when `confirm` is
    /// set on a valid frame.
    pub fn on_frame(
        &mut self,
        input: &FrameInput,
        spawner: &mut dyn TileSpawner,
    ) -> Option<PlacementEvent> {
        let pending = self.pending.as_mut()?;

        // Resolve the cursor: snap hits to the hovered cell center,
        // fall back to the origin sentinel when the ray missed.
        let (position, hovered) = match input.pointer_hit {
            Some(hit) => {
                let cell = self.mapper.world_to_cell(hit);
                (self.mapper.cell_to_world_center(cell), true)
            }
            None => (WorldPos::ZERO, false),
        };
        pending.position = position;

        let validator = PlacementValidator::new(&self.grid, &self.mapper);
        pending.valid = hovered && validator.is_valid(position);
        pending.visual.set_color(if pending.valid {
            self.config.permit_color
        } else {
            self.config.deny_color
        });

        if !(input.confirm && pending.valid) {
            return None;
        }

        // Commit: validity guarantees the hovered cell is in range.
        let cell = validator.hovered_cell(position)?;
        self.grid.mark_occupied(cell);
        let tile = spawner.spawn(pending.kind, position);
        pending.visual.set_color(self.config.default_color);

        tracing::info!(
            "Committed {:?} at cell ({}, {}) as {:?}",
            pending.kind,
            cell.x,
            cell.z,
            tile
        );

        let event = PlacementEvent::Committed {
            kind: pending.kind,
            cell,
            position,
            tile,
        };
        self.pending = None;
        Some(event)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.pending.is_some() {
            SessionState::Previewing
        } else {
            SessionState::Idle
        }
    }

    /// Whether a pending tile is tracking the cursor.
    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.pending.is_some()
    }

    /// Kind of the pending tile, if any.
    #[must_use]
    pub fn preview_kind(&self) -> Option<TileKind> {
        self.pending.as_ref().map(|p| p.kind)
    }

    /// Current preview position, if a tile is pending.
    #[must_use]
    pub fn preview_position(&self) -> Option<WorldPos> {
        self.pending.as_ref().map(|p| p.position)
    }

    /// Whether the current preview position is a legal placement.
    #[must_use]
    pub fn preview_valid(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.valid)
    }

    /// The pending tile's visual, if any.
    #[must_use]
    pub fn preview_visual(&self) -> Option<&TileVisual> {
        self.pending.as_ref().map(|p| &p.visual)
    }

    /// The occupancy grid.
    #[must_use]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The coordinate mapper.
    #[must_use]
    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    /// The session's configuration.
    #[must_use]
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSpawner {
        previews: u32,
        spawned: Vec<(TileKind, WorldPos)>,
    }

    impl CountingSpawner {
        fn new() -> Self {
            Self {
                previews: 0,
                spawned: Vec::new(),
            }
        }
    }

    impl TileSpawner for CountingSpawner {
        fn preview(&mut self, _kind: TileKind) -> TileVisual {
            self.previews += 1;
            TileVisual::new(2, crate::visual::Color::WHITE)
        }

        fn spawn(&mut self, kind: TileKind, position: WorldPos) -> TileId {
            self.spawned.push((kind, position));
            TileId(self.spawned.len() as u64)
        }
    }

    fn session() -> PlacementSession {
        PlacementSession::new(PlacementConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        let session = session();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.preview_valid());
    }

    #[test]
    fn test_on_frame_in_idle_is_noop() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();

        let event = session.on_frame(
            &FrameInput::confirm(WorldPos::ZERO),
            &mut spawner,
        );

        assert!(event.is_none());
        assert!(spawner.spawned.is_empty());
        assert_eq!(session.grid().occupied_count(), 0);
    }

    #[test]
    fn test_begin_enters_previewing() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();

        session.begin(TileKind(7), &mut spawner);

        assert_eq!(session.state(), SessionState::Previewing);
        assert_eq!(session.preview_kind(), Some(TileKind(7)));
        assert_eq!(spawner.previews, 1);
    }

    #[test]
    fn test_begin_replaces_pending_tile() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();

        session.begin(TileKind(1), &mut spawner);
        session.on_frame(
            &FrameInput::hover(WorldPos::from_num(1.2, 1.2)),
            &mut spawner,
        );
        session.begin(TileKind(2), &mut spawner);

        // Implicit cancel: no grid mutation, only the new preview active
        assert_eq!(session.grid().occupied_count(), 0);
        assert_eq!(session.preview_kind(), Some(TileKind(2)));
        assert_eq!(spawner.previews, 2);
        assert!(spawner.spawned.is_empty());
    }

    #[test]
    fn test_hover_snaps_to_cell_center() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();
        session.begin(TileKind(1), &mut spawner);

        session.on_frame(
            &FrameInput::hover(WorldPos::from_num(1.2, -0.7)),
            &mut spawner,
        );

        // 1.2 falls in cell 6, -0.7 in cell 4; centers at 1.5 and -0.5
        assert_eq!(
            session.preview_position(),
            Some(WorldPos::from_num(1.5, -0.5))
        );
        assert!(session.preview_valid());
    }

    #[test]
    fn test_no_hit_moves_preview_to_sentinel_and_denies() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();
        session.begin(TileKind(1), &mut spawner);

        let event = session.on_frame(&FrameInput::NO_HIT, &mut spawner);

        assert!(event.is_none());
        assert_eq!(session.preview_position(), Some(WorldPos::ZERO));
        assert!(!session.preview_valid());
    }

    #[test]
    fn test_confirm_on_no_hit_never_commits() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();
        session.begin(TileKind(1), &mut spawner);

        let input = FrameInput {
            pointer_hit: None,
            confirm: true,
        };
        let event = session.on_frame(&input, &mut spawner);

        assert!(event.is_none());
        assert!(spawner.spawned.is_empty());
        assert_eq!(session.grid().occupied_count(), 0);
        assert!(session.is_previewing());
    }

    #[test]
    fn test_confirm_commits_and_returns_to_idle() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();
        session.begin(TileKind(3), &mut spawner);

        let hover = session
            .mapper()
            .cell_to_world_center(CellCoord::new(3, 3));
        let event = session.on_frame(&FrameInput::confirm(hover), &mut spawner);

        let Some(PlacementEvent::Committed {
            kind,
            cell,
            position,
            tile,
        }) = event
        else {
            panic!("expected a commit event");
        };
        assert_eq!(kind, TileKind(3));
        assert_eq!(cell, CellCoord::new(3, 3));
        assert_eq!(position, hover);
        assert_eq!(tile, TileId(1));

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.grid().is_occupied(CellCoord::new(3, 3)));
        assert_eq!(session.grid().occupied_count(), 1);
        assert_eq!(spawner.spawned, vec![(TileKind(3), hover)]);
    }

    #[test]
    fn test_confirm_while_invalid_is_noop() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();
        session.begin(TileKind(1), &mut spawner);

        // x = 6 is outside the [-5, 5] field
        let event = session.on_frame(
            &FrameInput::confirm(WorldPos::from_num(6.0, 0.0)),
            &mut spawner,
        );

        assert!(event.is_none());
        assert!(spawner.spawned.is_empty());
        assert_eq!(session.grid().occupied_count(), 0);
        assert_eq!(session.state(), SessionState::Previewing);
    }

    #[test]
    fn test_extreme_hover_is_denied_without_fault() {
        use crate::math::Fixed;

        let mut session = session();
        let mut spawner = CountingSpawner::new();
        session.begin(TileKind(1), &mut spawner);

        let far = WorldPos::new(Fixed::MAX, Fixed::MIN);
        let event = session.on_frame(&FrameInput::confirm(far), &mut spawner);

        assert!(event.is_none());
        assert!(!session.preview_valid());
        assert_eq!(session.grid().occupied_count(), 0);
        assert!(spawner.spawned.is_empty());
    }

    #[test]
    fn test_preview_colors_follow_validity() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();
        session.begin(TileKind(1), &mut spawner);

        let permit = session.config().permit_color;
        let deny = session.config().deny_color;

        session.on_frame(
            &FrameInput::hover(WorldPos::from_num(0.2, 0.2)),
            &mut spawner,
        );
        assert!(session
            .preview_visual()
            .unwrap()
            .element_colors()
            .iter()
            .all(|c| *c == permit));

        session.on_frame(
            &FrameInput::hover(WorldPos::from_num(8.0, 0.0)),
            &mut spawner,
        );
        assert!(session
            .preview_visual()
            .unwrap()
            .element_colors()
            .iter()
            .all(|c| *c == deny));
    }

    #[test]
    fn test_recommit_on_occupied_cell_is_denied() {
        let mut session = session();
        let mut spawner = CountingSpawner::new();
        let hover = WorldPos::from_num(2.2, 2.2);

        session.begin(TileKind(1), &mut spawner);
        assert!(session
            .on_frame(&FrameInput::confirm(hover), &mut spawner)
            .is_some());

        session.begin(TileKind(1), &mut spawner);
        let event = session.on_frame(&FrameInput::confirm(hover), &mut spawner);

        assert!(event.is_none());
        assert_eq!(session.grid().occupied_count(), 1);
        assert_eq!(spawner.spawned.len(), 1);
        assert!(session.is_previewing());
    }
}
