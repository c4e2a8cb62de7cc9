//! Scripted session runner.

use placer_core::math::WorldPos;
use placer_core::session::{
    FrameInput, PlacementEvent, PlacementSession, TileId, TileKind, TileSpawner,
};
use placer_core::visual::{Color, TileVisual};

use crate::script::{Script, ScriptError, ScriptStep};

/// A [`TileSpawner`] for headless runs: issues sequential ids and logs
/// each spawn instead of touching assets.
#[derive(Debug, Default)]
pub struct HeadlessSpawner {
    next_tile: u64,
}

impl TileSpawner for HeadlessSpawner {
    fn preview(&mut self, _kind: TileKind) -> TileVisual {
        // Headless previews have a single colorable element
        TileVisual::new(1, Color::WHITE)
    }

    fn spawn(&mut self, kind: TileKind, position: WorldPos) -> TileId {
        self.next_tile += 1;
        let tile = TileId(self.next_tile);
        tracing::info!("Spawned {:?} of {:?} at {:?}", tile, kind, position);
        tile
    }
}

/// Outcome of a scripted run.
#[derive(Debug)]
pub struct RunSummary {
    /// Number of frame steps executed.
    pub frames: u32,
    /// Commits in order of occurrence.
    pub commits: Vec<PlacementEvent>,
    /// The session after the final step, for occupancy inspection.
    pub session: PlacementSession,
}

/// Drive a full script through a fresh session.
///
/// # Errors
///
/// Returns an error if the script's placement config is rejected.
pub fn run_script(script: &Script) -> Result<RunSummary, ScriptError> {
    let mut session = PlacementSession::new(script.config.clone())?;
    let mut spawner = HeadlessSpawner::default();
    let mut frames = 0;
    let mut commits = Vec::new();

    for step in &script.steps {
        match *step {
            ScriptStep::Begin { kind } => {
                session.begin(TileKind(kind), &mut spawner);
            }
            ScriptStep::Frame { hit, confirm } => {
                frames += 1;
                let input = FrameInput {
                    pointer_hit: hit.map(|(x, z)| WorldPos::from_num(x, z)),
                    confirm,
                };
                let event = session.on_frame(&input, &mut spawner);
                tracing::debug!(
                    "Frame {}: hit={:?} confirm={} valid={}",
                    frames,
                    hit,
                    confirm,
                    session.preview_valid()
                );
                commits.extend(event);
            }
        }
    }

    Ok(RunSummary {
        frames,
        commits,
        session,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Script;
    use placer_core::grid::CellCoord;

    #[test]
    fn test_demo_script_commits_three_tiles() {
        let summary = run_script(&Script::demo()).unwrap();

        assert_eq!(summary.commits.len(), 3);
        assert_eq!(summary.session.grid().occupied_count(), 3);
        // (-1.5, -1.5) on a 10x10 unit field is cell (3, 3)
        assert!(summary.session.grid().is_occupied(CellCoord::new(3, 3)));
    }

    #[test]
    fn test_demo_script_denies_reuse_and_out_of_field() {
        let summary = run_script(&Script::demo()).unwrap();

        // The repeated cell and the out-of-field attempt never spawned,
        // so ids are dense over the three successful commits
        let tiles: Vec<TileId> = summary
            .commits
            .iter()
            .map(|event| {
                let PlacementEvent::Committed { tile, .. } = event;
                *tile
            })
            .collect();
        assert_eq!(tiles, vec![TileId(1), TileId(2), TileId(3)]);
    }

    #[test]
    fn test_invalid_config_surfaces_script_error() {
        let mut script = Script::demo();
        script.config.field_width = 0;

        let result: Result<RunSummary, ScriptError> = run_script(&script);
        assert!(matches!(result, Err(ScriptError::ConfigError(_))));
    }
}
