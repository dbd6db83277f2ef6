//! Headless session driver: the fixed-step loop without a renderer.

use crate::scripted_input::ScriptedInputPlayer;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};
use wildshore_core::{InputFrame, Tunables};
use wildshore_sim::GameSession;

/// Everything a headless run needs.
pub struct HeadlessConfig {
    /// Gameplay constants, already loaded from disk.
    pub tunables: Tunables,
    /// RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Number of ticks to simulate.
    pub max_ticks: u64,
    /// Optional JSON input script; neutral input without one.
    pub script: Option<PathBuf>,
}

/// Run a session to completion, logging drained events at debug level.
pub fn run(config: HeadlessConfig) -> Result<()> {
    let mut script = match &config.script {
        Some(path) => Some(ScriptedInputPlayer::from_path(path)?),
        None => None,
    };

    let mut session = match config.seed {
        Some(seed) => GameSession::with_seed(config.tunables, seed),
        None => GameSession::new(config.tunables),
    };

    for _ in 0..config.max_ticks {
        let input = script
            .as_mut()
            .map_or(InputFrame::NEUTRAL, ScriptedInputPlayer::next_frame);
        session.update(input);

        let (cues, effects) = session.drain_events();
        for cue in cues {
            debug!(?cue, tick = session.tick().0, "audio cue");
        }
        for effect in effects {
            debug!(?effect, tick = session.tick().0, "effect");
        }
    }

    let player = session.player();
    info!(
        ticks = session.tick().0,
        score = player.score,
        health = player.health,
        enemies = session.enemies().len(),
        hearts = session.hearts().len(),
        terrain_tiles = session.world().terrain_entries(),
        "headless run finished"
    );
    Ok(())
}
