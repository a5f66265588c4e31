//! Simulation configuration.

use crate::core::config::LabyrinthConfig;

/// Configuration for a batch of simulated games.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = entropy)
    pub seed: Option<u64>,

    /// Player actions per game before giving up
    pub max_turns_per_run: u64,

    /// Revives allowed per game before a defeat is final
    pub max_revives: u32,

    /// Labyrinth layout every run is generated with
    pub labyrinth: LabyrinthConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            max_turns_per_run: 5_000,
            max_revives: 0,
            labyrinth: LabyrinthConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, fast batch for smoke checks.
    pub fn quick() -> Self {
        Self {
            num_runs: 10,
            max_turns_per_run: 1_000,
            ..Default::default()
        }
    }
}
