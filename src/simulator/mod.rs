//! Headless batch simulator.
//!
//! Plays many seeded games with a simple exploring bot to check that
//! labyrinths are completable and to gauge difficulty:
//! - escape, defeat and timeout rates
//! - turns to escape
//! - deaths and kills per run

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run, BotAction};
