//! Simulation report generation.

use crate::core::result::Outcome;
use serde::Serialize;
use std::collections::BTreeMap;

/// What happened in one simulated game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub seed: Option<u64>,
    /// `None` when the turn limit ran out first
    pub outcome: Option<Outcome>,
    pub turns: u64,
    pub deaths: u32,
    pub deepest_floor: usize,
    pub enemies_defeated: u32,
    pub boss_defeated: bool,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub victories: u32,
    pub defeats: u32,
    pub timeouts: u32,

    pub avg_turns: f64,
    pub avg_turns_to_victory: f64,
    pub avg_deaths: f64,
    pub avg_enemies_defeated: f64,
    pub boss_kill_rate: f64,

    /// Deepest floor reached (0-based) -> number of runs
    pub floor_distribution: BTreeMap<usize, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |outcome: Option<Outcome>| {
            runs.iter().filter(|r| r.outcome == outcome).count() as u32
        };
        let victories = count(Some(Outcome::Victory));
        let defeats = count(Some(Outcome::Defeat));
        let timeouts = count(None);

        let per_run = num_runs.max(1) as f64;
        let avg_turns = runs.iter().map(|r| r.turns as f64).sum::<f64>() / per_run;
        let avg_turns_to_victory = runs
            .iter()
            .filter(|r| r.outcome == Some(Outcome::Victory))
            .map(|r| r.turns as f64)
            .sum::<f64>()
            / victories.max(1) as f64;
        let avg_deaths = runs.iter().map(|r| r.deaths as f64).sum::<f64>() / per_run;
        let avg_enemies_defeated =
            runs.iter().map(|r| r.enemies_defeated as f64).sum::<f64>() / per_run;
        let boss_kill_rate = runs.iter().filter(|r| r.boss_defeated).count() as f64 / per_run;

        let mut floor_distribution = BTreeMap::new();
        for run in &runs {
            *floor_distribution.entry(run.deepest_floor).or_insert(0) += 1;
        }

        Self {
            num_runs,
            victories,
            defeats,
            timeouts,
            avg_turns,
            avg_turns_to_victory,
            avg_deaths,
            avg_enemies_defeated,
            boss_kill_rate,
            floor_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        let pct = |n: u32| n as f64 / self.num_runs.max(1) as f64 * 100.0;

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  LABYRINTH SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} escaped ({:.1}%), {} defeated ({:.1}%), {} timed out\n\n",
            self.num_runs,
            self.victories,
            pct(self.victories),
            self.defeats,
            pct(self.defeats),
            self.timeouts
        ));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Turns:            {:.1}\n", self.avg_turns));
        report.push_str(&format!(
            "  Avg Turns to Escape:  {:.1}\n",
            self.avg_turns_to_victory
        ));
        report.push_str(&format!("  Avg Deaths:           {:.2}\n", self.avg_deaths));
        report.push_str(&format!(
            "  Avg Enemies Defeated: {:.1}\n",
            self.avg_enemies_defeated
        ));
        report.push_str(&format!(
            "  Guardian Kill Rate:   {:.1}%\n\n",
            self.boss_kill_rate * 100.0
        ));

        report.push_str("── DEEPEST FLOOR ────────────────────────────────────────────────\n");
        for (floor, runs) in &self.floor_distribution {
            let share = pct(*runs);
            let bar = "█".repeat((share / 5.0) as usize);
            report.push_str(&format!("  Floor {:2}: {:>5.1}% {}\n", floor + 1, share, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
