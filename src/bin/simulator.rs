//! Labyrinth Headless Simulator
//!
//! Plays batches of seeded games with an exploring bot, without any UI, and
//! prints escape/defeat rates and pacing.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of games with incrementing seeds (default: 100)
//!   --seed N        Base RNG seed (default: 42)
//!   --turns N       Player actions per game before timing out (default: 5000)
//!   --revives N     Revives allowed per game (default: 0)
//!   --config FILE   Labyrinth layout as JSON
//!   --json          Print the report as JSON
//!   --verbose       One line per run
//!   --quiet         Only the final summary line
//!
//! Set RUST_LOG=labyrinth=debug to trace generation and every game message.

use labyrinth::core::config::LabyrinthConfig;
use labyrinth::simulator::{run_simulation, SimConfig};
use std::process::exit;

// ── CLI Configuration ────────────────────────────────────────────────

struct CliOptions {
    sim: SimConfig,
    json: bool,
    quiet: bool,
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("{flag} requires a number");
            exit(1);
        }
    }
}

fn load_layout(path: Option<&String>) -> LabyrinthConfig {
    let Some(path) = path else {
        eprintln!("--config requires a file path");
        exit(1);
    };
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| LabyrinthConfig::from_json(&text).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Could not load {path}: {err}");
            exit(1);
        }
    }
}

fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        sim: SimConfig::default(),
        json: false,
        quiet: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                options.sim.num_runs = number("--runs", args.get(i));
            }
            "--seed" => {
                i += 1;
                options.sim.seed = Some(number("--seed", args.get(i)));
            }
            "--turns" => {
                i += 1;
                options.sim.max_turns_per_run = number("--turns", args.get(i));
            }
            "--revives" => {
                i += 1;
                options.sim.max_revives = number("--revives", args.get(i));
            }
            "--config" => {
                i += 1;
                options.sim.labyrinth = load_layout(args.get(i));
            }
            "--json" => options.json = true,
            "--verbose" => options.sim.verbosity = 2,
            "--quiet" => {
                options.quiet = true;
                options.sim.verbosity = 0;
            }
            "--help" | "-h" => {
                print_usage();
                exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                exit(1);
            }
        }
        i += 1;
    }
    options
}

fn print_usage() {
    eprintln!(
        "Labyrinth Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of games with incrementing seeds (default: 100)\n\
         \x20 --seed N        Base RNG seed (default: 42)\n\
         \x20 --turns N       Player actions per game before timing out (default: 5000)\n\
         \x20 --revives N     Revives allowed per game (default: 0)\n\
         \x20 --config FILE   Labyrinth layout as JSON\n\
         \x20 --json          Print the report as JSON\n\
         \x20 --verbose       One line per run\n\
         \x20 --quiet         Only the final summary line\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = parse_args();
    let sim = &options.sim;

    if !options.quiet {
        eprintln!(
            "Labyrinth Simulator: {} run(s), seed={:?}, {}x{} x {} floors, max {} turns, {} revive(s)",
            sim.num_runs,
            sim.seed,
            sim.labyrinth.width,
            sim.labyrinth.height,
            sim.labyrinth.num_floors,
            sim.max_turns_per_run,
            sim.max_revives,
        );
    }

    let report = match run_simulation(sim) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Invalid labyrinth configuration: {err}");
            exit(1);
        }
    };

    if options.json {
        println!("{}", report.to_json());
    } else if options.quiet {
        println!(
            "runs={} escaped={} defeated={} timed_out={} avg_turns={:.1} avg_deaths={:.2}",
            report.num_runs,
            report.victories,
            report.defeats,
            report.timeouts,
            report.avg_turns,
            report.avg_deaths,
        );
    } else {
        println!("{}", report.to_text());
    }
}
