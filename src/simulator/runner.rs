//! Batch runner driving whole games with a simple exploring bot.
//!
//! Each turn the bot performs one player action, then the enemy and boss ticks
//! run once, the same interleaving an interactive frontend produces.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::combat::CombatEvent;
use crate::core::config::ConfigError;
use crate::core::constants::LABYRINTH_KEY;
use crate::core::labyrinth::Labyrinth;
use crate::core::result::Outcome;
use crate::dungeon::{Direction, Position};
use crate::items::{Effect, EquipmentSlot, ItemId};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use tracing::{debug, trace};

const BOT_NAME: &str = "simulator";

/// Run the full batch and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, ConfigError> {
    config.labyrinth.validate()?;
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|s| s.wrapping_add(run_idx as u64));
        let stats = simulate_single_run(config, seed)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:?} after {} turns, floor {}, {} kills, {} deaths",
                run_idx + 1,
                config.num_runs,
                stats.outcome,
                stats.turns,
                stats.deepest_floor + 1,
                stats.enemies_defeated,
                stats.deaths
            );
        }
        runs.push(stats);
    }

    Ok(SimReport::from_runs(runs))
}

/// Plays one game to victory, final defeat or the turn limit.
pub fn simulate_single_run(
    config: &SimConfig,
    seed: Option<u64>,
) -> Result<RunStats, ConfigError> {
    let (game_rng, mut bot_rng) = match seed {
        Some(s) => (
            ChaCha8Rng::seed_from_u64(s),
            ChaCha8Rng::seed_from_u64(s ^ 0x5eed_b07),
        ),
        None => (ChaCha8Rng::from_entropy(), ChaCha8Rng::from_entropy()),
    };
    let mut game = Labyrinth::with_config(config.labyrinth.clone(), 0, game_rng)?;
    let mut bot = Bot::default();
    let mut stats = RunStats {
        seed,
        ..RunStats::default()
    };
    let mut revives = 0;

    while stats.turns < config.max_turns_per_run {
        if game.is_game_over() {
            let defeated = game
                .game_result()
                .is_some_and(|r| r.outcome == Outcome::Defeat);
            if defeated && revives < config.max_revives {
                revives += 1;
                game.revive_player();
            } else {
                break;
            }
        }

        stats.turns += 1;
        let elapsed = stats.turns;
        let action = bot.choose(&game, &mut bot_rng);
        trace!(turn = elapsed, ?action, "bot action");
        action.apply(&mut game, elapsed);
        bot.entered.insert(game.location());

        let mut events = game.process_enemy_movement(BOT_NAME, elapsed);
        events.extend(game.process_boss_logic());
        stats.enemies_defeated += events
            .iter()
            .filter(|e| matches!(e, CombatEvent::EnemyDefeated { .. }))
            .count() as u32;

        stats.deepest_floor = stats.deepest_floor.max(game.current_floor());
        for message in game.take_messages() {
            debug!(turn = elapsed, "{}", message);
        }
    }

    stats.outcome = game.game_result().map(|r| r.outcome);
    stats.deaths = game.deaths();
    stats.boss_defeated = game.boss_defeated();
    Ok(stats)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    Move(Direction),
    Search,
    Interact,
    Use(ItemId),
}

impl BotAction {
    fn apply<R: Rng>(self, game: &mut Labyrinth<R>, elapsed: u64) {
        match self {
            BotAction::Move(direction) => {
                game.move_player(direction, BOT_NAME, elapsed);
            }
            BotAction::Search => game.search(),
            BotAction::Interact => game.interact(BOT_NAME, elapsed),
            BotAction::Use(id) => game.use_item(id, BOT_NAME, elapsed),
        }
    }
}

/// Greedy explorer: heals when low, equips free slots, searches new rooms,
/// takes stairs and the exit, and otherwise wanders towards unentered rooms.
#[derive(Debug, Default)]
struct Bot {
    entered: HashSet<Position>,
    /// Fixtures already tried, so flavor-only ones do not stall the bot
    used_fixtures: HashSet<Position>,
}

impl Bot {
    fn choose<R: Rng>(&mut self, game: &Labyrinth<R>, rng: &mut impl Rng) -> BotAction {
        if let Some(id) = self.pick_item(game) {
            return BotAction::Use(id);
        }

        let here = game.location();
        let Some(room) = game.current_room() else {
            return BotAction::Search;
        };
        if !room.searched {
            return BotAction::Search;
        }
        if game.revealed_static_items().contains(&here) && self.used_fixtures.insert(here) {
            return BotAction::Interact;
        }
        if room.has_stairs_down || (room.has_exit && game.has_item(LABYRINTH_KEY)) {
            return BotAction::Interact;
        }

        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| room.has_exit_towards(*d))
            .collect();
        let fresh: Vec<Direction> = open
            .iter()
            .copied()
            .filter(|d| here.step(*d).is_some_and(|p| !self.entered.contains(&p)))
            .collect();
        let pool = if fresh.is_empty() { &open } else { &fresh };
        pool.choose(rng)
            .map(|d| BotAction::Move(*d))
            .unwrap_or(BotAction::Search)
    }

    fn pick_item<R: Rng>(&self, game: &Labyrinth<R>) -> Option<ItemId> {
        let inventory = game.inventory();
        if game.health() * 100 < game.max_health() * 40 {
            let potion = inventory.iter().find(|e| e.item.effect == Some(Effect::Heal));
            if let Some(entry) = potion {
                return Some(entry.item.id);
            }
        }
        inventory
            .iter()
            .filter(|e| e.item.item_type.is_equippable() && !e.is_equipped)
            .find(|e| {
                EquipmentSlot::for_item(&e.item)
                    .is_some_and(|slot| game.equipped().get(slot).is_none())
            })
            .map(|e| e.item.id)
    }
}
