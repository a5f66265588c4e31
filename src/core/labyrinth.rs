//! The authoritative game state.
//!
//! `Labyrinth` owns every floor, placement map, enemy and the player. Player
//! actions live in `crate::actions`, combat and enemy ticks in `crate::combat`;
//! this module holds construction, the read-only query surface and the small
//! helpers those modules share.

use super::config::{ConfigError, LabyrinthConfig};
use super::constants::{ENEMY_TICK_BASE_MS, ENEMY_TICK_MIN_MS, ENEMY_TICK_STEP_MS};
use super::messages::MessageLog;
use super::result::{GameResult, Outcome, SessionStamp};
use crate::combat::{Enemy, EnemyId};
use crate::dungeon::{
    connect_floors, generate_floor, populate_floor, Floor, PlacementIndex, Position, Room,
    StairLink,
};
use crate::items::{AddOutcome, Catalog, Effect, Equipment, InventoryEntry, Item, ItemId};
use crate::objectives::{evaluate, Objective};
use crate::player::Player;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use tracing::debug;

pub struct Labyrinth<R: Rng = ChaCha8Rng> {
    pub config: LabyrinthConfig,
    pub floors: Vec<Floor>,
    pub stairs: Vec<StairLink>,
    pub catalog: Catalog,
    pub placements: PlacementIndex,
    pub enemies: BTreeMap<EnemyId, Enemy>,
    pub player: Player,
    pub current_floor: usize,
    pub messages: MessageLog,
    pub session: SessionStamp,
    pub result: Option<GameResult>,
    pub rng: R,
}

impl Labyrinth<ChaCha8Rng> {
    /// A fresh game with the default layout, seeded from entropy.
    pub fn new(initial_deaths: u32) -> Self {
        Self::build(
            LabyrinthConfig::default(),
            initial_deaths,
            ChaCha8Rng::from_entropy(),
        )
    }

    /// A reproducible game with the default layout.
    pub fn from_seed(seed: u64, initial_deaths: u32) -> Self {
        Self::build(
            LabyrinthConfig::default(),
            initial_deaths,
            ChaCha8Rng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> Labyrinth<R> {
    pub fn with_config(
        config: LabyrinthConfig,
        initial_deaths: u32,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, initial_deaths, rng))
    }

    /// Generates every floor, places entities and positions the player.
    /// `config` must already be valid.
    fn build(config: LabyrinthConfig, initial_deaths: u32, mut rng: R) -> Self {
        let catalog = Catalog::build(&mut rng);
        let mut placements = PlacementIndex::default();

        let mut floors: Vec<Floor> = (0..config.num_floors)
            .map(|index| generate_floor(index, &config, &placements, &mut rng))
            .collect();
        let stairs = connect_floors(&mut floors);

        let mut enemies = BTreeMap::new();
        for floor in &mut floors {
            populate_floor(
                floor,
                &config,
                &catalog,
                &mut placements,
                &mut enemies,
                &mut rng,
            );
        }

        let start = floors
            .first()
            .and_then(|f| f.find_room(|r| r.has_entrance))
            .unwrap_or(Position::new(0, 0, 0));
        let player = Player::new(
            start,
            config.player_max_health,
            config.initial_search_radius,
            initial_deaths,
        );

        let mut labyrinth = Self {
            config,
            floors,
            stairs,
            catalog,
            placements,
            enemies,
            player,
            current_floor: 0,
            messages: MessageLog::default(),
            session: SessionStamp::default(),
            result: None,
            rng,
        };
        if let Some(room) = labyrinth.room_mut(start) {
            room.has_player = true;
        }
        labyrinth.refresh_visited();
        debug!(start = %start, enemies = labyrinth.enemies.len(), "labyrinth ready");
        labyrinth
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn location(&self) -> Position {
        self.player.position
    }

    pub fn health(&self) -> u32 {
        self.player.health
    }

    pub fn max_health(&self) -> u32 {
        self.player.max_health
    }

    pub fn deaths(&self) -> u32 {
        self.player.deaths
    }

    pub fn current_floor(&self) -> usize {
        self.current_floor
    }

    pub fn final_floor(&self) -> usize {
        self.config.final_floor()
    }

    pub fn room(&self, position: Position) -> Option<&Room> {
        self.floors.get(position.floor)?.room(position)
    }

    pub fn room_mut(&mut self, position: Position) -> Option<&mut Room> {
        self.floors.get_mut(position.floor)?.room_mut(position)
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.room(self.player.position)
    }

    /// Copy of a floor's rooms, row-major, with live player and visited flags.
    pub fn map_grid(&self, floor: usize) -> Option<Vec<Room>> {
        self.floors.get(floor).map(|f| f.rooms.clone())
    }

    /// Visited positions on the current floor.
    pub fn visited_cells(&self) -> BTreeSet<Position> {
        self.floors
            .get(self.current_floor)
            .map(|f| {
                f.rooms
                    .iter()
                    .filter(|r| r.visited)
                    .map(|r| r.position)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn inventory(&self) -> Vec<InventoryEntry> {
        self.player.inventory.entries().cloned().collect()
    }

    pub fn equipped(&self) -> &Equipment {
        &self.player.equipment
    }

    pub fn search_radius(&self) -> u32 {
        self.player.search_radius
    }

    /// How far the player can see: search radius plus any compass bonus.
    pub fn sight_radius(&self) -> u32 {
        let compass = self.player.equipment.compass;
        self.player.search_radius + self.equipped_bonus(compass, Effect::SightBoost)
    }

    pub fn objective(&self) -> Objective {
        evaluate(
            self.current_floor,
            self.final_floor(),
            &self.player,
            self.current_room(),
        )
    }

    pub fn is_game_over(&self) -> bool {
        self.player.is_game_over
    }

    pub fn game_result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn boss_defeated(&self) -> bool {
        self.player.boss_defeated
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(&id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.catalog.get(id)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.player.inventory.has_item_named(name)
    }

    pub fn revealed_static_items(&self) -> &BTreeSet<Position> {
        &self.placements.revealed
    }

    pub fn decorations(&self) -> &BTreeMap<Position, bool> {
        &self.placements.decorations
    }

    pub fn messages(&self) -> &[String] {
        self.messages.pending()
    }

    pub fn take_messages(&mut self) -> Vec<String> {
        self.messages.take()
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Suggested enemy tick cadence for the current floor; deeper is faster.
    pub fn enemy_tick_interval(&self) -> Duration {
        let step = ENEMY_TICK_STEP_MS * self.current_floor as u64;
        let ms = ENEMY_TICK_BASE_MS.saturating_sub(step).max(ENEMY_TICK_MIN_MS);
        Duration::from_millis(ms)
    }

    // ── Shared helpers ───────────────────────────────────────────────

    pub(crate) fn equipped_bonus(&self, slot: Option<ItemId>, effect: Effect) -> u32 {
        slot.and_then(|id| self.player.inventory.get(id))
            .map(|entry| entry.item.bonus_for(effect))
            .unwrap_or(0)
    }

    /// Moves the player marker to `to`, updating floor and visited state.
    pub(crate) fn relocate_player(&mut self, to: Position) {
        let from = self.player.position;
        if let Some(room) = self.room_mut(from) {
            room.has_player = false;
        }
        self.player.position = to;
        self.current_floor = to.floor;
        if let Some(room) = self.room_mut(to) {
            room.has_player = true;
        }
        self.refresh_visited();
    }

    /// Marks every room within sight of the player as visited.
    pub(crate) fn refresh_visited(&mut self) {
        let center = self.player.position;
        let sight = self.sight_radius() as usize;
        if let Some(floor) = self.floors.get_mut(center.floor) {
            for room in &mut floor.rooms {
                if room.position.chebyshev_distance(center) <= sight {
                    room.visited = true;
                }
            }
        }
    }

    /// Adds a copy of `item` to the inventory and reports it.
    pub(crate) fn grant_item(&mut self, item: &Item) -> AddOutcome {
        let outcome = self.player.inventory.add(item);
        match outcome {
            AddOutcome::Added => self.messages.push(format!("You found {}!", item.name)),
            AddOutcome::Stacked(quantity) => self
                .messages
                .push(format!("You found {} (x{}).", item.name, quantity)),
            AddOutcome::AlreadyHeld => self
                .messages
                .push(format!("You already carry {}; you leave it behind.", item.name)),
        }
        outcome
    }

    /// Gives the player a copy of the Labyrinth Key.
    pub(crate) fn grant_key(&mut self) {
        let key = self.catalog.labyrinth_key.clone();
        self.grant_item(&key);
    }

    pub(crate) fn stamp(&mut self, player_name: &str, elapsed_secs: u64) {
        self.session.update(player_name, elapsed_secs);
    }

    /// Ends the game and records the result. Later calls are ignored.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.player.is_game_over = true;
        if self.result.is_some() {
            return;
        }
        self.result = Some(GameResult {
            outcome,
            name: self.session.player_name.clone(),
            time_secs: self.session.elapsed_secs,
            deaths: self.player.deaths,
            cause_of_death: match outcome {
                Outcome::Defeat => self.player.cause_of_death.clone(),
                Outcome::Victory => None,
            },
        });
        debug!(?outcome, deaths = self.player.deaths, "game over");
    }

    /// Gate at the top of every player action. Returns false once the game is over.
    pub(crate) fn begin_action(&mut self) -> bool {
        if self.player.is_game_over {
            self.messages.push("The adventure is over.");
            return false;
        }
        true
    }

    /// Advances active effects by one turn. Called once an action is accepted,
    /// so declined actions leave effects untouched.
    pub(crate) fn advance_effects(&mut self) {
        let healed = self.player.tick_effects();
        if healed > 0 {
            self.messages.push(format!(
                "You regenerate {} health. ({}/{})",
                healed, self.player.health, self.player.max_health
            ));
        }
    }

    /// Restores the player after a defeat. Deaths are not reset.
    pub fn revive_player(&mut self) {
        self.player.health = self.player.max_health;
        self.player.is_game_over = false;
        self.player.cause_of_death = None;
        self.player.effects.clear();
        self.result = None;
        self.messages.push("You are revived with full health.");
    }
}
