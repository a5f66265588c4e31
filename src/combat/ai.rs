//! Enemy movement tick.
//!
//! Enemies on the player's floor that can perceive the player take one greedy
//! step towards them. Stepping onto the player starts combat; anything still
//! sharing the player's room after everyone has moved fights as well.

use super::logic::CombatEvent;
use super::types::EnemyId;
use crate::core::constants::PERCEPTION_BONUS;
use crate::core::labyrinth::Labyrinth;
use crate::dungeon::{Direction, Position};
use rand::Rng;
use std::collections::HashSet;
use tracing::trace;

/// One unit step along an axis towards `to`.
fn step_towards(from: usize, to: usize) -> usize {
    use std::cmp::Ordering;
    match to.cmp(&from) {
        Ordering::Greater => from + 1,
        Ordering::Less => from - 1,
        Ordering::Equal => from,
    }
}

impl<R: Rng> Labyrinth<R> {
    /// Advances every enemy on the player's floor by one tick.
    pub fn process_enemy_movement(
        &mut self,
        player_name: &str,
        elapsed_secs: u64,
    ) -> Vec<CombatEvent> {
        self.stamp(player_name, elapsed_secs);
        let mut events = Vec::new();
        if self.player.is_game_over {
            return events;
        }

        let player_pos = self.player.position;
        let perception = (self.player.search_radius + PERCEPTION_BONUS) as usize;
        // Scratch state for this tick only
        let mut moved: HashSet<EnemyId> = HashSet::new();
        let mut engaged: HashSet<EnemyId> = HashSet::new();

        let roster = self.placements.enemies_on_floor(self.current_floor);
        for (from, id) in roster {
            if self.player.is_game_over {
                break;
            }
            if moved.contains(&id) {
                continue;
            }
            let Some(enemy) = self.enemies.get(&id) else {
                continue;
            };
            if enemy.defeated {
                continue;
            }
            if from.manhattan_distance(player_pos) > perception {
                continue;
            }

            let target = Position::new(
                step_towards(from.x, player_pos.x),
                step_towards(from.y, player_pos.y),
                from.floor,
            );
            if target == from || !self.can_enemy_step(from, target) {
                continue;
            }

            self.placements.enemies.remove(&from);
            self.placements.enemies.insert(target, id);
            moved.insert(id);
            trace!(enemy = %id, from = %from, to = %target, "enemy moved");

            if target == player_pos {
                engaged.insert(id);
                events.extend(self.initiate_combat(id));
            }
        }

        // Enemies sharing the player's room that did not start a fight above
        if !self.player.is_game_over {
            if let Some(&id) = self.placements.enemies.get(&player_pos) {
                let alive = self.enemies.get(&id).is_some_and(|e| !e.defeated);
                if alive && !engaged.contains(&id) {
                    events.extend(self.initiate_combat(id));
                }
            }
        }

        events
    }

    /// A step is allowed when the target room exists, no other enemy stands there,
    /// and the current room is open along every axis the step changes.
    fn can_enemy_step(&self, from: Position, target: Position) -> bool {
        if self.room(target).is_none() || self.placements.enemies.contains_key(&target) {
            return false;
        }
        let Some(room) = self.room(from) else {
            return false;
        };

        let horizontal = match target.x.cmp(&from.x) {
            std::cmp::Ordering::Greater => Some(Direction::East),
            std::cmp::Ordering::Less => Some(Direction::West),
            std::cmp::Ordering::Equal => None,
        };
        let vertical = match target.y.cmp(&from.y) {
            std::cmp::Ordering::Greater => Some(Direction::South),
            std::cmp::Ordering::Less => Some(Direction::North),
            std::cmp::Ordering::Equal => None,
        };

        [horizontal, vertical]
            .into_iter()
            .flatten()
            .all(|dir| room.has_exit_towards(dir))
    }
}
