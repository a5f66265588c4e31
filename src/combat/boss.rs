use super::logic::CombatEvent;
use crate::core::labyrinth::Labyrinth;
use rand::seq::SliceRandom;
use rand::Rng;

const AMBIENT_MESSAGES: &[&str] = &[
    "A deep rumble echoes through the halls.",
    "You feel something ancient watching you.",
    "The torches flicker as a cold wind passes.",
    "Distant footsteps circle somewhere below.",
];

impl<R: Rng> Labyrinth<R> {
    /// Boss tick, driven externally while the player is on the final floor.
    pub fn process_boss_logic(&mut self) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.player.is_game_over
            || self.player.boss_defeated
            || self.current_floor != self.final_floor()
        {
            return events;
        }

        let boss = self
            .enemies
            .values()
            .find(|e| e.is_boss && !e.defeated)
            .map(|e| e.id);
        let Some(boss_id) = boss else {
            return events;
        };

        if self.placements.enemy_position(boss_id) == Some(self.player.position) {
            events.extend(self.initiate_combat(boss_id));
        } else if self.rng.gen_bool(self.config.boss_ambient_chance) {
            if let Some(line) = AMBIENT_MESSAGES.choose(&mut self.rng) {
                self.messages.push(*line);
            }
        }
        events
    }
}
