use crate::core::labyrinth::Labyrinth;
use crate::dungeon::Direction;
use crate::items::AddOutcome;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

impl<R: Rng> Labyrinth<R> {
    /// Searches the current room once per game.
    ///
    /// In order: picks up a regular item lying here, reveals an unseen static
    /// item, and rolls for a hidden passage. Each step that fires reports itself.
    pub fn search(&mut self) {
        if !self.begin_action() {
            return;
        }

        let here = self.player.position;
        match self.room_mut(here) {
            Some(room) if room.searched => {
                self.messages.push("You have already searched this room.");
                return;
            }
            Some(room) => room.searched = true,
            None => return,
        }
        self.advance_effects();

        let mut found = false;

        if let Some(&item_id) = self.placements.items.get(&here) {
            if let Some(item) = self.catalog.get(item_id).cloned() {
                found = true;
                if self.grant_item(&item) != AddOutcome::AlreadyHeld {
                    self.placements.items.remove(&here);
                }
            }
        }

        if let Some(&static_id) = self.placements.static_items.get(&here) {
            if self.placements.revealed.insert(here) {
                found = true;
                let name = self
                    .catalog
                    .get(static_id)
                    .map(|item| item.name.clone())
                    .unwrap_or_else(|| "something strange".to_string());
                self.messages.push(format!("You discovered {}!", name));
            }
        }

        if self.rng.gen_bool(self.config.hidden_passage_chance) {
            if let Some(direction) = self.open_hidden_passage() {
                found = true;
                self.messages.push(format!(
                    "You discovered a hidden passage to the {}!",
                    direction.name()
                ));
            }
        }

        if !found {
            self.messages.push("You found nothing new.");
        }
    }

    /// Opens a random closed passage out of the player's room, on both sides.
    /// Returns `None` when every in-bounds direction is already open.
    pub(crate) fn open_hidden_passage(&mut self) -> Option<Direction> {
        let here = self.player.position;
        let floor = self.floors.get_mut(here.floor)?;
        let candidates = floor.openable_directions(here);
        let direction = *candidates.choose(&mut self.rng)?;
        if floor.open_passage(here, direction) {
            debug!(at = %here, direction = direction.name(), "hidden passage opened");
            Some(direction)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LabyrinthConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn game(hidden_passage_chance: f64) -> Labyrinth<ChaCha8Rng> {
        let config = LabyrinthConfig {
            hidden_passage_chance,
            ..LabyrinthConfig::default()
        };
        let mut game =
            Labyrinth::with_config(config, 0, ChaCha8Rng::seed_from_u64(12)).unwrap();
        let here = game.location();
        game.placements.items.remove(&here);
        game.placements.static_items.remove(&here);
        game.clear_messages();
        game
    }

    #[test]
    fn test_empty_room_finds_nothing() {
        let mut game = game(0.0);
        game.search();
        assert!(game.current_room().unwrap().searched);
        assert_eq!(game.messages(), ["You found nothing new."]);
    }

    #[test]
    fn test_second_search_declined() {
        let mut game = game(0.0);
        game.search();
        game.clear_messages();
        game.search();
        assert_eq!(game.messages(), ["You have already searched this room."]);
    }

    #[test]
    fn test_search_picks_up_item() {
        let mut game = game(0.0);
        let here = game.location();
        let sword = game.catalog.by_name("Rusty Sword").unwrap().id;
        game.placements.items.insert(here, sword);
        game.search();
        assert!(game.has_item("Rusty Sword"));
        assert!(!game.placements.items.contains_key(&here));
        assert!(game.messages.contains("Rusty Sword"));
    }

    #[test]
    fn test_search_reveals_static_without_removing() {
        let mut game = game(0.0);
        let here = game.location();
        let well = game.catalog.static_items[1].id;
        game.placements.static_items.insert(here, well);
        game.search();
        assert!(game.revealed_static_items().contains(&here));
        assert_eq!(game.placements.static_items.get(&here), Some(&well));
        assert!(game.messages.contains("You discovered"));
    }

    #[test]
    fn test_hidden_passage_is_symmetric() {
        let mut game = game(1.0);
        let here = game.location();
        let before = game.floors[0].openable_directions(here);
        game.search();
        let after = game.floors[0].openable_directions(here);
        if before.is_empty() {
            assert_eq!(game.messages(), ["You found nothing new."]);
            return;
        }
        assert_eq!(after.len(), before.len() - 1);
        let opened = before.into_iter().find(|d| !after.contains(d)).unwrap();
        let neighbor = here.step(opened).unwrap();
        assert!(game.room(neighbor).unwrap().has_exit_towards(opened.opposite()));
        assert!(game.messages.contains("hidden passage"));
    }
}
