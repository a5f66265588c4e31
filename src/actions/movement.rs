use crate::core::labyrinth::Labyrinth;
use crate::dungeon::Direction;
use crate::items::AddOutcome;
use rand::Rng;
use tracing::trace;

impl<R: Rng> Labyrinth<R> {
    /// Moves one room in `direction` if the current room has a passage that way.
    /// Keys and objective items in the new room are picked up automatically.
    /// Returns true if the player moved.
    pub fn move_player(&mut self, direction: Direction, player_name: &str, elapsed_secs: u64) -> bool {
        self.stamp(player_name, elapsed_secs);
        if !self.begin_action() {
            return false;
        }

        let from = self.player.position;
        let open = self
            .current_room()
            .is_some_and(|room| room.has_exit_towards(direction));
        let target = self
            .floors
            .get(from.floor)
            .and_then(|floor| floor.neighbor(from, direction));
        let Some(to) = target.filter(|_| open) else {
            self.messages.push("You can't go that way.");
            return false;
        };

        self.advance_effects();
        self.relocate_player(to);
        trace!(from = %from, to = %to, "player moved");
        self.auto_pickup();
        true
    }

    fn auto_pickup(&mut self) {
        let here = self.player.position;
        let Some(&item_id) = self.placements.items.get(&here) else {
            return;
        };
        let Some(item) = self.catalog.get(item_id).cloned() else {
            return;
        };
        if !item.item_type.is_auto_pickup() {
            return;
        }
        if self.grant_item(&item) != AddOutcome::AlreadyHeld {
            self.placements.items.remove(&here);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::ANCIENT_GEAR;
    use rand_chacha::ChaCha8Rng;

    fn game() -> Labyrinth<ChaCha8Rng> {
        let mut game = Labyrinth::from_seed(5, 0);
        game.clear_messages();
        game
    }

    fn open_and_closed(game: &Labyrinth<ChaCha8Rng>) -> (Option<Direction>, Option<Direction>) {
        let room = game.current_room().unwrap();
        let open = Direction::ALL.into_iter().find(|d| room.has_exit_towards(*d));
        let closed = Direction::ALL.into_iter().find(|d| !room.has_exit_towards(*d));
        (open, closed)
    }

    #[test]
    fn test_blocked_move_changes_nothing() {
        let mut game = game();
        let start = game.location();
        let (_, closed) = open_and_closed(&game);
        let Some(closed) = closed else {
            return;
        };
        assert!(!game.move_player(closed, "tester", 0));
        assert_eq!(game.location(), start);
        assert_eq!(game.messages(), ["You can't go that way."]);
    }

    #[test]
    fn test_open_move_relocates_player() {
        let mut game = game();
        let start = game.location();
        let direction = open_and_closed(&game).0.unwrap();
        assert!(game.move_player(direction, "tester", 0));
        let now = game.location();
        assert_eq!(start.manhattan_distance(now), 1);
        assert!(!game.room(start).unwrap().has_player);
        assert!(game.room(now).unwrap().has_player);
        assert!(game.room(now).unwrap().visited);
    }

    #[test]
    fn test_objective_item_picked_up_on_entry() {
        let mut game = game();
        let direction = open_and_closed(&game).0.unwrap();
        let target = game.location().step(direction).unwrap();
        let gear = game.catalog.ancient_gear.id;
        game.placements.items.insert(target, gear);

        game.move_player(direction, "tester", 0);
        assert!(game.has_item(ANCIENT_GEAR));
        assert!(!game.placements.items.contains_key(&target));
        assert!(game.messages.contains(ANCIENT_GEAR));
    }

    #[test]
    fn test_regular_item_not_picked_up_on_entry() {
        let mut game = game();
        let direction = open_and_closed(&game).0.unwrap();
        let target = game.location().step(direction).unwrap();
        let vial = game.catalog.by_name("Vial of Lumina").unwrap().id;
        game.placements.items.insert(target, vial);

        game.move_player(direction, "tester", 0);
        assert!(game.player.inventory.is_empty());
        assert_eq!(game.placements.items.get(&target), Some(&vial));
    }

    #[test]
    fn test_no_move_after_game_over() {
        let mut game = game();
        let start = game.location();
        let direction = open_and_closed(&game).0.unwrap();
        game.take_damage(1000, "a test");
        assert!(!game.move_player(direction, "tester", 0));
        assert_eq!(game.location(), start);
    }
}
