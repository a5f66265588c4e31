//! Per-floor goals, recomputed on demand from the current state.

use crate::core::constants::{ANCIENT_GEAR, LABYRINTH_KEY};
use crate::dungeon::Room;
use crate::player::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub description: Vec<String>,
    pub completed: bool,
}

impl Objective {
    fn new(lines: &[&str], completed: bool) -> Self {
        Self {
            description: lines.iter().map(|s| s.to_string()).collect(),
            completed,
        }
    }
}

/// The final floor's goal wins over the fixed floor 0 / floor 1 goals, so a
/// single-floor labyrinth asks for the boss. Any other floor falls back to a
/// goal that never completes.
pub fn evaluate(
    floor: usize,
    final_floor: usize,
    player: &Player,
    room: Option<&Room>,
) -> Objective {
    let on_stairs = room.is_some_and(|r| r.has_stairs_down);
    let has = |name: &str| player.inventory.has_item_named(name);

    if floor == final_floor {
        return Objective::new(
            &[
                "Defeat the Labyrinth Guardian",
                "Claim the Labyrinth Key",
                "Escape through the exit",
            ],
            player.boss_defeated && has(LABYRINTH_KEY),
        );
    }

    match floor {
        0 => Objective::new(&["Find the stairs leading down"], on_stairs),
        1 => Objective::new(
            &["Recover the Ancient Gear", "Find the stairs leading down"],
            has(ANCIENT_GEAR) && on_stairs,
        ),
        _ => Objective::new(&["Survive"], false),
    }
}
