//! Coordinate-keyed entity placement.
//!
//! Items, static fixtures and enemies each have their own single-occupancy map,
//! so one room can hold one of each at the same time.

use super::types::{Decoration, DecorationKind, Floor, Position, Room};
use crate::combat::{Enemy, EnemyArchetype, EnemyId};
use crate::core::config::LabyrinthConfig;
use crate::items::{Catalog, ItemId};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementIndex {
    pub items: BTreeMap<Position, ItemId>,
    pub static_items: BTreeMap<Position, ItemId>,
    pub enemies: BTreeMap<Position, EnemyId>,
    /// Torch decorations, value is whether the torch is lit
    pub decorations: BTreeMap<Position, bool>,
    /// Static fixtures the player has uncovered by searching
    pub revealed: BTreeSet<Position>,
}

impl PlacementIndex {
    /// True if nothing is placed at `position` in any occupancy map.
    pub fn is_vacant(&self, position: Position) -> bool {
        !self.items.contains_key(&position)
            && !self.static_items.contains_key(&position)
            && !self.enemies.contains_key(&position)
    }

    pub fn enemy_position(&self, id: EnemyId) -> Option<Position> {
        self.enemies
            .iter()
            .find(|(_, &enemy)| enemy == id)
            .map(|(&pos, _)| pos)
    }

    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<Position> {
        let pos = self.enemy_position(id)?;
        self.enemies.remove(&pos);
        Some(pos)
    }

    /// Enemies placed on `floor`, in position order.
    pub fn enemies_on_floor(&self, floor: usize) -> Vec<(Position, EnemyId)> {
        self.enemies
            .iter()
            .filter(|(pos, _)| pos.floor == floor)
            .map(|(&pos, &id)| (pos, id))
            .collect()
    }
}

/// A room is unoccupied when it carries no marker and no placement of any kind.
pub fn is_unoccupied(room: &Room, placements: &PlacementIndex) -> bool {
    !room.has_marker() && placements.is_vacant(room.position)
}

/// Picks a uniformly random unoccupied room, or `None` if the floor is full.
pub fn random_unoccupied_room(
    floor: &Floor,
    placements: &PlacementIndex,
    rng: &mut impl Rng,
) -> Option<Position> {
    let candidates: Vec<Position> = floor
        .rooms
        .iter()
        .filter(|room| is_unoccupied(room, placements))
        .map(|room| room.position)
        .collect();
    candidates.choose(rng).copied()
}

/// Populates one floor with items, fixtures, enemies, the boss and decorations.
pub fn populate_floor(
    floor: &mut Floor,
    config: &LabyrinthConfig,
    catalog: &Catalog,
    placements: &mut PlacementIndex,
    enemies: &mut BTreeMap<EnemyId, Enemy>,
    rng: &mut impl Rng,
) {
    let index = floor.index;
    let is_final = index == config.final_floor();

    for _ in 0..config.items_per_floor {
        let Some(item) = catalog.random_item(rng) else {
            break;
        };
        let id = item.id;
        if let Some(pos) = random_unoccupied_room(floor, placements, rng) {
            placements.items.insert(pos, id);
        }
    }

    for _ in 0..config.static_items_per_floor {
        let Some(item) = catalog.random_static_item(rng) else {
            break;
        };
        let id = item.id;
        if let Some(pos) = random_unoccupied_room(floor, placements, rng) {
            placements.static_items.insert(pos, id);
        }
    }

    // The second floor's objective asks for the gear, so make sure one exists there
    if index == 1 && !is_final {
        if let Some(pos) = random_unoccupied_room(floor, placements, rng) {
            placements.items.insert(pos, catalog.ancient_gear.id);
        }
    }

    let enemy_count = config.enemies_on_floor(index);
    for _ in 0..enemy_count {
        let enemy = Enemy::from_archetype(EnemyArchetype::random(rng), rng);
        if let Some(pos) = random_unoccupied_room(floor, placements, rng) {
            placements.enemies.insert(pos, enemy.id);
            enemies.insert(enemy.id, enemy);
        }
    }

    if is_final {
        if let Some(pos) = floor.find_room(|r| r.has_boss) {
            let boss = Enemy::boss(config, rng);
            placements.enemies.insert(pos, boss.id);
            enemies.insert(boss.id, boss);
        }
    }

    let mut next_decoration_id = 0;
    for room in &mut floor.rooms {
        if rng.gen_bool(config.torch_chance) {
            let lit = rng.gen_bool(config.lit_torch_chance);
            room.decorations.push(Decoration {
                kind: DecorationKind::Torch { lit },
                id: next_decoration_id,
            });
            next_decoration_id += 1;
            placements.decorations.insert(room.position, lit);
        }
    }

    debug!(
        floor = index,
        items = placements.items.keys().filter(|p| p.floor == index).count(),
        enemies = placements.enemies.keys().filter(|p| p.floor == index).count(),
        torches = next_decoration_id,
        "populated floor"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::generation::generate_floor;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type Populated = (Floor, PlacementIndex, BTreeMap<EnemyId, Enemy>, Catalog);

    fn populated(index: usize, seed: u64) -> Populated {
        let config = LabyrinthConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let catalog = Catalog::build(&mut rng);
        let mut placements = PlacementIndex::default();
        let mut enemies = BTreeMap::new();
        let mut floor = generate_floor(index, &config, &placements, &mut rng);
        populate_floor(
            &mut floor,
            &config,
            &catalog,
            &mut placements,
            &mut enemies,
            &mut rng,
        );
        (floor, placements, enemies, catalog)
    }

    #[test]
    fn test_first_floor_counts() {
        let (_, placements, enemies, _) = populated(0, 21);
        assert_eq!(placements.items.len(), 5);
        assert_eq!(placements.static_items.len(), 2);
        assert_eq!(placements.enemies.len(), 3);
        assert_eq!(enemies.len(), 3);
        assert!(enemies.values().all(|e| !e.is_boss));
    }

    #[test]
    fn test_second_floor_has_gear() {
        let (_, placements, _, catalog) = populated(1, 22);
        assert!(placements.items.values().any(|&id| id == catalog.ancient_gear.id));
        assert_eq!(placements.enemies.len(), 5);
    }

    #[test]
    fn test_final_floor_places_boss_on_boss_room() {
        let (floor, placements, enemies, _) = populated(2, 23);
        let boss_room = floor.find_room(|r| r.has_boss).unwrap();
        let boss_id = placements.enemies[&boss_room];
        assert!(enemies[&boss_id].is_boss);
        assert_eq!(enemies.values().filter(|e| e.is_boss).count(), 1);
        assert_eq!(placements.enemies.len(), 7 + 1);
    }

    #[test]
    fn test_nothing_placed_on_marked_rooms() {
        let (floor, placements, _, _) = populated(0, 24);
        for pos in placements.items.keys().chain(placements.static_items.keys()) {
            assert!(!floor.room(*pos).unwrap().has_marker());
        }
    }

    #[test]
    fn test_placements_never_share_rooms_at_generation() {
        let (_, placements, _, _) = populated(2, 25);
        for pos in placements.items.keys() {
            assert!(!placements.static_items.contains_key(pos));
        }
        for (pos, _) in placements.enemies_on_floor(2) {
            assert!(!placements.items.contains_key(&pos));
        }
    }

    #[test]
    fn test_decorations_mirror_rooms() {
        let (floor, placements, _, _) = populated(0, 26);
        let decorated = floor.rooms.iter().filter(|r| !r.decorations.is_empty()).count();
        assert_eq!(decorated, placements.decorations.len());
    }

    #[test]
    fn test_remove_enemy_by_id() {
        let (_, mut placements, enemies, _) = populated(0, 27);
        let id = *enemies.keys().next().unwrap();
        let pos = placements.enemy_position(id).unwrap();
        assert_eq!(placements.remove_enemy(id), Some(pos));
        assert!(placements.enemy_position(id).is_none());
        assert!(placements.remove_enemy(id).is_none());
    }
}
