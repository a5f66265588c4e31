//! Integration test: labyrinth generation invariants
//!
//! Every floor is one connected maze with symmetric passages, markers appear at
//! most once, and no room holds more than one placed entity.

use labyrinth::dungeon::{Direction, Floor, Position};
use labyrinth::{Labyrinth, LabyrinthConfig};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeSet, HashSet, VecDeque};

fn reachable(floor: &Floor, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for next in floor.connected_neighbors(current) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn build(seed: u64, width: usize, height: usize, num_floors: usize) -> Labyrinth {
    let config = LabyrinthConfig {
        width,
        height,
        num_floors,
        ..LabyrinthConfig::default()
    };
    Labyrinth::with_config(config, 0, ChaCha8Rng::seed_from_u64(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_room_reachable(seed in any::<u64>(), w in 2usize..9, h in 2usize..9, n in 1usize..4) {
        let game = build(seed, w, h, n);
        for floor in &game.floors {
            let start = floor.rooms[0].position;
            prop_assert_eq!(reachable(floor, start).len(), w * h);
        }
    }

    #[test]
    fn prop_passages_symmetric(seed in any::<u64>(), w in 2usize..9, h in 2usize..9) {
        let game = build(seed, w, h, 2);
        for floor in &game.floors {
            for room in &floor.rooms {
                for direction in Direction::ALL {
                    match floor.neighbor(room.position, direction) {
                        Some(next) => {
                            let back = floor.room(next).unwrap().has_exit_towards(direction.opposite());
                            prop_assert_eq!(room.has_exit_towards(direction), back);
                        }
                        None => prop_assert!(!room.has_exit_towards(direction)),
                    }
                }
            }
        }
    }

    #[test]
    fn prop_single_occupancy(seed in any::<u64>(), w in 2usize..9, h in 2usize..9, n in 1usize..4) {
        let game = build(seed, w, h, n);
        let placements = &game.placements;
        let items: BTreeSet<Position> = placements.items.keys().copied().collect();
        let statics: BTreeSet<Position> = placements.static_items.keys().copied().collect();
        let enemies: BTreeSet<Position> = placements.enemies.keys().copied().collect();
        prop_assert!(items.is_disjoint(&statics));
        prop_assert!(items.is_disjoint(&enemies));
        prop_assert!(statics.is_disjoint(&enemies));

        for position in items.iter().chain(&statics) {
            let room = game.room(*position);
            prop_assert!(room.is_some_and(|r| !r.has_marker()));
        }
        // Only the Guardian may stand on a marked room
        for (position, id) in &placements.enemies {
            let room = game.room(*position).unwrap();
            let boss = game.enemy(*id).unwrap().is_boss;
            prop_assert_eq!(room.has_marker(), boss);
            prop_assert_eq!(room.has_boss, boss);
        }
        prop_assert_eq!(placements.enemies.len(), game.enemies.len());
    }

    #[test]
    fn prop_markers_at_most_once(seed in any::<u64>(), w in 2usize..9, h in 2usize..9, n in 1usize..4) {
        let game = build(seed, w, h, n);
        let last = game.final_floor();
        for floor in &game.floors {
            let count = |pred: fn(&labyrinth::dungeon::Room) -> bool| {
                floor.rooms.iter().filter(|r| pred(r)).count()
            };
            prop_assert_eq!(count(|r| r.has_entrance), 1);
            prop_assert!(count(|r| r.has_stairs_down) <= 1);
            prop_assert!(count(|r| r.has_exit) <= 1);
            if floor.index != last {
                prop_assert_eq!(count(|r| r.has_exit), 0);
                prop_assert_eq!(count(|r| r.has_boss), 0);
            } else {
                prop_assert_eq!(count(|r| r.has_stairs_down), 0);
            }
        }
        let bosses = game.enemies.values().filter(|e| e.is_boss).count();
        prop_assert!(bosses <= 1);
        prop_assert!(game.current_room().unwrap().has_entrance);
    }
}

#[test]
fn test_default_layout_is_complete() {
    let game = Labyrinth::from_seed(2024, 0);
    assert_eq!(game.floors.len(), 3);
    assert_eq!(game.stairs.len(), 2);
    for link in &game.stairs {
        assert!(game.room(link.down).unwrap().has_stairs_down);
        assert!(game.room(link.up).unwrap().has_stairs_up);
        assert!(game.room(link.up).unwrap().has_entrance);
        assert_eq!(link.up.floor, link.down.floor + 1);
    }

    let final_floor = &game.floors[2];
    for marker in [
        final_floor.find_room(|r| r.has_exit),
        final_floor.find_room(|r| r.has_boss),
        final_floor.find_room(|r| r.has_boss_entrance),
        final_floor.find_room(|r| r.has_boss_exit),
    ] {
        assert!(marker.is_some());
    }

    // 3 + 2 * floor regular enemies, plus the Guardian
    let regular = game.enemies.values().filter(|e| !e.is_boss).count();
    assert_eq!(regular, 3 + 5 + 7);
    assert_eq!(game.enemies.values().filter(|e| e.is_boss).count(), 1);

    let gear_on_floor_one = game
        .placements
        .items
        .iter()
        .filter(|(pos, id)| pos.floor == 1 && game.item(**id).unwrap().name == "Ancient Gear")
        .count();
    assert_eq!(gear_on_floor_one, 1);
}

#[test]
fn test_different_seeds_differ() {
    let a = Labyrinth::from_seed(1, 0);
    let b = Labyrinth::from_seed(2, 0);
    assert_ne!(a.floors, b.floors);
}
