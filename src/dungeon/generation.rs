//! Labyrinth procedural generation.
//!
//! Each floor is carved into a spanning tree with randomized Prim's algorithm,
//! then structural markers (entrance, stairs, exit, boss rooms) are dropped on
//! random unoccupied rooms. `connect_floors` pairs the stairs afterwards.

use super::placement::{random_unoccupied_room, PlacementIndex};
use super::types::{Direction, Floor, Position, Room};
use crate::core::config::LabyrinthConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stairs between floor `upper` and floor `upper + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StairLink {
    pub upper: usize,
    /// Stairs-down room on the upper floor
    pub down: Position,
    /// Entrance (stairs-up) room on the lower floor
    pub up: Position,
}

/// Carves and marks one floor.
pub fn generate_floor(
    index: usize,
    config: &LabyrinthConfig,
    placements: &PlacementIndex,
    rng: &mut impl Rng,
) -> Floor {
    let mut floor = Floor::new(index, config.width, config.height);
    carve_maze(&mut floor, rng);
    place_markers(&mut floor, index == config.final_floor(), placements, rng);
    debug!(
        floor = index,
        width = floor.width,
        height = floor.height,
        "generated floor"
    );
    floor
}

/// A frontier entry: an uncarved candidate reached from `source` via `direction`.
struct FrontierEntry {
    candidate: Position,
    source: Position,
    direction: Direction,
}

fn push_frontier(
    floor: &Floor,
    from: Position,
    visited: &[bool],
    frontier: &mut Vec<FrontierEntry>,
) {
    for direction in Direction::ALL {
        if let Some(candidate) = floor.neighbor(from, direction) {
            if !visited[candidate.y * floor.width + candidate.x] {
                frontier.push(FrontierEntry {
                    candidate,
                    source: from,
                    direction,
                });
            }
        }
    }
}

/// Randomized Prim's: grow the visited region one random frontier cell at a time.
pub fn carve_maze(floor: &mut Floor, rng: &mut impl Rng) {
    let (width, height) = (floor.width, floor.height);
    if width == 0 || height == 0 {
        return;
    }

    let mut visited = vec![false; width * height];
    let mut frontier: Vec<FrontierEntry> = Vec::new();

    let start = Position::new(rng.gen_range(0..width), rng.gen_range(0..height), floor.index);
    visited[start.y * width + start.x] = true;
    push_frontier(floor, start, &visited, &mut frontier);

    while !frontier.is_empty() {
        let entry = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        let idx = entry.candidate.y * width + entry.candidate.x;
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        floor.open_passage(entry.source, entry.direction);
        push_frontier(floor, entry.candidate, &visited, &mut frontier);
    }
}

fn place_markers(
    floor: &mut Floor,
    is_final: bool,
    placements: &PlacementIndex,
    rng: &mut impl Rng,
) {
    if let Some(pos) = random_unoccupied_room(floor, placements, rng) {
        if let Some(room) = floor.room_mut(pos) {
            room.has_entrance = true;
        }
    }

    if let Some(pos) = random_unoccupied_room(floor, placements, rng) {
        if let Some(room) = floor.room_mut(pos) {
            if is_final {
                room.has_exit = true;
            } else {
                room.has_stairs_down = true;
            }
        }
    }

    if !is_final {
        return;
    }

    type Marker = fn(&mut Room);
    let boss_markers: [Marker; 3] = [
        |room| room.has_boss = true,
        |room| room.has_boss_entrance = true,
        |room| room.has_boss_exit = true,
    ];
    for mark in boss_markers {
        if let Some(pos) = random_unoccupied_room(floor, placements, rng) {
            if let Some(room) = floor.room_mut(pos) {
                mark(room);
            }
        }
    }
}

/// Marks every non-first floor's entrance as stairs up and links it to the
/// stairs down above. Floors missing either end are left unlinked.
pub fn connect_floors(floors: &mut [Floor]) -> Vec<StairLink> {
    let mut links = Vec::new();
    for upper in 0..floors.len().saturating_sub(1) {
        let down = floors[upper].find_room(|r| r.has_stairs_down);
        let up = floors[upper + 1].find_room(|r| r.has_entrance);
        match (down, up) {
            (Some(down), Some(up)) => {
                if let Some(room) = floors[upper + 1].room_mut(up) {
                    room.has_stairs_up = true;
                }
                links.push(StairLink { upper, down, up });
            }
            _ => debug!(upper, "floors left unlinked, missing stairs"),
        }
    }
    links
}
