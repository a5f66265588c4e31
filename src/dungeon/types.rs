//! Labyrinth spatial data structures.
//!
//! A floor is a fixed-size grid of rooms. Rooms connect to their four neighbors
//! through passage flags which are kept symmetric between adjacent rooms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A room coordinate on a specific floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
    pub floor: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize, floor: usize) -> Self {
        Self { x, y, floor }
    }

    /// The position one step in `direction`, if it stays on the non-negative side of the grid.
    /// Upper bounds are checked by the floor.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Position::new(x, y, self.floor))
    }

    pub fn manhattan_distance(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn chebyshev_distance(self, other: Position) -> usize {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.floor)
    }
}

/// Passage directions. North is towards y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index into a room's passage array
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

/// Cosmetic room decoration. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationKind {
    Torch { lit: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub id: u32,
}

/// A single room in the labyrinth grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub position: Position,
    /// Open passages (north, east, south, west)
    pub exits: [bool; 4],
    pub visited: bool,
    pub searched: bool,
    pub has_player: bool,
    pub has_entrance: bool,
    pub has_exit: bool,
    pub has_boss: bool,
    pub has_boss_entrance: bool,
    pub has_boss_exit: bool,
    pub has_stairs_up: bool,
    pub has_stairs_down: bool,
    pub decorations: Vec<Decoration>,
}

impl Room {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            exits: [false; 4],
            visited: false,
            searched: false,
            has_player: false,
            has_entrance: false,
            has_exit: false,
            has_boss: false,
            has_boss_entrance: false,
            has_boss_exit: false,
            has_stairs_up: false,
            has_stairs_down: false,
            decorations: Vec::new(),
        }
    }

    pub fn has_exit_towards(&self, direction: Direction) -> bool {
        self.exits[direction.index()]
    }

    /// True if any structural marker has been assigned to this room.
    pub fn has_marker(&self) -> bool {
        self.has_entrance
            || self.has_exit
            || self.has_boss
            || self.has_boss_entrance
            || self.has_boss_exit
            || self.has_stairs_up
            || self.has_stairs_down
    }

    pub fn closed_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !self.has_exit_towards(*d))
            .collect()
    }
}

/// One maze layer, rooms stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub index: usize,
    pub width: usize,
    pub height: usize,
    pub rooms: Vec<Room>,
}

impl Floor {
    pub fn new(index: usize, width: usize, height: usize) -> Self {
        let rooms = (0..height)
            .flat_map(|y| (0..width).map(move |x| Room::new(Position::new(x, y, index))))
            .collect();
        Self {
            index,
            width,
            height,
            rooms,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.floor == self.index && position.x < self.width && position.y < self.height
    }

    pub fn room(&self, position: Position) -> Option<&Room> {
        if !self.contains(position) {
            return None;
        }
        self.rooms.get(position.y * self.width + position.x)
    }

    pub fn room_mut(&mut self, position: Position) -> Option<&mut Room> {
        if !self.contains(position) {
            return None;
        }
        self.rooms.get_mut(position.y * self.width + position.x)
    }

    /// The in-bounds neighbor of `position` in `direction`.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        position.step(direction).filter(|p| self.contains(*p))
    }

    /// Opens the passage between `position` and its neighbor in `direction` on both sides.
    /// Returns false if the neighbor is outside the grid.
    pub fn open_passage(&mut self, position: Position, direction: Direction) -> bool {
        let Some(neighbor) = self.neighbor(position, direction) else {
            return false;
        };
        if let Some(room) = self.room_mut(position) {
            room.exits[direction.index()] = true;
        }
        if let Some(room) = self.room_mut(neighbor) {
            room.exits[direction.opposite().index()] = true;
        }
        true
    }

    /// Closed directions of a room that lead to an in-bounds neighbor.
    pub fn openable_directions(&self, position: Position) -> Vec<Direction> {
        self.room(position)
            .map(|room| {
                room.closed_directions()
                    .into_iter()
                    .filter(|d| self.neighbor(position, *d).is_some())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Positions reachable in one step through open passages.
    pub fn connected_neighbors(&self, position: Position) -> Vec<Position> {
        let Some(room) = self.room(position) else {
            return Vec::new();
        };
        Direction::ALL
            .into_iter()
            .filter(|d| room.has_exit_towards(*d))
            .filter_map(|d| self.neighbor(position, d))
            .collect()
    }

    pub fn find_room(&self, predicate: impl Fn(&Room) -> bool) -> Option<Position> {
        self.rooms.iter().find(|r| predicate(r)).map(|r| r.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display_matches_key_format() {
        assert_eq!(Position::new(3, 4, 1).to_string(), "3,4,1");
    }

    #[test]
    fn test_position_step_stops_at_zero() {
        let origin = Position::new(0, 0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::East), Some(Position::new(1, 0, 0)));
        assert_eq!(origin.step(Direction::South), Some(Position::new(0, 1, 0)));
    }

    #[test]
    fn test_distances() {
        let a = Position::new(1, 1, 0);
        let b = Position::new(4, 3, 0);
        assert_eq!(a.manhattan_distance(b), 5);
        assert_eq!(a.chebyshev_distance(b), 3);
    }

    #[test]
    fn test_direction_opposites() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_room_starts_closed_and_unmarked() {
        let room = Room::new(Position::new(2, 3, 0));
        assert_eq!(room.exits, [false; 4]);
        assert!(!room.has_marker());
        assert_eq!(room.closed_directions().len(), 4);
    }

    #[test]
    fn test_floor_room_lookup() {
        let floor = Floor::new(1, 4, 3);
        assert_eq!(floor.rooms.len(), 12);
        let room = floor.room(Position::new(3, 2, 1)).unwrap();
        assert_eq!(room.position, Position::new(3, 2, 1));
        assert!(floor.room(Position::new(4, 0, 1)).is_none());
        assert!(floor.room(Position::new(0, 0, 0)).is_none());
    }

    #[test]
    fn test_open_passage_is_symmetric() {
        let mut floor = Floor::new(0, 3, 3);
        let center = Position::new(1, 1, 0);
        assert!(floor.open_passage(center, Direction::East));
        assert!(floor.room(center).unwrap().has_exit_towards(Direction::East));
        assert!(floor
            .room(Position::new(2, 1, 0))
            .unwrap()
            .has_exit_towards(Direction::West));
        assert_eq!(floor.connected_neighbors(center), vec![Position::new(2, 1, 0)]);
    }

    #[test]
    fn test_open_passage_refuses_edge() {
        let mut floor = Floor::new(0, 3, 3);
        let corner = Position::new(0, 0, 0);
        assert!(!floor.open_passage(corner, Direction::North));
        assert!(!floor.room(corner).unwrap().has_exit_towards(Direction::North));
    }

    #[test]
    fn test_openable_directions_skip_edges() {
        let floor = Floor::new(0, 3, 3);
        let corner = Position::new(0, 0, 0);
        let dirs = floor.openable_directions(corner);
        assert_eq!(dirs, vec![Direction::East, Direction::South]);
    }
}
