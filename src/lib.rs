//! Labyrinth - turn-driven dungeon crawler engine
//!
//! The whole game state lives in one [`Labyrinth`] value. A frontend calls the
//! player actions on input, drives `process_enemy_movement` and
//! `process_boss_logic` from a timer, and drains the message queue to render
//! feedback.

pub mod actions;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod items;
pub mod objectives;
pub mod player;
pub mod simulator;

pub use crate::core::config::{ConfigError, LabyrinthConfig};
pub use crate::core::labyrinth::Labyrinth;
pub use crate::core::result::{GameResult, Outcome};
pub use crate::dungeon::{Direction, Position};
