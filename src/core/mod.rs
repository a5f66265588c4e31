//! Core game state, configuration and shared records.

pub mod config;
pub mod constants;
pub mod labyrinth;
pub mod messages;
pub mod result;

pub use config::*;
pub use constants::*;
pub use labyrinth::*;
pub use messages::*;
pub use result::*;
