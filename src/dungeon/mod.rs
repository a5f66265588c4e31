//! Labyrinth grid, generation and placement.

pub mod generation;
pub mod placement;
pub mod types;

pub use generation::*;
pub use placement::*;
pub use types::*;
