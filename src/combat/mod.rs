//! Combat resolution, enemy movement and the boss tick.

pub mod ai;
pub mod boss;
pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
