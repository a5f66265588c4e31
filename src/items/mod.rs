//! Item system: templates, the per-game catalog, inventory and equipment.

pub mod catalog;
pub mod inventory;
pub mod types;

pub use catalog::*;
pub use inventory::*;
pub use types::*;
