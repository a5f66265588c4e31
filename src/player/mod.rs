//! Player state.

pub mod types;

pub use types::*;
