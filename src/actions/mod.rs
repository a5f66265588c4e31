//! Player actions.
//!
//! Every action is a method on `Labyrinth`. Declined actions change nothing and
//! explain themselves through the message queue.

mod interact;
mod movement;
mod search;
mod use_item;
