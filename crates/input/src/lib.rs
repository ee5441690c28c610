//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Each key
//! press yields at most one action; terminal auto-repeat and key release
//! events are dropped so holding a key never produces extra moves.

pub mod map;

pub use blocktris_types as types;

pub use map::{action_for_event, handle_key_event, should_quit, InputEvent};
