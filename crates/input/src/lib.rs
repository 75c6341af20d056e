//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press produces at most one action; there is no auto-repeat handling here,
//! the terminal's own key repeat is passed through as further presses.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
