//! Terminal rendering for the board engine.
//!
//! Renders into a plain framebuffer that is then flushed to the terminal with
//! crossterm (no widget toolkit). Each board cell is two columns wide to keep
//! blocks roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, PlayStatus, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
