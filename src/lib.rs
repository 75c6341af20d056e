//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the shell pieces
//! that tie them together: configuration, the session driver and its log.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub mod config;
pub mod session;
pub mod session_log;

pub use config::Config;
pub use session::Session;
pub use session_log::{LogEvent, SessionLog};
