//! Runtime configuration from environment variables.
//!
//! - `BLOCKFALL_GRAVITY_MS`: milliseconds between forced downward moves (default 500)
//! - `BLOCKFALL_SEED`: seed for a reproducible piece sequence (default: unseeded)
//! - `BLOCKFALL_LOG_PATH`: JSONL session log file (default: disabled)
//!
//! Missing or unparsable values fall back to the defaults.

use std::path::PathBuf;

use crate::types::{GRAVITY_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gravity_ms: u32,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let gravity_ms = lookup("BLOCKFALL_GRAVITY_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(TICK_MS))
            .unwrap_or(GRAVITY_MS);

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            gravity_ms,
            seed,
            log_path,
        }
    }
}
