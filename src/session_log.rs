//! Session log - optional line-delimited JSON record of a game session
//!
//! One JSON object per line, each with `seq`, `ts` (unix ms) and `type`:
//!
//! ```text
//! {"seq":1,"ts":1700000000000,"type":"start","gravity_ms":500,"seed":42}
//! {"seq":2,"ts":1700000000016,"type":"action","action":"moveLeft","outcome":"moved"}
//! {"seq":3,"ts":1700000000530,"type":"lock","kind":"i","x":5,"y":19,"lines_cleared":0}
//! ```
//!
//! A write failure disables the log for the rest of the session; the error is
//! kept so the caller can report it once the terminal is restored.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::MoveOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LogEvent {
    Start {
        gravity_ms: u32,
        seed: Option<u32>,
    },
    Spawn {
        kind: &'static str,
        x: i16,
        y: i16,
    },
    Action {
        action: &'static str,
        outcome: &'static str,
    },
    Lock {
        kind: &'static str,
        x: i16,
        y: i16,
        lines_cleared: usize,
    },
    GameOver {
        pieces_locked: u32,
        lines_cleared: u32,
        board: Vec<Vec<u8>>,
    },
    Restart,
}

#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    seq: u64,
    ts: u64,
    #[serde(flatten)]
    event: &'a LogEvent,
}

/// Short name for a move outcome, as written in `action` records
pub fn outcome_name(outcome: &MoveOutcome) -> &'static str {
    match outcome {
        MoveOutcome::Moved => "moved",
        MoveOutcome::Blocked => "blocked",
        MoveOutcome::Locked { .. } => "locked",
        MoveOutcome::Inactive => "inactive",
    }
}

pub struct SessionLog {
    out: Option<Box<dyn Write>>,
    seq: u64,
    buf: Vec<u8>,
    error: Option<anyhow::Error>,
}

impl SessionLog {
    /// A log that drops everything
    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
            error: None,
        }
    }

    /// Append to `path`, creating it if needed
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening session log {}", path.display()))?;
        Ok(Self::with_writer(BufWriter::new(file)))
    }

    /// Log into any writer
    pub fn with_writer(out: impl Write + 'static) -> Self {
        Self {
            out: Some(Box::new(out)),
            seq: 0,
            buf: Vec::with_capacity(256),
            error: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Number of records written so far
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, event: LogEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.seq += 1;
        let record = LogRecord {
            seq: self.seq,
            ts: now_ms(),
            event: &event,
        };

        self.buf.clear();
        let written = serde_json::to_writer(&mut self.buf, &record)
            .map_err(anyhow::Error::from)
            .and_then(|()| {
                self.buf.push(b'\n');
                out.write_all(&self.buf)?;
                Ok(())
            });

        if let Err(e) = written {
            self.error = Some(e.context("writing session log"));
            self.out = None;
        }
    }

    /// Flush and close; returns the first error seen, if any
    pub fn finish(mut self) -> Result<()> {
        if let Some(mut out) = self.out.take() {
            if let Err(e) = out.flush() {
                self.error.get_or_insert(anyhow::Error::from(e).context("flushing session log"));
            }
        }
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for SessionLog {
    fn drop(&mut self) {
        if let Some(out) = self.out.as_mut() {
            let _ = out.flush();
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Convenience for the binary: open the configured log, or run without one.
pub fn open_or_disabled(path: Option<&Path>) -> (SessionLog, Option<anyhow::Error>) {
    match path {
        Some(p) => match SessionLog::open(p) {
            Ok(log) => (log, None),
            Err(e) => (SessionLog::disabled(), Some(e)),
        },
        None => (SessionLog::disabled(), None),
    }
}
