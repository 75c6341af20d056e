//! Session - the shell around one engine
//!
//! Turns the two stimulus sources, elapsed time and key actions, into one
//! ordered stream of engine moves. Also owns pause state and the session log.
//! Neither source can interleave with the other: both go through `&mut self`.

use crate::core::{Engine, MoveOutcome, PieceRng};
use crate::session_log::{outcome_name, LogEvent, SessionLog};
use crate::term::PlayStatus;
use crate::types::{GameAction, Move};

pub struct Session<R: PieceRng> {
    engine: Engine<R>,
    paused: bool,
    gravity_ms: u32,
    gravity_timer_ms: u32,
    log: SessionLog,
}

impl<R: PieceRng> Session<R> {
    /// Wrap `engine` and spawn its first piece.
    pub fn new(engine: Engine<R>, gravity_ms: u32, mut log: SessionLog) -> Self {
        log.record(LogEvent::Start {
            gravity_ms,
            seed: None,
        });
        Self::start(engine, gravity_ms, log)
    }

    /// Like [`Session::new`], recording the seed in the log's start record.
    pub fn with_seed(engine: Engine<R>, gravity_ms: u32, seed: u32, mut log: SessionLog) -> Self {
        log.record(LogEvent::Start {
            gravity_ms,
            seed: Some(seed),
        });
        Self::start(engine, gravity_ms, log)
    }

    fn start(engine: Engine<R>, gravity_ms: u32, log: SessionLog) -> Self {
        let mut session = Self {
            engine,
            paused: false,
            gravity_ms: gravity_ms.max(1),
            gravity_timer_ms: 0,
            log,
        };
        let spawned = session.engine.spawn();
        session.after_spawn(spawned);
        session
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn status(&self) -> PlayStatus {
        if self.engine.is_game_over() {
            PlayStatus::GameOver
        } else if self.paused {
            PlayStatus::Paused
        } else {
            PlayStatus::Playing
        }
    }

    /// Apply one key action. Movement is ignored while paused.
    pub fn apply_action(&mut self, action: GameAction) -> Option<MoveOutcome> {
        match action {
            GameAction::Pause => {
                if !self.engine.is_game_over() {
                    self.paused = !self.paused;
                }
                None
            }
            GameAction::Restart => {
                self.paused = false;
                self.gravity_timer_ms = 0;
                self.log.record(LogEvent::Restart);
                let spawned = self.engine.restart();
                self.after_spawn(spawned);
                None
            }
            _ => {
                let mv = action.to_move()?;
                if self.paused {
                    return None;
                }
                let outcome = self.step(mv);
                self.log.record(LogEvent::Action {
                    action: action.as_str(),
                    outcome: outcome_name(&outcome),
                });
                Some(outcome)
            }
        }
    }

    /// Advance the gravity timer; returns how many forced drops fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if self.paused || self.engine.is_game_over() {
            self.gravity_timer_ms = 0;
            return 0;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        let mut drops = 0;
        while self.gravity_timer_ms >= self.gravity_ms {
            self.gravity_timer_ms -= self.gravity_ms;
            self.step(Move::down());
            drops += 1;
            if self.engine.is_game_over() {
                self.gravity_timer_ms = 0;
                break;
            }
        }
        drops
    }

    /// Close the session and hand back its log for flushing.
    pub fn into_log(self) -> SessionLog {
        self.log
    }

    fn step(&mut self, mv: Move) -> MoveOutcome {
        let before = self.engine.active().copied();
        let outcome = self.engine.apply_move(mv);

        if let MoveOutcome::Locked {
            lines_cleared,
            spawned,
        } = outcome
        {
            if let Some(p) = before {
                self.log.record(LogEvent::Lock {
                    kind: p.kind.as_str(),
                    x: p.x,
                    y: p.y,
                    lines_cleared,
                });
            }
            self.after_spawn(spawned);
        }
        outcome
    }

    fn after_spawn(&mut self, spawned: bool) {
        if spawned {
            if let Some(p) = self.engine.active() {
                self.log.record(LogEvent::Spawn {
                    kind: p.kind.as_str(),
                    x: p.x,
                    y: p.y,
                });
            }
        } else {
            self.log.record(LogEvent::GameOver {
                pieces_locked: self.engine.pieces_locked(),
                lines_cleared: self.engine.lines_cleared(),
                board: self.engine.board().to_rows(),
            });
        }
    }
}
