//! Core game logic - pure, deterministic, and testable
//!
//! The board engine for a minimal falling-block puzzle. It has no dependency
//! on terminals, timers or I/O: a shell drives it with [`Move`](types::Move)
//! commands and reads the grid back for rendering.
//!
//! # Module Structure
//!
//! - [`board`]: the grid store and line clearance
//! - [`shape`]: rectangular shape matrices, the piece catalog, rotation
//! - [`rng`]: injectable random-index providers for the spawner
//! - [`engine`]: painter, collision checker, move orchestration, spawner
//!
//! # Rules
//!
//! - Pieces spawn at (`width / 2`, 0) and never wall-kick
//! - A downward move that is blocked locks the piece, clears full rows and
//!   spawns the next piece
//! - Blocked sideways moves and rotations are silent no-ops
//! - A piece that cannot spawn ends the game until [`Engine::restart`]
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Engine, MoveOutcome, SequenceRng};
//! use tui_blockfall_types::{Cell, Move};
//!
//! // Always draw catalog entry 2 (the bar).
//! let mut engine = Engine::new(SequenceRng::constant(2));
//! engine.spawn();
//!
//! for _ in 0..19 {
//!     assert_eq!(engine.apply_move(Move::down()), MoveOutcome::Moved);
//! }
//! assert!(matches!(engine.apply_move(Move::down()), MoveOutcome::Locked { .. }));
//! assert_eq!(engine.board().get(5, 19), Some(Cell::Locked));
//! ```

pub mod board;
pub mod engine;
pub mod rng;
pub mod shape;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{ActivePiece, Engine, MoveOutcome, Paint};
pub use rng::{PieceRng, SequenceRng, SimpleRng, ThreadRandom};
pub use shape::{Shape, ShapeKind, CATALOG};
