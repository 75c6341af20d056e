//! Engine module - the board engine
//!
//! Owns the grid and the active piece and exposes a single mutating command,
//! [`Engine::apply_move`]. Everything else (painting, collision checks,
//! line clears, spawning) happens inside that command or on [`Engine::spawn`].
//!
//! The grid's falling cells always mirror the active piece: every state
//! change erases the piece, updates it, then paints it again.

use crate::board::Board;
use crate::rng::{PieceRng, SimpleRng};
use crate::shape::{Shape, ShapeKind, CATALOG};
use crate::types::{Cell, Move};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    /// Current orientation (possibly rotated from `kind`'s spawn shape)
    pub shape: Shape,
    /// Board column of the bounding box's left edge
    pub x: i16,
    /// Board row of the bounding box's top edge
    pub y: i16,
}

impl ActivePiece {
    /// Board coordinates of the covered cells
    pub fn board_cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx as i16, self.y + dy as i16))
    }
}

/// How the painter writes a shape into the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Set bits become falling cells
    Falling,
    /// Set bits become locked cells
    Lock,
    /// Every falling cell in the bounding box becomes empty
    Erase,
}

/// Result of one [`Engine::apply_move`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved and/or rotated
    Moved,
    /// The candidate was illegal; nothing changed
    Blocked,
    /// A blocked downward move locked the piece.
    /// `spawned` is false when the next piece did not fit (game over).
    Locked { lines_cleared: usize, spawned: bool },
    /// No active piece (not spawned yet, or game over); nothing changed
    Inactive,
}

impl MoveOutcome {
    /// Whether the grid may differ from before the call
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved | MoveOutcome::Locked { .. })
    }
}

/// Board engine: grid, active piece and piece source
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    rng: R,
    game_over: bool,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl<R: PieceRng> Engine<R> {
    /// Create an engine with an empty standard-size board and no piece
    pub fn new(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Create an engine with an empty board of the given size
    pub fn with_size(width: u8, height: u8, rng: R) -> Self {
        Self::with_board(Board::with_size(width, height), rng)
    }

    /// Create an engine over an existing grid (no active piece).
    ///
    /// Falling cells in `board` are not tracked by any piece; callers should
    /// pass a grid holding only empty and locked cells.
    pub fn with_board(board: Board, rng: R) -> Self {
        Self {
            board,
            active: None,
            rng,
            game_over: false,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Pieces locked since construction or the last restart
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Rows cleared since construction or the last restart
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Spawn anchor: horizontally centered, top row
    pub fn spawn_anchor(&self) -> (i16, i16) {
        ((self.board.width() / 2) as i16, 0)
    }

    /// Pick a random catalog shape and place it at the spawn anchor.
    ///
    /// If it does not fit there the engine enters the game-over state,
    /// nothing is painted, and false is returned.
    pub fn spawn(&mut self) -> bool {
        let kind = CATALOG[self.rng.next_index(CATALOG.len())];
        self.spawn_kind(kind)
    }

    /// Spawn a specific catalog shape (same rules as [`Engine::spawn`])
    pub fn spawn_kind(&mut self, kind: ShapeKind) -> bool {
        if let Some(old) = self.active.take() {
            self.paint(&old.shape, old.x, old.y, Paint::Erase);
        }
        if self.game_over {
            return false;
        }

        let (x, y) = self.spawn_anchor();
        let piece = ActivePiece {
            kind,
            shape: kind.shape(),
            x,
            y,
        };

        if !self.fits(&piece.shape, x, y) {
            self.game_over = true;
            return false;
        }

        self.paint(&piece.shape, x, y, Paint::Falling);
        self.active = Some(piece);
        true
    }

    /// Empty the board, leave game over and spawn a fresh piece
    pub fn restart(&mut self) -> bool {
        self.board.clear();
        self.active = None;
        self.game_over = false;
        self.pieces_locked = 0;
        self.lines_cleared = 0;
        self.spawn()
    }

    /// Whether the active piece with `shape`, shifted by (dx, dy), is legal.
    ///
    /// Illegal when any covered cell leaves the board horizontally, below the
    /// bottom (or above the top), or lands on a locked cell. The piece's own
    /// falling cells never block it. Without an active piece nothing is legal.
    pub fn check(&self, dx: i8, dy: i8, shape: &Shape) -> bool {
        match self.active {
            Some(p) => self.fits(shape, p.x + dx as i16, p.y + dy as i16),
            None => false,
        }
    }

    fn fits(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.cells().iter().all(|&(cx, cy)| {
            let bx = x + cx as i16;
            let by = y + cy as i16;
            // `get` is None off the board; falling cells are not obstacles.
            matches!(self.board.get(bx, by), Some(c) if !c.is_locked())
        })
    }

    /// Write `shape` into the grid with its top-left corner at (x, y).
    ///
    /// No legality checks; cells off the board are dropped. `Erase` clears
    /// falling cells across the whole bounding box and leaves locked cells alone.
    pub fn paint(&mut self, shape: &Shape, x: i16, y: i16, mode: Paint) {
        for sy in 0..shape.rows() {
            for sx in 0..shape.cols() {
                let bx = x + sx as i16;
                let by = y + sy as i16;
                match mode {
                    Paint::Erase => {
                        if self.board.get(bx, by) == Some(Cell::Falling) {
                            self.board.set(bx, by, Cell::Empty);
                        }
                    }
                    Paint::Falling if shape.is_set(sx, sy) => {
                        self.board.set(bx, by, Cell::Falling);
                    }
                    Paint::Lock if shape.is_set(sx, sy) => {
                        self.board.set(bx, by, Cell::Locked);
                    }
                    _ => {}
                }
            }
        }
    }

    /// Remove full rows; returns how many were removed
    pub fn clear_lines(&mut self) -> usize {
        self.board.clear_full_rows()
    }

    /// Attempt a move.
    ///
    /// 1. The candidate shape is the current one, rotated if requested.
    /// 2. Legal: erase, shift the anchor, adopt the candidate, repaint.
    /// 3. Illegal with `dy != 0`: lock the candidate at the current anchor,
    ///    clear lines and spawn the next piece.
    /// 4. Illegal otherwise: nothing happens. Rotation alone never locks.
    pub fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        let Some(piece) = self.active else {
            return MoveOutcome::Inactive;
        };

        let candidate = if mv.rotate {
            piece.shape.rotate()
        } else {
            piece.shape
        };

        if self.check(mv.dx, mv.dy, &candidate) {
            self.paint(&piece.shape, piece.x, piece.y, Paint::Erase);
            let moved = ActivePiece {
                shape: candidate,
                x: piece.x + mv.dx as i16,
                y: piece.y + mv.dy as i16,
                ..piece
            };
            self.paint(&moved.shape, moved.x, moved.y, Paint::Falling);
            self.active = Some(moved);
            return MoveOutcome::Moved;
        }

        if mv.dy == 0 {
            return MoveOutcome::Blocked;
        }

        self.paint(&piece.shape, piece.x, piece.y, Paint::Erase);
        self.paint(&candidate, piece.x, piece.y, Paint::Lock);
        self.active = None;
        self.pieces_locked += 1;

        let lines_cleared = self.clear_lines();
        self.lines_cleared += lines_cleared as u32;

        let spawned = self.spawn();
        MoveOutcome::Locked {
            lines_cleared,
            spawned,
        }
    }

    /// Mutable grid access for building test positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
