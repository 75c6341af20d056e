//! Shared types and constants
//!
//! Plain data with no dependencies, used by the engine, the input mapping and
//! the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (`width / 2`, 0)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Input poll interval of the game loop |
//! | `GRAVITY_MS` | 500 | Default interval between forced downward moves |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Cell, GameAction, Move, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Cell::from_u8(2), Some(Cell::Locked));
//! assert_eq!(GameAction::MoveLeft.to_move(), Some(Move::left()));
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Input poll interval in milliseconds
pub const TICK_MS: u32 = 16;

/// Default gravity interval (one forced row every 500ms)
pub const GRAVITY_MS: u32 = 500;

/// State of one grid cell.
///
/// The discriminants are part of the readable board contract:
/// `0` empty, `1` occupied by the falling piece, `2` settled.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty = 0,
    Falling = 1,
    Locked = 2,
}

impl Cell {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse a raw cell value
    ///
    /// ```
    /// use tui_blockfall_types::Cell;
    ///
    /// assert_eq!(Cell::from_u8(0), Some(Cell::Empty));
    /// assert_eq!(Cell::from_u8(1), Some(Cell::Falling));
    /// assert_eq!(Cell::from_u8(3), None);
    /// ```
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Falling),
            2 => Some(Cell::Locked),
            _ => None,
        }
    }

    pub fn is_locked(self) -> bool {
        self == Cell::Locked
    }
}

/// A single move request: translate by (dx, dy), optionally rotating first.
///
/// `dx` is typically -1/0/1 and `dy` 0/1. The default is the empty move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move {
    pub dx: i8,
    pub dy: i8,
    pub rotate: bool,
}

impl Move {
    pub const fn new(dx: i8, dy: i8, rotate: bool) -> Self {
        Self { dx, dy, rotate }
    }

    pub const fn left() -> Self {
        Self::new(-1, 0, false)
    }

    pub const fn right() -> Self {
        Self::new(1, 0, false)
    }

    /// One row down. Also what the gravity timer sends.
    pub const fn down() -> Self {
        Self::new(0, 1, false)
    }

    pub const fn rotate() -> Self {
        Self::new(0, 0, true)
    }
}

/// Commands the shell understands.
///
/// Movement actions map onto a [`Move`]; `Pause` and `Restart` are handled
/// by the game loop itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks it if blocked)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Empty the board and spawn a fresh piece
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string (used in the session log)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// The engine move this action stands for, if any.
    pub fn to_move(self) -> Option<Move> {
        match self {
            GameAction::MoveLeft => Some(Move::left()),
            GameAction::MoveRight => Some(Move::right()),
            GameAction::SoftDrop => Some(Move::down()),
            GameAction::Rotate => Some(Move::rotate()),
            GameAction::Pause | GameAction::Restart => None,
        }
    }
}
