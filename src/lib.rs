//! # gomoku
//!
//! Five-in-a-row on a square grid (19×19 by default).
//!
//! Two players, Black and White, alternately place stones on empty
//! intersections. The first to line up five or more of their own stones
//! horizontally, vertically, or diagonally wins. A full board without a
//! winner is a draw.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic Core**: `GameState` owns the board and reports each
//!    placement as an `Outcome`. It never renders and never reads input.
//!
//! 2. **Local Win Check**: Only the four lines through the stone just placed
//!    are scanned, so a move costs the same on any board size.
//!
//! 3. **Ignore, Don't Fail**: Clicking an occupied cell or playing after the
//!    game has ended is a no-op (`Outcome::Ignored`), not an error.
//!
//! ## Modules
//!
//! - `core`: players, board, configuration, game state
//! - `rules`: win detection and outcomes
//! - `session`: adapter contract (`BoardView`) and the `Session` that wires a
//!   game to a view
//! - `error`: errors from the checked entry points
//!
//! ## Example
//!
//! ```
//! use gomoku::{GameState, Outcome, Player};
//!
//! let mut game = GameState::standard();
//! for col in 0..4 {
//!     assert_eq!(game.place_marker(0, col), Outcome::Continue(Player::White));
//!     game.place_marker(5, 5 + col);
//! }
//! assert_eq!(game.place_marker(0, 4), Outcome::Win(Player::Black));
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Position, Player,
    GameConfig, GameState,
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH,
};

pub use crate::error::GomokuError;

pub use crate::rules::{check_win, GameStatus, Outcome};

pub use crate::session::{BoardView, Session, Status};
