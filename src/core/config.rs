//! Game configuration.
//!
//! `GameConfig` fixes everything a game needs at construction time:
//! - `board_size`: side length of the square grid (default 19)
//! - `first_player`: who moves first after construction or reset (default Black)
//!
//! The win length is not configurable; five in a row always wins.

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::GomokuError;

/// Default side length of the board.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Largest supported side length.
pub const MAX_BOARD_SIZE: usize = 255;

/// Number of consecutive stones that wins the game.
pub const WIN_LENGTH: usize = 5;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Player who moves first.
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            first_player: Player::FIRST,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `board_size` × `board_size` game.
    ///
    /// Panics on an unsupported size; use `validate` on configurations built
    /// from untrusted input.
    pub fn new(board_size: usize) -> Self {
        assert!(board_size > 0, "Board must have at least 1 cell per side");
        assert!(
            board_size <= MAX_BOARD_SIZE,
            "At most {MAX_BOARD_SIZE} cells per side supported"
        );

        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), GomokuError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GomokuError::InvalidBoardSize {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }
}
