//! Player markers.
//!
//! ## Player
//!
//! Exactly two players, `Black` and `White`. Black moves first unless the
//! game is configured otherwise via `GameConfig::with_first_player`.

use serde::{Deserialize, Serialize};

/// One of the two players (and the stone colour they place).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first by default.
    Black,
    /// Moves second by default.
    White,
}

impl Player {
    /// The player who opens a default game.
    pub const FIRST: Player = Player::Black;

    /// Both players in move order for a default game.
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// Get the opposing player.
    ///
    /// ```
    /// use gomoku::core::Player;
    ///
    /// assert_eq!(Player::Black.other(), Player::White);
    /// assert_eq!(Player::White.other(), Player::Black);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Get the raw player index (0 for Black, 1 for White).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}
