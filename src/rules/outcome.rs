//! Results reported back to the adapter.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of a single placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The placing player completed five in a row. The game is over.
    Win(Player),
    /// The placement filled the last cell without a win. The game is over.
    Draw,
    /// The game goes on; carries the player to move next.
    Continue(Player),
    /// Occupied cell or finished game. Nothing changed.
    Ignored,
}

impl Outcome {
    /// Check if this outcome ended the game.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::Win(_) | Outcome::Draw)
    }

    /// Check if the placement changed the game.
    #[must_use]
    pub fn is_applied(self) -> bool {
        !matches!(self, Outcome::Ignored)
    }
}

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Ended,
}
