//! Display side of the adapter contract.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, Position};
use crate::rules::Outcome;

/// Status line shown next to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for this player's move.
    Turn(Player),
    /// This player made five in a row.
    Won(Player),
    /// The board filled up with no winner.
    Draw,
}

impl Status {
    /// Status to show after a placement, or `None` if nothing changed.
    #[must_use]
    pub fn after(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Win(player) => Some(Status::Won(player)),
            Outcome::Draw => Some(Status::Draw),
            Outcome::Continue(next) => Some(Status::Turn(next)),
            Outcome::Ignored => None,
        }
    }
}

/// Something that can show the game to the players.
///
/// Implementations own every presentation concern: cell layout, stone
/// glyphs or colours, and status wording.
pub trait BoardView {
    /// Redraw the whole board.
    fn draw_board(&mut self, board: &Board);

    /// Show a stone that was just placed.
    fn draw_stone(&mut self, pos: Position, player: Player);

    /// Replace the status line.
    fn show_status(&mut self, status: Status);
}
