//! Session: one game wired to one view.

use tracing::{debug, instrument};

use super::view::{BoardView, Status};
use crate::core::{GameConfig, GameState, Position};
use crate::error::GomokuError;
use crate::rules::Outcome;

/// Owns the game for its whole lifetime and keeps the view in step with it.
///
/// Input adapters turn user actions into `select_cell` and `reset` calls;
/// the session applies them to the game and tells the view what to redraw.
#[derive(Debug)]
pub struct Session<V> {
    game: GameState,
    view: V,
}

impl<V: BoardView> Session<V> {
    /// Start a session: draw the empty board and announce the first player.
    pub fn new(config: GameConfig, mut view: V) -> Result<Self, GomokuError> {
        let game = GameState::try_new(config)?;
        view.draw_board(game.board());
        view.show_status(Status::Turn(game.current_player()));
        Ok(Self { game, view })
    }

    /// Handle a click (or typed move) on (`row`, `col`).
    ///
    /// Ignored placements leave the view untouched. Off-board coordinates
    /// are returned as errors and leave both game and view untouched.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<Outcome, GomokuError> {
        let player = self.game.current_player();
        let outcome = self.game.try_place_marker(row, col)?;

        if let Some(status) = Status::after(outcome) {
            self.view.draw_stone(Position::new(row, col), player);
            self.view.show_status(status);
        }
        Ok(outcome)
    }

    /// Start a new game in place and redraw everything.
    pub fn reset(&mut self) {
        self.game.reset();
        self.view.draw_board(self.game.board());
        self.view.show_status(Status::Turn(self.game.current_player()));
        debug!("session reset");
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// End the session, handing back the view.
    pub fn into_view(self) -> V {
        self.view
    }
}
