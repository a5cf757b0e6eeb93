//! Game state: the board, whose turn it is, and whether the game is over.
//!
//! ## GameState
//!
//! The single owner of the board. All mutation goes through
//! `place_marker` and `reset`; everything else is a query.
//!
//! Two logical states:
//! - `InProgress`: placements on empty cells are applied
//! - `Ended`: after a win or a draw, every placement is ignored until `reset`

use tracing::{debug, info, instrument};

use super::board::{Board, Cell, Position};
use super::config::GameConfig;
use super::player::Player;
use crate::error::GomokuError;
use crate::rules::{check_win, GameStatus, Outcome};

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
}

impl GameState {
    /// Create a new game: empty board, first player to move.
    ///
    /// Panics on an unsupported board size; see `try_new`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            current_player: config.first_player,
            game_over: false,
            winner: None,
            config,
        }
    }

    /// Create a new game after validating `config`.
    pub fn try_new(config: GameConfig) -> Result<Self, GomokuError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a default 19×19 game with Black to move.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(GameConfig::default())
    }

    // === Queries ===

    /// Get the configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the cell at (`row`, `col`).
    ///
    /// Panics if the coordinate is off the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board.get(Position::new(row, col))
    }

    /// Player whose stone the next placement puts down.
    ///
    /// After a win this stays on the winner.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Ended
        } else {
            GameStatus::InProgress
        }
    }

    /// Winner of a finished game. `None` while in progress or after a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True iff no cell is empty.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    // === Mutation ===

    /// Place the current player's stone at (`row`, `col`).
    ///
    /// Occupied cells and finished games yield `Outcome::Ignored` with no
    /// change. Otherwise the stone is placed and, in order: a line of five
    /// through it ends the game with `Win`; a full board ends it with `Draw`;
    /// else the turn passes and `Continue` carries the next player.
    ///
    /// Panics if the coordinate is off the board; see `try_place_marker`.
    ///
    /// ```
    /// use gomoku::core::{GameState, Player};
    /// use gomoku::rules::Outcome;
    ///
    /// let mut game = GameState::standard();
    /// assert_eq!(game.place_marker(9, 9), Outcome::Continue(Player::White));
    /// assert_eq!(game.place_marker(9, 9), Outcome::Ignored);
    /// ```
    pub fn place_marker(&mut self, row: usize, col: usize) -> Outcome {
        self.place(Position::new(row, col))
    }

    /// Like `place_marker`, but reports an off-board coordinate as an error
    /// instead of panicking.
    pub fn try_place_marker(&mut self, row: usize, col: usize) -> Result<Outcome, GomokuError> {
        let pos = Position::new(row, col);
        if !self.board.contains(pos) {
            return Err(GomokuError::OutOfBounds {
                row,
                col,
                size: self.size(),
            });
        }
        Ok(self.place(pos))
    }

    /// Place the current player's stone at `pos`. See `place_marker`.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn place(&mut self, pos: Position) -> Outcome {
        if self.game_over {
            debug!("game is over; placement ignored");
            return Outcome::Ignored;
        }

        let player = self.current_player;
        if !self.board.place(pos, player) {
            debug!("cell occupied; placement ignored");
            return Outcome::Ignored;
        }

        if check_win(&self.board, pos, player) {
            self.game_over = true;
            self.winner = Some(player);
            info!(?player, "five in a row");
            return Outcome::Win(player);
        }

        if self.board.is_full() {
            self.game_over = true;
            info!("board full; draw");
            return Outcome::Draw;
        }

        self.current_player = player.other();
        Outcome::Continue(self.current_player)
    }

    /// Start over: empty board, first player to move, game in progress.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = self.config.first_player;
        self.game_over = false;
        self.winner = None;
        debug!(first_player = ?self.current_player, "game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
