//! Core game types: players, board, configuration, state.
//!
//! Nothing in here knows about rendering or input. Adapters read the board
//! through `GameState` queries and drive it with `place_marker` and `reset`.

pub mod board;
pub mod config;
pub mod player;
pub mod state;

pub use board::{Board, Cell, Position};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH};
pub use player::Player;
pub use state::GameState;
