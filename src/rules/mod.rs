//! Game rules.
//!
//! - `check_win`: five-in-a-row detection around the last placed stone
//! - `Outcome`: what a placement did, for the adapter to render
//! - `GameStatus`: in progress or ended
//!
//! The rules never touch rendering or input; `GameState` applies them.

pub mod outcome;
pub mod win;

pub use outcome::{GameStatus, Outcome};
pub use win::{check_win, line_length, AXES};
