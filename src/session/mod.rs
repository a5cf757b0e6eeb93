//! Adapter contract between the game core and a user interface.
//!
//! - `BoardView`: what a display must be able to draw
//! - `Status`: the status line derived from each outcome
//! - `Session`: owns one `GameState` plus one view and routes input to both

pub mod controller;
pub mod view;

pub use controller::Session;
pub use view::{BoardView, Status};
