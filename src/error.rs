//! Error types.
//!
//! Occupied cells and moves after the game has ended are not errors; they
//! produce `Outcome::Ignored`. Errors cover only contract violations that an
//! adapter accepting free-form input may want to report instead of panic on.

/// Errors returned by the checked entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GomokuError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("board size {size} is not supported (expected 1..={max})")]
    InvalidBoardSize { size: usize, max: usize },
}
