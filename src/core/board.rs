//! The square grid of intersections.
//!
//! ## Board
//!
//! Row-major `Vec<Cell>` of fixed side length. The side length never
//! changes after construction. An occupied-cell counter is kept alongside
//! the cells so `is_full` is O(1).

use serde::{Deserialize, Serialize};

use super::config::MAX_BOARD_SIZE;
use super::Player;

/// Board coordinate. Row 0 is the top row, column 0 the leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` times along `(dr, dc)`.
    ///
    /// Returns `None` if the result would leave a board of side `size`.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize, steps: usize, size: usize) -> Option<Self> {
        let steps = isize::try_from(steps).ok()?;
        let row = self.row.checked_add_signed(dr.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(steps)?)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// State of a single intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    /// The player whose stone occupies this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    occupied: usize,
}

impl Board {
    /// Create an empty `size` × `size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least 1 cell per side");
        assert!(
            size <= MAX_BOARD_SIZE,
            "At most {MAX_BOARD_SIZE} cells per side supported"
        );

        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            occupied: 0,
        }
    }

    /// Build a board from text rows.
    ///
    /// `X`/`B` is a black stone, `O`/`W` a white stone, anything else empty.
    /// All rows must have as many characters as there are rows.
    ///
    /// ```
    /// use gomoku::core::{Board, Cell, Player, Position};
    ///
    /// let board = Board::from_rows(&["X..", ".O.", "..."]);
    /// assert_eq!(board.get(Position::new(0, 0)), Cell::Stone(Player::Black));
    /// assert_eq!(board.get(Position::new(1, 1)), Cell::Stone(Player::White));
    /// assert_eq!(board.occupied(), 2);
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new(rows.len());
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                board.size,
                "Row {row} must have {} cells",
                board.size
            );
            for (col, ch) in line.chars().enumerate() {
                let player = match ch {
                    'X' | 'B' => Player::Black,
                    'O' | 'W' => Player::White,
                    _ => continue,
                };
                board.place(Position::new(row, col), player);
            }
        }
        board
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a position lies on this board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get the cell at `pos`.
    ///
    /// Panics if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Put `player`'s stone on an empty cell.
    ///
    /// Returns false, leaving the board unchanged, if the cell is occupied.
    /// Panics if `pos` is off the board.
    pub fn place(&mut self, pos: Position, player: Player) -> bool {
        let idx = self.index(pos);
        if !self.cells[idx].is_empty() {
            return false;
        }
        self.cells[idx] = Cell::Stone(player);
        self.occupied += 1;
        true
    }

    /// Remove every stone.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.occupied = 0;
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// True iff no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    /// Iterate over every (position, cell) pair in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Position::new(i / size, i % size), cell))
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "Position ({}, {}) is outside the {}x{} board",
            pos.row,
            pos.col,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }
}
