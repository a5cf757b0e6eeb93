//! Five-in-a-row detection around the last placed stone.

use crate::core::config::WIN_LENGTH;
use crate::core::{Board, Cell, Player, Position};

/// The four line axes as (row step, column step).
///
/// Each axis is scanned in both directions, so (0, 1) covers left and right.
pub const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal \
    (1, -1), // diagonal /
];

/// Check whether the stone at `pos` completes a line of `WIN_LENGTH` or more
/// for `player`.
///
/// Only the four lines through `pos` are inspected, at most
/// `WIN_LENGTH - 1` steps each way, so the cost does not depend on board
/// size. Call it with the coordinate of the stone just placed; it is not a
/// whole-board scan. Runs longer than five also win.
///
/// ```
/// use gomoku::core::{Board, Player, Position};
/// use gomoku::rules::check_win;
///
/// let board = Board::from_rows(&[
///     "XXXXX..",
///     ".......",
///     ".......",
///     ".......",
///     ".......",
///     ".......",
///     ".......",
/// ]);
/// assert!(check_win(&board, Position::new(0, 2), Player::Black));
/// assert!(!check_win(&board, Position::new(0, 2), Player::White));
/// ```
#[must_use]
pub fn check_win(board: &Board, pos: Position, player: Player) -> bool {
    AXES.iter()
        .any(|&(dr, dc)| line_length(board, pos, player, dr, dc) >= WIN_LENGTH)
}

/// Length of `player`'s run through `pos` along one axis, capped at
/// `2 * (WIN_LENGTH - 1) + 1`.
///
/// `pos` itself always counts as one.
#[must_use]
pub fn line_length(board: &Board, pos: Position, player: Player, dr: isize, dc: isize) -> usize {
    1 + run(board, pos, player, dr, dc) + run(board, pos, player, -dr, -dc)
}

fn run(board: &Board, pos: Position, player: Player, dr: isize, dc: isize) -> usize {
    let stone = Cell::Stone(player);
    (1..WIN_LENGTH)
        .map_while(|step| pos.offset(dr, dc, step, board.size()))
        .take_while(|&next| board.get(next) == stone)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, black: &[(usize, usize)], white: &[(usize, usize)]) -> Board {
        let mut board = Board::new(size);
        for &pos in black {
            board.place(pos.into(), Player::Black);
        }
        for &pos in white {
            board.place(pos.into(), Player::White);
        }
        board
    }

    #[test]
    fn test_single_stone_is_not_a_win() {
        let board = board_with(19, &[(9, 9)], &[]);
        assert!(!check_win(&board, Position::new(9, 9), Player::Black));
        for (dr, dc) in AXES {
            assert_eq!(line_length(&board, Position::new(9, 9), Player::Black, dr, dc), 1);
        }
    }

    #[test]
    fn test_horizontal_win_from_each_end_and_middle() {
        let stones = [(3, 2), (3, 3), (3, 4), (3, 5), (3, 6)];
        let board = board_with(19, &stones, &[]);
        for (r, c) in stones {
            assert!(check_win(&board, Position::new(r, c), Player::Black));
        }
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(19, &[], &[(10, 0), (11, 0), (12, 0), (13, 0), (14, 0)]);
        assert!(check_win(&board, Position::new(14, 0), Player::White));
        assert!(!check_win(&board, Position::new(14, 0), Player::Black));
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_with(19, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], &[]);
        assert!(check_win(&board, Position::new(2, 2), Player::Black));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(19, &[(0, 18), (1, 17), (2, 16), (3, 15), (4, 14)], &[]);
        assert!(check_win(&board, Position::new(0, 18), Player::Black));
        assert!(check_win(&board, Position::new(4, 14), Player::Black));
    }

    #[test]
    fn test_overline_wins() {
        let board = board_with(19, &[(5, 0), (5, 1), (5, 2), (5, 3), (5, 4), (5, 5)], &[]);
        assert!(check_win(&board, Position::new(5, 5), Player::Black));
        assert!(line_length(&board, Position::new(5, 2), Player::Black, 0, 1) >= 6);
    }

    #[test]
    fn test_four_blocked_by_opponent_is_not_a_win() {
        let board = board_with(19, &[(7, 5), (7, 6), (7, 7), (7, 8)], &[(7, 4), (7, 9)]);
        assert!(!check_win(&board, Position::new(7, 8), Player::Black));
        assert_eq!(line_length(&board, Position::new(7, 8), Player::Black, 0, 1), 4);
    }

    #[test]
    fn test_four_blocked_by_edge_is_not_a_win() {
        let board = board_with(19, &[(0, 0), (1, 0), (2, 0), (3, 0)], &[(4, 0)]);
        assert!(!check_win(&board, Position::new(0, 0), Player::Black));
    }

    #[test]
    fn test_gap_breaks_the_line() {
        let board = board_with(19, &[(2, 2), (2, 3), (2, 5), (2, 6), (2, 7)], &[]);
        assert!(!check_win(&board, Position::new(2, 3), Player::Black));
        assert!(!check_win(&board, Position::new(2, 5), Player::Black));
    }

    #[test]
    fn test_line_through_corner_on_small_board() {
        let board = board_with(5, &[(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)], &[]);
        assert!(check_win(&board, Position::new(4, 0), Player::Black));
    }

    #[test]
    fn test_board_smaller_than_win_length_never_wins() {
        let rows = ["XXXX", "XXXX", "XXXX", "XXXX"];
        let board = Board::from_rows(&rows);
        for (pos, _) in board.cells() {
            assert!(!check_win(&board, pos, Player::Black));
        }
    }
}
