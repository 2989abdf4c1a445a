//! Win detection around the last move.
//!
//! A move can only create a win on one of the four lines running through
//! the cell it filled, so detection looks at nothing else. On each line
//! it tests every window of exactly `win_length` cells that contains the
//! move and lies entirely on the board.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Orientation of a line through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Row and column step for one cell along this direction.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// A winning window: `length` cells from `start` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// First cell of the window.
    pub start: Position,
    /// Orientation of the window.
    pub direction: Direction,
    /// Number of cells in the window.
    pub length: usize,
}

impl WinningLine {
    /// Cells of the window in order from `start`.
    pub fn cells(&self) -> Vec<Position> {
        let (d_row, d_col) = self.direction.step();
        (0..self.length as isize)
            .map(|i| {
                Position::new(
                    (self.start.row as isize + d_row * i) as usize,
                    (self.start.col as isize + d_col * i) as usize,
                )
            })
            .collect()
    }

    /// True if `pos` is one of the window's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

/// Returns true if placing `mark` at `last_move` completed a window of
/// `win_length` equal marks.
///
/// Only the four lines through `last_move` are examined. A position off
/// the board yields `false`.
#[instrument(skip(board), fields(side = board.side()))]
pub fn check_win(board: &Board, last_move: Position, mark: Mark, win_length: usize) -> bool {
    find_winning_line(board, last_move, mark, win_length).is_some()
}

/// Finds the first winning window through `last_move`, if any.
///
/// Directions are tried in [`Direction`] order and windows from the one
/// reaching furthest back to the one starting at `last_move`.
#[instrument(skip(board), fields(side = board.side()))]
pub fn find_winning_line(
    board: &Board,
    last_move: Position,
    mark: Mark,
    win_length: usize,
) -> Option<WinningLine> {
    if win_length == 0 || mark.is_empty() || board.get(last_move) != Some(mark) {
        return None;
    }

    Direction::iter().find_map(|direction| {
        window_through(board, last_move, direction, mark, win_length).map(|start| WinningLine {
            start,
            direction,
            length: win_length,
        })
    })
}

/// Start of the first all-`mark` window of `win_length` cells along
/// `direction` that contains `last_move`.
fn window_through(
    board: &Board,
    last_move: Position,
    direction: Direction,
    mark: Mark,
    win_length: usize,
) -> Option<Position> {
    let (d_row, d_col) = direction.step();
    let side = board.side();
    let reach = win_length as isize - 1;

    // How far the line extends from last_move, capped at one window length.
    let back = cells_on_board(last_move, -d_row, -d_col, reach, side);
    let ahead = cells_on_board(last_move, d_row, d_col, reach, side);

    // A window starting `offset` cells from last_move covers
    // [offset, offset + reach]; it must stay within [-back, ahead].
    (-back..=ahead - reach).find_map(|offset| {
        let uniform = (offset..=offset + reach).all(|i| {
            last_move
                .offset(d_row, d_col, i, side)
                .and_then(|pos| board.get(pos))
                == Some(mark)
        });
        if uniform {
            last_move.offset(d_row, d_col, offset, side)
        } else {
            None
        }
    })
}

/// Number of consecutive on-board cells beyond `from` along the step,
/// up to `limit`.
fn cells_on_board(from: Position, d_row: isize, d_col: isize, limit: isize, side: usize) -> isize {
    (1..=limit)
        .take_while(|&i| from.offset(d_row, d_col, i, side).is_some())
        .count() as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(side: usize, cells: &[(usize, usize)], mark: Mark) -> Board {
        let mut board = Board::new(side);
        for &(row, col) in cells {
            board.set_cell(Position::new(row, col), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_win_on_lone_mark() {
        let board = board_with(9, &[(4, 4)], Mark::PlayerA);
        assert!(!check_win(&board, Position::new(4, 4), Mark::PlayerA, 5));
    }

    #[test]
    fn test_horizontal_win_completed_in_middle() {
        let cells = [(2, 1), (2, 2), (2, 3), (2, 4), (2, 5)];
        let board = board_with(9, &cells, Mark::PlayerA);
        let line = find_winning_line(&board, Position::new(2, 3), Mark::PlayerA, 5).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.start, Position::new(2, 1));
        assert_eq!(line.cells().len(), 5);
    }

    #[test]
    fn test_vertical_win_at_bottom_edge() {
        let cells = [(5, 8), (6, 8), (7, 8), (8, 8)];
        let board = board_with(9, &cells, Mark::PlayerB);
        assert!(check_win(&board, Position::new(8, 8), Mark::PlayerB, 4));
    }

    #[test]
    fn test_anti_diagonal_win_touching_corners() {
        let cells = [(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)];
        let board = board_with(5, &cells, Mark::PlayerA);
        let line = find_winning_line(&board, Position::new(4, 0), Mark::PlayerA, 5).unwrap();
        assert_eq!(line.direction, Direction::AntiDiagonal);
        assert_eq!(line.start, Position::new(0, 4));
        assert!(line.contains(Position::new(2, 2)));
    }

    #[test]
    fn test_run_does_not_wrap_across_rows() {
        // Four at the end of row 0 plus the first cell of row 1 are
        // consecutive indices but not a line.
        let cells = [(0, 5), (0, 6), (0, 7), (0, 8), (1, 0)];
        let board = board_with(9, &cells, Mark::PlayerA);
        for &(row, col) in &cells {
            assert!(!check_win(&board, Position::new(row, col), Mark::PlayerA, 5));
        }
    }

    #[test]
    fn test_wrong_mark_never_wins() {
        let cells = [(0, 0), (0, 1), (0, 2)];
        let board = board_with(3, &cells, Mark::PlayerA);
        assert!(!check_win(&board, Position::new(0, 2), Mark::PlayerB, 3));
        assert!(!check_win(&board, Position::new(0, 2), Mark::Empty, 3));
    }

    #[test]
    fn test_single_cell_window() {
        let board = board_with(4, &[(3, 3)], Mark::PlayerB);
        assert!(check_win(&board, Position::new(3, 3), Mark::PlayerB, 1));
    }

    #[test]
    fn test_off_board_move_is_not_a_win() {
        let board = Board::new(3);
        assert!(!check_win(&board, Position::new(5, 5), Mark::PlayerA, 1));
    }

    #[test]
    fn test_full_line_window_when_win_length_equals_side() {
        let board = board_with(4, &[(0, 0), (1, 1), (2, 2)], Mark::PlayerA);
        assert!(!check_win(&board, Position::new(2, 2), Mark::PlayerA, 4));
        let board = board_with(4, &[(0, 0), (1, 1), (2, 2), (3, 3)], Mark::PlayerA);
        assert!(check_win(&board, Position::new(1, 1), Mark::PlayerA, 4));
    }
}
