//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed by row and column.
///
/// The flattened index of a position on a board of side `n` is
/// `row * n + col`. Positions carry no board size, so range checks
/// happen on the [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Splits a flattened index for a board of the given side.
    ///
    /// `side` must be non-zero.
    pub fn from_index(index: usize, side: usize) -> Self {
        Self {
            row: index / side,
            col: index % side,
        }
    }

    /// Flattened index for a board of the given side.
    pub fn to_index(self, side: usize) -> usize {
        self.row * side + self.col
    }

    /// True if the position lies on a board of the given side.
    pub fn is_within(self, side: usize) -> bool {
        self.row < side && self.col < side
    }

    /// Steps `distance` cells along `(d_row, d_col)`, staying on the board.
    ///
    /// Returns `None` when the step leaves a board of the given side.
    pub fn offset(self, d_row: isize, d_col: isize, distance: isize, side: usize) -> Option<Self> {
        let row = self.row as isize + d_row * distance;
        let col = self.col as isize + d_col * distance;
        let side = side as isize;
        if (0..side).contains(&row) && (0..side).contains(&col) {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
