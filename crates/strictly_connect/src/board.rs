//! Square game board.

use crate::{BoardError, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An `side`x`side` grid of marks in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardCells")]
pub struct Board {
    side: usize,
    cells: Vec<Mark>,
}

/// Unchecked serialized form of [`Board`].
#[derive(Deserialize)]
struct BoardCells {
    side: usize,
    cells: Vec<Mark>,
}

impl TryFrom<BoardCells> for Board {
    type Error = BoardError;

    fn try_from(raw: BoardCells) -> Result<Self, Self::Error> {
        if raw.side.checked_mul(raw.side) != Some(raw.cells.len()) {
            return Err(BoardError::CellCount {
                side: raw.side,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            side: raw.side,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// If `side * side` overflows. [`Config`](crate::Config) rules that out.
    #[instrument]
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![Mark::Empty; side * side],
        }
    }

    /// Side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Returns the mark at `pos`, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Mark> {
        if pos.is_within(self.side) {
            self.cells.get(pos.to_index(self.side)).copied()
        } else {
            None
        }
    }

    /// Returns the mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if `pos` is off the board.
    pub fn cell_at(&self, pos: Position) -> Result<Mark, BoardError> {
        self.get(pos).ok_or(BoardError::OutOfRange {
            position: pos,
            side: self.side,
        })
    }

    /// Places `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] off the board and
    /// [`BoardError::OccupiedCell`] if the cell already holds a mark.
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(side = self.side))]
    pub fn set_cell(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        if !self.cell_at(pos)?.is_empty() {
            return Err(BoardError::OccupiedCell(pos));
        }
        let index = pos.to_index(self.side);
        self.cells[index] = mark;
        Ok(())
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.count(Mark::Empty)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    /// Every empty cell, in ascending index order.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(index, _)| Position::from_index(index, self.side))
            .collect()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with column numbers on top and row numbers on the left.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.side.saturating_sub(1).to_string().len();
        write!(f, "{:width$}", "", width = width)?;
        for col in 0..self.side {
            write!(f, " {:>width$}", col, width = width)?;
        }
        for row in 0..self.side {
            writeln!(f)?;
            write!(f, "{:>width$}", row, width = width)?;
            for mark in &self.cells[row * self.side..(row + 1) * self.side] {
                write!(f, " {:>width$}", mark.to_string(), width = width)?;
            }
        }
        Ok(())
    }
}
