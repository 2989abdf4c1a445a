//! First-class move records.
//!
//! Moves are domain events: they can be validated before they are
//! applied, logged, and replayed to rebuild a game.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}
