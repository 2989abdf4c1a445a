//! Core domain types: marks and game status.

use serde::{Deserialize, Serialize};

/// Contents of a single cell, and the identity of a player.
///
/// `PlayerA` always moves first. `Empty` never holds the turn.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    #[display(".")]
    Empty,
    /// First player, rendered as `X`.
    #[display("X")]
    PlayerA,
    /// Second player, rendered as `O`.
    #[display("O")]
    PlayerB,
}

impl Mark {
    /// Returns the other player. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for `Empty`.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// True for either player mark.
    pub fn is_player(self) -> bool {
        !self.is_empty()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Moves are still accepted.
    Ongoing,
    /// The given mark completed a winning line.
    Win(Mark),
    /// The board filled up with no winner.
    Draw,
}

impl GameState {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameState::Win(mark) => Some(mark),
            GameState::Ongoing | GameState::Draw => None,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Ongoing => write!(f, "In progress"),
            GameState::Win(mark) => write!(f, "Player {} wins", mark),
            GameState::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_swaps_players() {
        assert_eq!(Mark::PlayerA.opponent(), Mark::PlayerB);
        assert_eq!(Mark::PlayerB.opponent(), Mark::PlayerA);
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
    }

    #[test]
    fn test_mark_symbols() {
        let symbols: Vec<String> = Mark::iter().map(|m| m.to_string()).collect();
        assert_eq!(symbols, vec![".", "X", "O"]);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GameState::Ongoing.is_terminal());
        assert!(GameState::Draw.is_terminal());
        assert!(GameState::Win(Mark::PlayerB).is_terminal());
        assert_eq!(GameState::Win(Mark::PlayerB).winner(), Some(Mark::PlayerB));
        assert_eq!(GameState::Draw.winner(), None);
    }
}
