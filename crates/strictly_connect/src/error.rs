//! Error types for board access, move application and configuration.

use crate::{Mark, Position};

/// Error raised by direct board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The position lies outside the grid.
    #[display("Position {} is outside the {}x{} board", position, side, side)]
    OutOfRange {
        /// Offending position.
        position: Position,
        /// Board side length.
        side: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    OccupiedCell(Position),

    /// Stored cells do not fill a `side`x`side` grid.
    #[display("Board of side {} cannot hold {} cells", side, cells)]
    CellCount {
        /// Claimed side length.
        side: usize,
        /// Number of cells supplied.
        cells: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error raised when a move is rejected.
///
/// A rejected move leaves the board, turn and state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already ended.
    #[display("Game is already over")]
    GameOver,

    /// The mark does not hold the turn.
    #[display("It's {}'s turn, not {}'s", expected, got)]
    WrongTurn {
        /// Mark that holds the turn.
        expected: Mark,
        /// Mark that tried to move.
        got: Mark,
    },

    /// The target cell cannot take a mark.
    #[display("Illegal move: {}", _0)]
    IllegalMove(BoardError),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::IllegalMove(err) => Some(err),
            MoveError::GameOver | MoveError::WrongTurn { .. } => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::IllegalMove(err)
    }
}

/// Error raised while building or loading a [`Config`](crate::Config).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Side and win length do not satisfy `1 <= win_length <= side`.
    #[display("Invalid configuration: win length {} on a {}x{} board", win_length, side, side)]
    InvalidConfiguration {
        /// Requested side length.
        side: usize,
        /// Requested win length.
        win_length: usize,
    },

    /// The config file could not be read.
    #[display("Failed to read config file: {}", _0)]
    Read(String),

    /// The config file is not valid TOML for a config.
    #[display("Failed to parse config: {}", _0)]
    Parse(String),
}

impl std::error::Error for ConfigError {}

/// Error raised by a [`MovePolicy`](crate::MovePolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PolicyError {
    /// Asked to choose from an empty move list.
    #[display("No legal moves to choose from")]
    NoLegalMoves,

    /// The engine rejected the chosen move.
    #[display("Policy move rejected: {}", _0)]
    Rejected(MoveError),
}

impl std::error::Error for PolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolicyError::Rejected(err) => Some(err),
            PolicyError::NoLegalMoves => None,
        }
    }
}

impl From<MoveError> for PolicyError {
    fn from(err: MoveError) -> Self {
        PolicyError::Rejected(err)
    }
}

/// Error raised when a serialized [`GameEngine`](crate::GameEngine) is
/// inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// The board is not the size the config asks for.
    #[display("Board side {} does not match configured side {}", board, config)]
    SideMismatch {
        /// Side from the config.
        config: usize,
        /// Side of the stored board.
        board: usize,
    },

    /// The move history is not a legal game.
    #[display("History does not replay: {}", _0)]
    Replay(MoveError),

    /// Board, turn or state disagree with the replayed history.
    #[display("Snapshot does not match its move history")]
    Diverged,
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Replay(err) => Some(err),
            SnapshotError::SideMismatch { .. } | SnapshotError::Diverged => None,
        }
    }
}

impl From<MoveError> for SnapshotError {
    fn from(err: MoveError) -> Self {
        SnapshotError::Replay(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_illegal_move_reports_board_error_as_source() {
        let err = MoveError::from(BoardError::OccupiedCell(Position::new(1, 2)));
        assert!(err.to_string().contains("occupied"));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Cell (1, 2) is already occupied"));
    }

    #[test]
    fn test_wrong_turn_message() {
        let err = MoveError::WrongTurn {
            expected: Mark::PlayerA,
            got: Mark::PlayerB,
        };
        assert_eq!(err.to_string(), "It's X's turn, not O's");
        assert!(err.source().is_none());
    }
}
