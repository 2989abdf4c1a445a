//! Contract-based validation for moves.
//!
//! A contract pairs the preconditions a move must meet before it touches
//! the engine with the postconditions the engine must meet afterwards.

use crate::invariants::{ConnectInvariants, InvariantSet, InvariantViolation};
use crate::{GameEngine, Mark, Move, MoveError};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`MoveError::GameOver`] once the state is terminal.
    #[instrument(skip(game))]
    pub fn check(game: &GameEngine) -> Result<(), MoveError> {
        if game.current_state().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the moving mark holds the turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongTurn`] for any other mark, `Empty` included.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        let expected = game.current_turn();
        if mov.mark != expected {
            Err(MoveError::WrongTurn {
                expected,
                got: mov.mark,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is on the board and empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::IllegalMove`] wrapping the board's reason.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        let mark = game.board().cell_at(mov.position)?;
        if mark != Mark::Empty {
            Err(crate::BoardError::OccupiedCell(mov.position).into())
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: game in progress, then
/// turn, then cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        GameInProgress::check(game)?;
        PlayersTurn::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Postconditions:
/// - every cell marked before the move still holds the same mark
/// - exactly one move was added to the history
/// - the engine invariants hold
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(game: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let overwritten = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .any(|(old, new)| old.is_player() && old != new);
        if overwritten {
            violations.push(InvariantViolation::new("Placed marks are never overwritten"));
        }

        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new("Each move extends the history by one"));
        }

        if let Err(mut found) = ConnectInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for v in &violations {
                warn!(description = %v.description, "Move postcondition violated");
            }
            Err(violations)
        }
    }
}
