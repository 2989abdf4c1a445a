//! History consistency invariant: the move log and the board agree.

use super::Invariant;
use crate::GameEngine;

/// Invariant: every logged move is on the board, and nothing else is.
///
/// Each history entry's cell holds that entry's mark, and the number of
/// occupied cells equals the history length. Together these rule out
/// overwritten or phantom marks.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        let history = game.history();

        let logged_on_board = history
            .iter()
            .all(|mov| board.get(mov.position) == Some(mov.mark));
        let occupied = board.cells().iter().filter(|m| m.is_player()).count();

        logged_on_board && occupied == history.len()
    }

    fn description() -> &'static str {
        "Move history matches the marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_holds_through_play() {
        let mut game = GameEngine::new(4, 4).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
        game.apply_move(Position::new(3, 3), Mark::PlayerA).unwrap();
        game.apply_move(Position::new(0, 3), Mark::PlayerB).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_dropped_history_entry_violates() {
        let mut game = GameEngine::new(4, 4).unwrap();
        game.apply_move(Position::new(3, 3), Mark::PlayerA).unwrap();
        game.history.clear();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
