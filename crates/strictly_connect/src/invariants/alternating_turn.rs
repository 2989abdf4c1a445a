//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameEngine, Mark};

/// Invariant: players alternate turns, X first.
///
/// While the game is ongoing the turn marker names the player after the
/// last mover. Once terminal it stays on the player who made the final
/// move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Mark::PlayerA } else { Mark::PlayerB };
            mov.mark == expected
        });
        if !alternates {
            return false;
        }

        let expected_turn = match history.last() {
            None => Mark::PlayerA,
            Some(last) if game.current_state().is_terminal() => last.mark,
            Some(last) => last.mark.opponent(),
        };
        game.current_turn() == expected_turn
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        let game = GameEngine::new(5, 3).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameEngine::new(5, 3).unwrap();
        game.apply_move(Position::new(0, 0), Mark::PlayerA).unwrap();
        game.apply_move(Position::new(1, 1), Mark::PlayerB).unwrap();
        game.apply_move(Position::new(2, 2), Mark::PlayerA).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_turn(), Mark::PlayerB);
    }

    #[test]
    fn test_flipped_turn_marker_violates() {
        let mut game = GameEngine::new(5, 3).unwrap();
        game.apply_move(Position::new(0, 0), Mark::PlayerA).unwrap();
        game.turn = Mark::PlayerA;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
