//! Terminal state invariant: the recorded outcome matches the board.

use super::Invariant;
use crate::rules::{check_win, is_draw};
use crate::{GameEngine, GameState};

/// Invariant: the game state agrees with the board.
///
/// - `Win(m)`: the last move was `m`'s and completes a winning window.
/// - `Draw`: the board is full and holds no winning window.
/// - `Ongoing`: the board has an empty cell and the last move did not win.
pub struct TerminalStateInvariant;

impl Invariant<GameEngine> for TerminalStateInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        let win_length = game.config().win_length();
        let last_won = game
            .history()
            .last()
            .is_some_and(|last| check_win(board, last.position, last.mark, win_length));

        match game.current_state() {
            GameState::Win(mark) => {
                last_won && game.history().last().is_some_and(|last| last.mark == mark)
            }
            GameState::Draw => is_draw(board, win_length),
            GameState::Ongoing => !board.is_full() && !last_won,
        }
    }

    fn description() -> &'static str {
        "Game state matches the board (win, draw or ongoing)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_holds_for_win() {
        let mut game = GameEngine::new(3, 2).unwrap();
        game.apply_move(Position::new(0, 0), Mark::PlayerA).unwrap();
        game.apply_move(Position::new(2, 2), Mark::PlayerB).unwrap();
        let state = game.apply_move(Position::new(0, 1), Mark::PlayerA).unwrap();
        assert_eq!(state, GameState::Win(Mark::PlayerA));
        assert!(TerminalStateInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_win_violates() {
        let mut game = GameEngine::new(3, 2).unwrap();
        game.apply_move(Position::new(0, 0), Mark::PlayerA).unwrap();
        game.apply_move(Position::new(2, 2), Mark::PlayerB).unwrap();
        game.apply_move(Position::new(0, 1), Mark::PlayerA).unwrap();
        game.state = GameState::Ongoing;
        assert!(!TerminalStateInvariant::holds(&game));
    }

    #[test]
    fn test_false_draw_violates() {
        let mut game = GameEngine::new(3, 3).unwrap();
        game.state = GameState::Draw;
        assert!(!TerminalStateInvariant::holds(&game));
    }
}
