//! Tests for automated players driving the engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_connect::{
    Board, FirstAvailablePolicy, GameEngine, GameState, Mark, MoveError, MovePolicy, PolicyError,
    Position, RandomPolicy,
};

/// Plays both sides with the same policy until the game ends.
fn self_play<P: MovePolicy>(game: &mut GameEngine, policy: &mut P) -> usize {
    let mut moves = 0;
    while !game.current_state().is_terminal() {
        game.play_policy_move(policy).expect("Policy move accepted");
        moves += 1;
    }
    moves
}

#[test]
fn test_random_self_play_terminates() {
    for seed in 0..20 {
        let mut game = GameEngine::new(9, 5).unwrap();
        let mut policy = RandomPolicy::seeded(seed);
        let moves = self_play(&mut game, &mut policy);
        assert!(moves <= 81);
        assert_eq!(moves, game.history().len());
        assert!(game.current_state().is_terminal());
    }
}

#[test]
fn test_seeded_games_replay_identically() {
    let mut a = GameEngine::new(7, 4).unwrap();
    let mut b = GameEngine::new(7, 4).unwrap();
    self_play(&mut a, &mut RandomPolicy::seeded(99));
    self_play(&mut b, &mut RandomPolicy::seeded(99));
    assert_eq!(a.history(), b.history());
    assert_eq!(a.current_state(), b.current_state());
}

#[test]
fn test_custom_rng() {
    let mut policy = RandomPolicy::with_rng(ChaCha8Rng::seed_from_u64(5));
    let mut game = GameEngine::new(4, 4).unwrap();
    let mov = game.play_policy_move(&mut policy).unwrap();
    assert_eq!(mov.mark, Mark::PlayerA);
    assert_eq!(game.cell_at(mov.position), Ok(Mark::PlayerA));
}

#[test]
fn test_first_available_fills_rows_in_order() {
    // Alternating left to right on a 3x3 board needing 3: X takes 0, 2,
    // 4 and then 6 completes the anti-diagonal.
    let mut game = GameEngine::new(3, 3).unwrap();
    let moves = self_play(&mut game, &mut FirstAvailablePolicy);
    assert_eq!(moves, 7);
    assert_eq!(game.current_state(), GameState::Win(Mark::PlayerA));
    let line = game.winning_line().unwrap();
    assert!(line.contains(Position::new(2, 0)));
}

#[test]
fn test_policy_move_after_game_over() {
    let mut game = GameEngine::new(2, 1).unwrap();
    game.play_policy_move(&mut FirstAvailablePolicy).unwrap();
    assert_eq!(
        game.play_policy_move(&mut FirstAvailablePolicy),
        Err(PolicyError::Rejected(MoveError::GameOver))
    );
}

/// Picks a fixed cell whether or not it is legal.
struct Stubborn(Position);

impl MovePolicy for Stubborn {
    fn select(&mut self, _: &Board, _: &[Position], _: Mark) -> Result<Position, PolicyError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

#[test]
fn test_engine_rejects_illegal_policy_choice() {
    let mut game = GameEngine::new(3, 3).unwrap();
    let mut policy = Stubborn(Position::new(1, 1));
    game.play_policy_move(&mut policy).unwrap();
    let before = game.clone();
    assert!(matches!(
        game.play_policy_move(&mut policy),
        Err(PolicyError::Rejected(MoveError::IllegalMove(_)))
    ));
    assert_eq!(game, before);
}

#[test]
fn test_policies_are_object_safe() {
    let mut policies: Vec<Box<dyn MovePolicy>> = vec![
        Box::new(RandomPolicy::seeded(1)),
        Box::new(FirstAvailablePolicy),
    ];
    let mut game = GameEngine::new(5, 3).unwrap();
    for policy in policies.iter_mut() {
        game.play_policy_move(policy.as_mut()).unwrap();
    }
    assert_eq!(game.history().len(), 2);
}
