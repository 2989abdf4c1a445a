//! Move selection for automated players.
//!
//! A [`MovePolicy`] sees the board read-only and picks one of the legal
//! moves the caller hands it. Applying the move is the engine's job.

use crate::{Board, Mark, PolicyError, Position};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Strategy for choosing a move.
pub trait MovePolicy {
    /// Chooses one element of `legal_moves` for `turn` to play.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::NoLegalMoves`] if `legal_moves` is empty.
    fn select(
        &mut self,
        board: &Board,
        legal_moves: &[Position],
        turn: Mark,
    ) -> Result<Position, PolicyError>;

    /// Display name for logs and front-ends.
    fn name(&self) -> &str;
}

/// Uniformly random choice among the legal moves.
///
/// No preference for winning or blocking moves, and nothing about past
/// games is kept; the generator is the only state.
#[derive(Debug, Clone)]
pub struct RandomPolicy<R = ChaCha8Rng> {
    rng: R,
}

impl RandomPolicy<ChaCha8Rng> {
    /// Creates a policy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a reproducible policy: equal seeds give equal choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPolicy<R> {
    /// Creates a policy drawing from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MovePolicy for RandomPolicy<R> {
    #[instrument(skip(self, _board, legal_moves), fields(choices = legal_moves.len()))]
    fn select(
        &mut self,
        _board: &Board,
        legal_moves: &[Position],
        turn: Mark,
    ) -> Result<Position, PolicyError> {
        let choice = legal_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(PolicyError::NoLegalMoves)?;
        debug!(%turn, position = %choice, "Random policy chose move");
        Ok(choice)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Always takes the lowest-index legal move.
///
/// Deterministic baseline, handy for tests and demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailablePolicy;

impl MovePolicy for FirstAvailablePolicy {
    fn select(
        &mut self,
        _board: &Board,
        legal_moves: &[Position],
        _turn: Mark,
    ) -> Result<Position, PolicyError> {
        legal_moves.first().copied().ok_or(PolicyError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "first-available"
    }
}
