//! The game engine: board, turn order and outcome.

use crate::contracts::{Contract, MoveContract};
use crate::rules::{self, WinningLine};
use crate::{
    Board, BoardError, Config, ConfigError, GameState, Mark, Move, MoveError, MovePolicy,
    PolicyError, Position, SnapshotError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// K-in-a-row game engine.
///
/// Owns the board, whose turn it is, the game state and the move
/// history. The board only changes through [`GameEngine::apply_move`].
/// Once the state is terminal every further move is rejected; start
/// again with [`GameEngine::restart`].
///
/// A deserialized engine is accepted only if replaying its history
/// reproduces its board, turn and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineSnapshot")]
pub struct GameEngine {
    pub(crate) config: Config,
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
}

/// Unchecked serialized form of [`GameEngine`].
#[derive(Deserialize)]
struct EngineSnapshot {
    config: Config,
    board: Board,
    turn: Mark,
    state: GameState,
    history: Vec<Move>,
}

impl TryFrom<EngineSnapshot> for GameEngine {
    type Error = SnapshotError;

    #[instrument(skip(snapshot), fields(moves = snapshot.history.len()))]
    fn try_from(snapshot: EngineSnapshot) -> Result<Self, Self::Error> {
        if snapshot.board.side() != snapshot.config.side() {
            return Err(SnapshotError::SideMismatch {
                config: snapshot.config.side(),
                board: snapshot.board.side(),
            });
        }
        let replayed = Self::replay(snapshot.config, &snapshot.history)?;
        if replayed.board != snapshot.board
            || replayed.turn != snapshot.turn
            || replayed.state != snapshot.state
        {
            warn!("Snapshot disagrees with its history");
            return Err(SnapshotError::Diverged);
        }
        Ok(replayed)
    }
}

impl GameEngine {
    /// Creates a new game on an `side`x`side` board needing `win_length`
    /// in a row.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if either value is
    /// zero, `win_length > side`, or the board is too large to allocate.
    #[instrument]
    pub fn new(side: usize, win_length: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_config(Config::new(side, win_length)?))
    }

    /// Creates a new game from a validated configuration.
    #[instrument]
    pub fn from_config(config: Config) -> Self {
        Self {
            board: Board::new(config.side()),
            config,
            turn: Mark::PlayerA,
            state: GameState::Ongoing,
            history: Vec::new(),
        }
    }

    /// Places `mark` at `position` and returns the resulting state.
    ///
    /// Checks, in order: the game is ongoing, `mark` holds the turn, the
    /// cell is on the board and empty. A winning move ends the game with
    /// `Win(mark)`; filling the last empty cell otherwise ends it in a
    /// `Draw`; any other move passes the turn.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`], [`MoveError::WrongTurn`] or
    /// [`MoveError::IllegalMove`]. Nothing changes on error.
    #[instrument(skip(self), fields(turn = %self.turn, state = ?self.state))]
    pub fn apply_move(&mut self, position: Position, mark: Mark) -> Result<GameState, MoveError> {
        let action = Move::new(mark, position);
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set_cell(position, mark)?;
        self.history.push(action);

        if rules::check_win(&self.board, position, mark, self.config.win_length()) {
            self.state = GameState::Win(mark);
            info!(%mark, %position, moves = self.history.len(), "Game won");
        } else if self.board.is_full() {
            self.state = GameState::Draw;
            info!(moves = self.history.len(), "Game drawn");
        } else {
            self.turn = mark.opponent();
            debug!(%mark, %position, next = %self.turn, "Move applied");
        }

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "Move postcondition failed: {:?}", post);
        }

        Ok(self.state)
    }

    /// Empty cells in ascending index order; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.state.is_terminal() {
            Vec::new()
        } else {
            self.board.legal_moves()
        }
    }

    /// Current game state.
    pub fn current_state(&self) -> GameState {
        self.state
    }

    /// Mark that moves next.
    ///
    /// Once the game is over this stays on the mark that made the final
    /// move; check [`GameEngine::current_state`] first.
    pub fn current_turn(&self) -> Mark {
        self.turn
    }

    /// Mark at `position`.
    pub fn cell_at(&self, position: Position) -> Result<Mark, BoardError> {
        self.board.cell_at(position)
    }

    /// Read-only board view.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configuration this game was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The window that won the game, if it has been won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        let winner = self.state.winner()?;
        let last = self.history.last()?;
        rules::find_winning_line(&self.board, last.position, winner, self.config.win_length())
    }

    /// Lets `policy` choose a move for the current turn and applies it.
    ///
    /// # Errors
    ///
    /// [`PolicyError::Rejected`] with [`MoveError::GameOver`] if the game
    /// has ended, or any error from the policy or from
    /// [`GameEngine::apply_move`].
    #[instrument(skip(self, policy), fields(policy = policy.name(), turn = %self.turn))]
    pub fn play_policy_move<P>(&mut self, policy: &mut P) -> Result<Move, PolicyError>
    where
        P: MovePolicy + ?Sized,
    {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver.into());
        }
        let legal = self.board.legal_moves();
        let position = policy.select(&self.board, &legal, self.turn)?;
        let mark = self.turn;
        self.apply_move(position, mark)?;
        debug!(%mark, %position, "Policy move applied");
        Ok(Move::new(mark, position))
    }

    /// Rebuilds a game by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the first move's error; moves after the game ends fail with
    /// [`MoveError::GameOver`].
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(config: Config, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::from_config(config);
        for action in moves {
            game.apply_move(action.position, action.mark)?;
        }
        Ok(game)
    }

    /// Discards this game and returns a fresh one with the same configuration.
    #[instrument(skip(self))]
    pub fn restart(self) -> Self {
        Self::from_config(self.config)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
