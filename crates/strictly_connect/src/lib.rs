//! Strictly Connect - K-in-a-row game engine
//!
//! Two players take turns placing marks on an `N`x`N` board; the first
//! to get `K` in a row, column or diagonal wins. A full board with no
//! such line is a draw.
//!
//! # Architecture
//!
//! - **Board**: the grid of [`Mark`]s
//! - **Rules**: win detection through the last move, draw detection
//! - **Engine**: move legality, turn order, outcome
//! - **Policies**: pluggable move selection for automated players
//!
//! # Example
//!
//! ```
//! use strictly_connect::{GameEngine, GameState, Mark, Position};
//!
//! let mut game = GameEngine::new(9, 5)?;
//! for col in 0..4 {
//!     game.apply_move(Position::new(0, col), Mark::PlayerA)?;
//!     game.apply_move(Position::new(8, col), Mark::PlayerB)?;
//! }
//! let state = game.apply_move(Position::new(0, 4), Mark::PlayerA)?;
//! assert_eq!(state, GameState::Win(Mark::PlayerA));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod engine;
mod error;
mod policy;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Move;
pub use board::Board;
pub use config::{Config, DEFAULT_SIDE, DEFAULT_WIN_LENGTH};
pub use engine::GameEngine;
pub use error::{BoardError, ConfigError, MoveError, PolicyError, SnapshotError};
pub use policy::{FirstAvailablePolicy, MovePolicy, RandomPolicy};
pub use position::Position;
pub use rules::{Direction, WinningLine};
pub use types::{GameState, Mark};
