//! Game rules for K-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so the engine, invariants and policies can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Direction, WinningLine, check_win, find_winning_line};
