//! Draw detection.

use super::win::check_win;
use crate::Board;
use tracing::instrument;

/// A full board on which no cell belongs to a winning window.
///
/// Scans every cell. The per-move path only needs [`Board::is_full`].
#[instrument(skip(board), fields(side = board.side()))]
pub fn is_draw(board: &Board, win_length: usize) -> bool {
    if !board.is_full() {
        return false;
    }
    let side = board.side();
    !board.cells().iter().enumerate().any(|(index, &mark)| {
        check_win(board, crate::Position::from_index(index, side), mark, win_length)
    })
}
