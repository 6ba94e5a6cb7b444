//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Winner and fullness checks are
//! kept separate; [`outcome`] is the usual way to combine them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use crate::{Board, GameStatus};
use tracing::instrument;

/// Full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

/// Combines the winner and fullness checks into a game status.
#[instrument]
pub fn outcome(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
