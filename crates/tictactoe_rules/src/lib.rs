//! Tic-tac-toe win and tie detection.
//!
//! Pure, stateless evaluation of a 3x3 board snapshot:
//!
//! - [`evaluate`] returns the player holding a completed line, if any.
//! - [`is_tie`] reports whether every square is occupied.
//!
//! The two checks are independent. A drawn game is a full board with no
//! winner; [`outcome`] combines them for callers that want one verdict.
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Board, GameStatus, Player, evaluate, is_tie, outcome};
//!
//! let board = Board::from_cells(&["X", "O", "X", "X", "O", "O", "O", "X", "X"])?;
//! assert_eq!(evaluate(&board), None);
//! assert!(is_tie(&board));
//! assert_eq!(outcome(&board), GameStatus::Draw);
//!
//! let board: Board = "X,X,X,,,,,,".parse()?;
//! assert_eq!(evaluate(&board), Some(Player::X));
//! # Ok::<(), tictactoe_rules::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod parse;
mod position;
pub mod rules;
mod types;

pub use error::{BoardError, BoardErrorKind};
pub use position::Position;
pub use rules::{LINES, check_winner, is_draw, is_full, outcome, winning_line};
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity at call sites that talk about marks on the board.
pub type Mark = Player;

/// Returns the player occupying a completed line, or `None`.
///
/// Lines are checked rows top to bottom, then columns left to right,
/// then the main and anti diagonals; the first match is returned.
pub fn evaluate(board: &Board) -> Option<Player> {
    check_winner(board)
}

/// True iff every square holds a mark.
///
/// Callers should confirm [`evaluate`] found no winner before treating a
/// full board as a draw.
pub fn is_tie(board: &Board) -> bool {
    is_full(board)
}
