//! Core domain types for tic-tac-toe.

use crate::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player writes on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Checks if the square holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// The player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        Square::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as the nine-string cell list (`""`, `"X"`, `"O"`) that
/// front-ends exchange; deserialization goes through [`Board::from_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    #[instrument(skip(self))]
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Clears every square for a fresh game.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions that hold no mark, in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// The player holding a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Whether every square is occupied.
    ///
    /// This does not look for a winner; see [`Board::status`] for the
    /// combined verdict.
    pub fn is_tie(&self) -> bool {
        rules::is_full(self)
    }

    /// Win, draw, or still in progress.
    pub fn status(&self) -> GameStatus {
        rules::outcome(self)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&(pos + 1).to_string()),
                    Square::Occupied(player) => result.push(player.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::ops::Index<Position> for Board {
    type Output = Square;

    fn index(&self, pos: Position) -> &Square {
        &self.squares[pos.to_index()]
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "winner: {}", player),
            GameStatus::Draw => write!(f, "tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| s.is_empty()));
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board[Position::Center].player(), Some(Player::X));
        assert!(!board.is_empty(Position::Center));
        assert!(!board.empty_positions().contains(&Position::Center));
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Player::O.into());
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won(Player::O).to_string(), "winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "tie");
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
        assert!(GameStatus::Draw.is_over());
        assert!(!GameStatus::InProgress.is_over());
    }
}
