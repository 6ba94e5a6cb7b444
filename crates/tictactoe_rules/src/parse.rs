//! Reading boards from the textual cell list used by front-ends.
//!
//! A board crosses the boundary as nine strings in row-major order:
//! `""` for an empty cell, `"X"` or `"O"` for a mark.

use crate::{Board, BoardError, BoardErrorKind, Player, Square};
use std::str::FromStr;
use tracing::{debug, instrument};

impl FromStr for Player {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(BoardError::new(BoardErrorKind::UnknownMarker(
                other.to_string(),
            ))),
        }
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "." | "-" => Ok(Square::Empty),
            other => other.parse().map(Square::Occupied),
        }
    }
}

impl Square {
    /// The cell text for this square.
    pub fn as_cell(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

impl Board {
    /// Builds a board from exactly nine cell strings.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self, BoardError> {
        if cells.len() != 9 {
            return Err(BoardError::new(BoardErrorKind::WrongLength(cells.len())));
        }

        let mut squares = [Square::Empty; 9];
        for (index, (slot, cell)) in squares.iter_mut().zip(cells).enumerate() {
            let cell = cell.as_ref();
            *slot = cell.parse().map_err(|_| {
                BoardError::new(BoardErrorKind::InvalidCell {
                    index,
                    cell: cell.to_string(),
                })
            })?;
        }

        Ok(Board::from_squares(squares))
    }

    /// The nine cell strings in row-major order.
    pub fn to_cells(&self) -> [&'static str; 9] {
        (*self.squares()).map(Square::as_cell)
    }
}

/// Accepts a JSON array (`["X","","O",...]`) or nine comma-separated
/// cells (`X,,O,...`).
impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('[') {
            debug!("Reading board as JSON array");
            let cells: Vec<String> = serde_json::from_str(trimmed)?;
            Board::from_cells(&cells)
        } else if trimmed.contains(',') {
            debug!("Reading board as comma-separated cells");
            let cells: Vec<&str> = trimmed.split(',').collect();
            Board::from_cells(&cells)
        } else {
            Err(BoardError::new(BoardErrorKind::Malformed(
                "expected a JSON array or comma-separated cells".to_string(),
            )))
        }
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<String>) -> Result<Self, Self::Error> {
        Board::from_cells(&cells)
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board.to_cells().iter().map(|c| c.to_string()).collect()
    }
}
