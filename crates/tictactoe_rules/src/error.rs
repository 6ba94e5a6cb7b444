//! Board parsing error types.

use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// What went wrong while reading a board from external input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// The cell list did not contain exactly nine entries.
    #[display("expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A cell held something other than a blank, `X` or `O`.
    #[display("unrecognized cell {:?} at index {}", cell, index)]
    InvalidCell {
        /// Board index (0-8) of the offending cell.
        index: usize,
        /// The raw cell text.
        cell: String,
    },

    /// A single marker string could not be read.
    #[display("unrecognized marker {:?}", _0)]
    UnknownMarker(String),

    /// The board text was neither a JSON array nor a comma-separated list.
    #[display("malformed board text: {}", _0)]
    Malformed(String),
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Error kind.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        warn!(error_kind = %kind, "Rejected board input");
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &BoardErrorKind {
        &self.kind
    }
}

impl From<BoardErrorKind> for BoardError {
    #[track_caller]
    fn from(kind: BoardErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<serde_json::Error> for BoardError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(BoardErrorKind::Malformed(err.to_string()))
    }
}
