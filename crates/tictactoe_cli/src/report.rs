//! Verdicts for a single board, as text or JSON.

use serde::Serialize;
use tictactoe_rules::{Board, GameStatus, Player, Position, evaluate, is_tie, winning_line};
use tracing::instrument;

/// Everything the evaluator says about one board.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The board that was evaluated.
    pub board: Board,
    /// Winner, if any line is complete.
    pub winner: Option<Player>,
    /// Whether every square is occupied.
    pub tie: bool,
    /// Combined verdict.
    pub status: GameStatus,
    /// The completed line, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<[Position; 3]>,
}

impl Report {
    /// Evaluates `board`, keeping the winning line only when asked for.
    #[instrument]
    pub fn new(board: Board, with_line: bool) -> Self {
        let line = if with_line {
            winning_line(&board).map(|(line, _)| line)
        } else {
            None
        };
        Self {
            board,
            winner: evaluate(&board),
            tie: is_tie(&board),
            status: board.status(),
            line,
        }
    }

    /// Grid followed by the verdict line(s).
    pub fn to_text(&self) -> String {
        let mut out = self.board.display();
        out.push('\n');
        out.push_str(&self.status.to_string());
        if let Some(line) = self.line {
            let names: Vec<_> = line.iter().map(|p| p.label()).collect();
            out.push_str(&format!("\nline: {}", names.join(", ")));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_for_win_with_line() {
        let board: Board = "X,X,X,,,,,,".parse().unwrap();
        let report = Report::new(board, true);
        assert_eq!(
            report.to_text(),
            "X|X|X\n-+-+-\n4|5|6\n-+-+-\n7|8|9\nwinner: X\nline: Top-left, Top-center, Top-right"
        );
    }

    #[test]
    fn test_text_for_tie() {
        let board: Board = "X,O,X,X,O,O,O,X,X".parse().unwrap();
        let report = Report::new(board, true);
        assert!(report.tie);
        assert_eq!(report.winner, None);
        assert!(report.to_text().ends_with("\ntie"));
    }

    #[test]
    fn test_json_shape() {
        let board: Board = r#"["O","","","","O","","","","O"]"#.parse().unwrap();
        let value = serde_json::to_value(Report::new(board, false)).unwrap();
        assert_eq!(value["winner"], "O");
        assert_eq!(value["tie"], false);
        assert_eq!(value["board"][4], "O");
        assert_eq!(value["status"]["Won"], "O");
        assert!(value.get("line").is_none());
    }
}
