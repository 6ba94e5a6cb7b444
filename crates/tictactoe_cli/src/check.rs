//! Built-in board fixtures, runnable from the command line.

use tictactoe_rules::{Board, BoardError, Player, evaluate, is_tie};
use tracing::{debug, error, info, instrument};

/// What a fixture expects of its board.
#[derive(Debug, Clone, Copy)]
pub enum Expect {
    /// `evaluate` returns this.
    Winner(Option<Player>),
    /// `is_tie` returns this.
    Tie(bool),
}

/// A literal board and the verdict it must produce.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// What the fixture checks.
    pub name: &'static str,
    /// Row-major cells.
    pub cells: [&'static str; 9],
    /// Expected verdict.
    pub expect: Expect,
}

/// The standard fixture set.
pub const FIXTURES: [Fixture; 5] = [
    Fixture {
        name: "X should win on top row",
        cells: ["X", "X", "X", "", "", "", "", "", ""],
        expect: Expect::Winner(Some(Player::X)),
    },
    Fixture {
        name: "O should win on diagonal",
        cells: ["O", "", "", "", "O", "", "", "", "O"],
        expect: Expect::Winner(Some(Player::O)),
    },
    Fixture {
        name: "Should be no winner in this board",
        cells: ["X", "O", "X", "X", "O", "O", "O", "X", "X"],
        expect: Expect::Winner(None),
    },
    Fixture {
        name: "Board should be a tie",
        cells: ["X", "O", "X", "X", "O", "O", "O", "X", "X"],
        expect: Expect::Tie(true),
    },
    Fixture {
        name: "Board with empty cell should not be tie",
        cells: ["X", "O", "X", "", "O", "O", "O", "X", "X"],
        expect: Expect::Tie(false),
    },
];

/// Outcome of one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Matched.
    Pass,
    /// Mismatched; holds expected and actual values.
    Fail {
        /// Expected value, formatted.
        expected: String,
        /// Actual value, formatted.
        got: String,
    },
}

impl Fixture {
    /// Evaluates the fixture board against its expectation.
    #[instrument]
    pub fn run(&self) -> Result<Verdict, BoardError> {
        let board = Board::from_cells(&self.cells)?;
        let (expected, got) = match self.expect {
            Expect::Winner(want) => (format!("{:?}", want), format!("{:?}", evaluate(&board))),
            Expect::Tie(want) => (want.to_string(), is_tie(&board).to_string()),
        };
        debug!(%expected, %got, "Fixture evaluated");
        if expected == got {
            Ok(Verdict::Pass)
        } else {
            Ok(Verdict::Fail { expected, got })
        }
    }
}

/// Runs every fixture, printing one line each. Returns the failure count.
#[instrument(skip(fixtures))]
pub fn run_all(fixtures: &[Fixture]) -> Result<usize, BoardError> {
    println!("Running tic-tac-toe logic tests...");
    let mut failures = 0;
    for fixture in fixtures {
        match fixture.run()? {
            Verdict::Pass => println!("ok   {}", fixture.name),
            Verdict::Fail { expected, got } => {
                failures += 1;
                error!(fixture = fixture.name, %expected, %got, "Fixture failed");
                println!("FAIL {}\n     expected: {}\n     got: {}", fixture.name, expected, got);
            }
        }
    }
    info!(total = fixtures.len(), failures, "Fixtures complete");
    if failures == 0 {
        println!("All tests passed!");
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fixtures_pass() {
        for fixture in FIXTURES {
            assert_eq!(fixture.run().unwrap(), Verdict::Pass, "{}", fixture.name);
        }
        assert_eq!(run_all(&FIXTURES).unwrap(), 0);
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let fixture = Fixture {
            name: "wrong",
            cells: ["X", "X", "X", "", "", "", "", "", ""],
            expect: Expect::Winner(Some(Player::O)),
        };
        assert_eq!(
            fixture.run().unwrap(),
            Verdict::Fail {
                expected: "Some(O)".to_string(),
                got: "Some(X)".to_string(),
            }
        );
        assert_eq!(run_all(&[fixture]).unwrap(), 1);
    }

    #[test]
    fn test_bad_fixture_board_is_an_error() {
        let fixture = Fixture {
            name: "bad",
            cells: ["X", "?", "", "", "", "", "", "", ""],
            expect: Expect::Tie(false),
        };
        assert!(fixture.run().is_err());
    }
}
