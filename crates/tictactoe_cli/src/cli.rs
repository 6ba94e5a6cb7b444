//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe board evaluator
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Detect winners and ties on tic-tac-toe boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a single board
    Evaluate {
        /// Board as a JSON array (`["X","","O",...]`) or nine
        /// comma-separated cells (`X,,O,...`), row-major
        board: String,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,

        /// Also report which line won
        #[arg(long)]
        line: bool,
    },

    /// Run the built-in board fixtures and report pass/fail
    Check,
}
