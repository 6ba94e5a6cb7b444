//! tictactoe - command-line board evaluator.

#![warn(missing_docs)]

mod check;
mod cli;
mod report;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use report::Report;
use tictactoe_rules::Board;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Evaluate { board, json, line } => run_evaluate(&board, json, line),
        Command::Check => run_check(),
    }
}

/// Evaluate one board and print the verdict.
#[instrument]
fn run_evaluate(board: &str, json: bool, line: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Could not read board {:?}", board))?;
    let report = Report::new(board, line);
    info!(status = %report.status, "Board evaluated");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

/// Run the built-in fixtures; any failure is an error exit.
#[instrument]
fn run_check() -> Result<()> {
    let failures = check::run_all(&check::FIXTURES)?;
    if failures > 0 {
        bail!("{} fixture(s) failed", failures);
    }
    Ok(())
}
