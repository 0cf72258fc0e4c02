//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind::Position;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump back through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Cells to play in order: 0-8 (row-major) or a label like `center`
        #[arg(value_parser = parse_cell)]
        cells: Vec<Position>,

        /// History entry to show after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,
    },
}

/// Accepts a square index or its label, ignoring case.
fn parse_cell(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (use 0-8 or a label like top-left)", s))
}
