//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe on the console
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the how-to-play layout before the first game
    #[arg(long)]
    pub no_instructions: bool,
}
