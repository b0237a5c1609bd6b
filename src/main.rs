//! Console Tic-Tac-Toe
//!
//! Two players share one terminal and take turns typing cell numbers.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console_tictactoe::{ConsoleSession, SessionConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    run_session(config)
}

/// Builds the session config from the optional file and CLI overrides.
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };
    let show = *config.show_instructions() && !cli.no_instructions;
    Ok(config.with_instructions(show))
}

/// Plays games on stdin/stdout until the players quit.
#[instrument(skip(config))]
fn run_session(config: SessionConfig) -> Result<()> {
    info!("Starting console session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock(), config);
    let outcomes = session.run()?;

    info!(games = outcomes.len(), "Session ended");
    Ok(())
}
