//! Interactive generalized Rock-Paper-Scissors.
//!
//! Before each round the computer commits to its move by printing an HMAC;
//! after the round it prints the key, so the HMAC can be checked.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod shell;

use config::GameConfig;
use shell::Shell;

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Rock-Paper-Scissors with any odd number of moves and a verifiable HMAC commitment")]
#[command(version)]
struct Cli {
    /// Move names in order, an odd number (at least 3) of distinct names
    #[arg(required = true, num_args = 1..)]
    moves: Vec<String>,

    /// Prompt shown before each line of input
    #[arg(long, env = "RPS_PROMPT", default_value = "> ")]
    prompt: String,

    /// Print a JSON transcript line after each round
    #[arg(long, env = "RPS_TRANSCRIPT")]
    transcript: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr, game text to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GameConfig {
        moves: cli.moves,
        prompt: cli.prompt,
        show_transcript: cli.transcript,
    };

    let moves = config
        .move_set()
        .context("Invalid move list. Example: rps Rock Paper Scissors")?;
    info!(moves = moves.len(), "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(Arc::new(moves), config, stdout.lock());
    shell.run(stdin.lock())?;
    shell.into_output().flush()?;

    Ok(())
}
