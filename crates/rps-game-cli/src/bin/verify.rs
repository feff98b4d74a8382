//! Offline check of a round's HMAC.
//!
//! Takes the HMAC shown before a move, plus the key and computer move shown
//! after it, or a JSON transcript line, and reports whether they match.

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use rps_game_core::{HmacDigest, HmacKey, RoundTranscript};
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rps-verify")]
#[command(about = "Check that a revealed key and move match the HMAC published before the round")]
#[command(version)]
#[command(group(ArgGroup::new("input").required(true).args(["hmac", "transcript"])))]
struct Cli {
    /// HMAC printed before the move (hex)
    #[arg(long, requires_all = ["key", "move_name"])]
    hmac: Option<String>,

    /// HMAC key printed after the move (hex)
    #[arg(long)]
    key: Option<String>,

    /// Computer move printed after the move
    #[arg(long = "move")]
    move_name: Option<String>,

    /// Transcript line printed by `rps --transcript`
    #[arg(long, conflicts_with_all = ["hmac", "key", "move_name"])]
    transcript: Option<String>,
}

fn check(cli: &Cli) -> Result<bool> {
    if let Some(json) = &cli.transcript {
        let transcript = RoundTranscript::from_json(json).context("Could not read transcript")?;
        debug!(round = %transcript.round_id, "checking transcript");
        return Ok(transcript.verify());
    }

    match (&cli.hmac, &cli.key, &cli.move_name) {
        (Some(hmac), Some(key), Some(move_name)) => {
            let digest = HmacDigest::from_hex(hmac)?;
            let key = HmacKey::from_hex(key)?;
            Ok(digest.verify(&key, move_name))
        }
        _ => bail!("--hmac, --key and --move must be given together"),
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if check(&cli)? {
        println!("valid");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("INVALID");
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "1111111111111111111111111111111111111111111111111111111111111111";
    const ROCK: &str = "d1ce145b41fd3d711c515ba6c44d0220a85dea2b22fbcb68a68c994f41b6cd92";

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rps-verify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_matching_hmac() {
        let cli = parse(&["--hmac", ROCK, "--key", KEY, "--move", "Rock"]);
        assert!(check(&cli).unwrap());
    }

    #[test]
    fn test_wrong_move() {
        let cli = parse(&["--hmac", ROCK, "--key", KEY, "--move", "Paper"]);
        assert!(!check(&cli).unwrap());
    }

    #[test]
    fn test_malformed_key() {
        let cli = parse(&["--hmac", ROCK, "--key", "xyz", "--move", "Rock"]);
        assert!(check(&cli).is_err());
    }

    #[test]
    fn test_transcript_input() {
        let json = format!(
            r#"{{"round_id":"67e55044-10b1-426f-9247-bb680e5fe0c8","hmac":"{ROCK}","key":"{KEY}","user_move":"Paper","computer_move":"Rock","outcome":"SecondWins"}}"#
        );
        let cli = parse(&["--transcript", &json]);
        assert!(check(&cli).unwrap());
    }

    #[test]
    fn test_arguments_required() {
        assert!(Cli::try_parse_from(["rps-verify"]).is_err());
        assert!(Cli::try_parse_from(["rps-verify", "--hmac", ROCK]).is_err());
        assert!(
            Cli::try_parse_from(["rps-verify", "--transcript", "{}", "--key", KEY]).is_err()
        );
    }
}
