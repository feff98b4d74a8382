use anyhow::Result;
use rps_game_core::{CommittedRound, GameError, MoveSet, Outcome, OutcomeTable};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::GameConfig;

const SEPARATOR: &str = "==========";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Exit,
    Help,
    /// 0-based move index
    Play(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Line-based game loop. Reads whitespace-separated tokens and writes all
/// game text to `out`.
pub struct Shell<W: Write> {
    moves: Arc<MoveSet>,
    table: Arc<OutcomeTable>,
    round: CommittedRound,
    config: GameConfig,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(moves: Arc<MoveSet>, config: GameConfig, out: W) -> Self {
        let table = Arc::new(OutcomeTable::for_moves(&moves));
        let round = CommittedRound::new(moves.clone());

        Self {
            moves,
            table,
            round,
            config,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.display_welcome()?;
        self.display_menu()?;
        self.display_prompt()?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line)? == Flow::Exit {
                return Ok(());
            }
            self.display_prompt()?;
        }

        writeln!(self.out)?;
        Ok(())
    }

    pub fn parse_command(&self, token: &str) -> std::result::Result<ShellCommand, GameError> {
        match token {
            "0" => Ok(ShellCommand::Exit),
            "?" => Ok(ShellCommand::Help),
            _ => self.moves.parse_choice(token).map(ShellCommand::Play),
        }
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let mut played = false;

        for token in line.split_whitespace() {
            match self.parse_command(token) {
                Ok(ShellCommand::Exit) => {
                    writeln!(self.out, "Thanks for playing! Have a great day.")?;
                    return Ok(Flow::Exit);
                }
                Ok(ShellCommand::Help) => {
                    write!(self.out, "{}", self.table.render(&self.moves))?;
                    writeln!(self.out, "{}", SEPARATOR)?;
                }
                Ok(ShellCommand::Play(user_move)) => {
                    self.play(user_move)?;
                    writeln!(self.out, "{}", SEPARATOR)?;
                    self.display_menu()?;
                    played = true;
                }
                Err(e) => {
                    debug!(token, "rejected input");
                    writeln!(self.out, "{}", e)?;
                    writeln!(self.out, "{}", SEPARATOR)?;
                }
            }
        }

        if !played {
            self.display_menu()?;
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, user_move: usize) -> Result<()> {
        // The next round is committed before this one is disclosed
        let next = CommittedRound::new(self.moves.clone());
        let round = std::mem::replace(&mut self.round, next);

        let revealed = round.reveal(user_move, self.table.as_ref())?;
        writeln!(self.out, "Your move: {}", revealed.user_move_name())?;
        writeln!(self.out, "Computer move: {}", revealed.computer_move_name())?;
        let verdict = match revealed.outcome() {
            Outcome::FirstWins => "You win!",
            Outcome::SecondWins => "Computer wins!",
            Outcome::Draw => "Draw!",
        };
        writeln!(self.out, "{}", verdict)?;
        writeln!(self.out, "HMAC key: {}", revealed.disclose().key_hex)?;

        let closed = revealed.close();
        let transcript = closed.transcript();
        info!(round = %transcript.round_id, outcome = ?transcript.outcome, "round finished");
        if self.config.show_transcript {
            writeln!(self.out, "Transcript: {}", transcript.to_json()?)?;
        }
        Ok(())
    }

    fn display_welcome(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to Rock-Paper-Scissors!")?;
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.out, "HMAC: {}", self.round.digest_hex())?;
        writeln!(self.out, "Available moves:")?;
        for (index, name) in self.moves.iter() {
            writeln!(self.out, "{} - {}", index + 1, name)?;
        }
        writeln!(self.out, "0 - exit")?;
        writeln!(self.out, "? - help")?;
        Ok(())
    }

    fn display_prompt(&mut self) -> Result<()> {
        write!(self.out, "{}", self.config.prompt)?;
        self.out.flush()?;
        Ok(())
    }
}
