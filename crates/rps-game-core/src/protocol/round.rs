//! One round of commit-reveal play.
//!
//! Each phase is its own type and every transition consumes the previous
//! value, so a round can only move forward:
//!
//! ```text
//! CommittedRound --reveal(user move)--> RevealedRound --close()--> ClosedRound
//! ```
//!
//! The hidden move and key are unreachable while the round is committed; the
//! only way to reach them is to supply the user's move first.

use super::messages::{Reveal, RoundTranscript};
use super::types::{Outcome, RoundId, RoundPhase};
use crate::crypto::{Commitment, HmacDigest, HmacKey};
use crate::error::{GameError, Result};
use crate::games::{GameJudge, MoveSet};
use rand::{CryptoRng, RngCore};
use std::sync::Arc;
use tracing::debug;

/// Hidden move chosen, digest published
#[derive(Debug)]
pub struct CommittedRound {
    id: RoundId,
    moves: Arc<MoveSet>,
    commitment: Commitment,
}

impl CommittedRound {
    /// Commit to a fresh hidden move using the thread-local CSPRNG
    pub fn new(moves: Arc<MoveSet>) -> Self {
        Self::with_rng(moves, &mut rand::thread_rng())
    }

    /// Commit to a fresh hidden move using `rng`
    pub fn with_rng<R: RngCore + CryptoRng>(moves: Arc<MoveSet>, rng: &mut R) -> Self {
        let id = RoundId::new();
        let commitment = Commitment::new(&moves, rng);
        debug!(round = %id, hmac = %commitment.digest(), "round committed");

        Self {
            id,
            moves,
            commitment,
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn phase(&self) -> RoundPhase {
        RoundPhase::Committed
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The digest to publish before the user moves
    pub fn digest(&self) -> &HmacDigest {
        self.commitment.digest()
    }

    pub fn digest_hex(&self) -> String {
        self.commitment.digest_hex()
    }

    /// Score the user's move against the hidden move and disclose the commitment.
    ///
    /// `user_move` is a 0-based index; an out-of-range index is rejected and the
    /// round is discarded.
    pub fn reveal<J>(self, user_move: usize, judge: &J) -> Result<RevealedRound>
    where
        J: GameJudge + ?Sized,
    {
        self.moves.check_index(user_move)?;
        if judge.size() != self.moves.len() {
            return Err(GameError::JudgeSizeMismatch {
                judge: judge.size(),
                moves: self.moves.len(),
            });
        }

        let computer_move = self.commitment.move_index();
        let outcome = judge.judge(user_move, computer_move);
        debug!(round = %self.id, user_move, computer_move, ?outcome, "round revealed");

        Ok(RevealedRound {
            id: self.id,
            moves: self.moves,
            commitment: self.commitment,
            user_move,
            outcome,
        })
    }
}

/// User move known, outcome computed, key and hidden move disclosed
#[derive(Debug)]
pub struct RevealedRound {
    id: RoundId,
    moves: Arc<MoveSet>,
    commitment: Commitment,
    user_move: usize,
    outcome: Outcome,
}

impl RevealedRound {
    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn phase(&self) -> RoundPhase {
        RoundPhase::Revealed
    }

    /// Outcome with the user as first player
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn user_move(&self) -> usize {
        self.user_move
    }

    pub fn computer_move(&self) -> usize {
        self.commitment.move_index()
    }

    pub fn user_move_name(&self) -> &str {
        self.moves.name(self.user_move).unwrap_or_default()
    }

    pub fn computer_move_name(&self) -> &str {
        self.moves.name(self.commitment.move_index()).unwrap_or_default()
    }

    pub fn digest(&self) -> &HmacDigest {
        self.commitment.digest()
    }

    pub fn key(&self) -> &HmacKey {
        self.commitment.key()
    }

    /// Key and move name for the user to check against the published digest
    pub fn disclose(&self) -> Reveal {
        Reveal {
            key_hex: self.key().to_hex(),
            move_name: self.computer_move_name().to_string(),
        }
    }

    /// Finish the round
    pub fn close(self) -> ClosedRound {
        let transcript = RoundTranscript {
            round_id: self.id,
            hmac: *self.commitment.digest(),
            key: self.commitment.key().clone(),
            user_move: self.user_move_name().to_string(),
            computer_move: self.computer_move_name().to_string(),
            outcome: self.outcome,
        };
        debug!(round = %self.id, "round closed");

        ClosedRound { transcript }
    }
}

/// Scored and finished round
#[derive(Clone, Debug)]
pub struct ClosedRound {
    transcript: RoundTranscript,
}

impl ClosedRound {
    pub fn phase(&self) -> RoundPhase {
        RoundPhase::Closed
    }

    pub fn transcript(&self) -> &RoundTranscript {
        &self.transcript
    }

    pub fn into_transcript(self) -> RoundTranscript {
        self.transcript
    }
}
