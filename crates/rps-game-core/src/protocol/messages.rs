//! Disclosure and transcript messages.

use crate::crypto::{HmacDigest, HmacKey};
use crate::error::Result;
use crate::protocol::{Outcome, RoundId};
use serde::{Deserialize, Serialize};

/// Key and hidden move, disclosed once the round is scored
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub key_hex: String,
    pub move_name: String,
}

/// Everything needed to check a finished round after the fact
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTranscript {
    pub round_id: RoundId,
    /// Digest published before the user moved
    pub hmac: HmacDigest,
    /// Key disclosed after scoring
    pub key: HmacKey,
    pub user_move: String,
    pub computer_move: String,
    /// `FirstWins` means the user won
    pub outcome: Outcome,
}

impl RoundTranscript {
    /// Recompute the HMAC from the disclosed key and computer move
    pub fn verify(&self) -> bool {
        self.hmac.verify(&self.key, &self.computer_move)
    }

    /// Single-line JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
