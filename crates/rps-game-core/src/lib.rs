//! RPS Game Core Library
//!
//! Generalized Rock-Paper-Scissors over any odd number of moves, with an
//! HMAC commit-reveal scheme that lets the player check after each round that
//! the computer's move was fixed before the player chose.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, HmacDigest, HmacKey};
pub use error::{GameError, Result};
pub use games::{decide, GameJudge, MoveSet, OutcomeTable};
pub use protocol::{
    ClosedRound, CommittedRound, Outcome, Reveal, RevealedRound, RoundId, RoundPhase,
    RoundTranscript,
};
