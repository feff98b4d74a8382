//! Round state machine, protocol types and messages.

mod messages;
mod round;
mod types;

pub use messages::{Reveal, RoundTranscript};
pub use round::{ClosedRound, CommittedRound, RevealedRound};
pub use types::{Outcome, RoundId, RoundPhase};
