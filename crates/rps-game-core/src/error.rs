//! Error types for the game core.

use thiserror::Error;

/// Errors from move set construction, move parsing and verification input
#[derive(Debug, Error)]
pub enum GameError {
    #[error("At least 3 moves are required, got {count}")]
    TooFewMoves { count: usize },

    #[error("The number of moves must be odd, got {count}")]
    EvenMoveCount { count: usize },

    #[error("Duplicate move: {name}")]
    DuplicateMove { name: String },

    #[error("Invalid move: {token}")]
    InvalidMove { token: String },

    #[error("Move index {index} is out of range for {len} moves")]
    MoveOutOfRange { index: usize, len: usize },

    #[error("Outcome judge covers {judge} moves but the round has {moves}")]
    JudgeSizeMismatch { judge: usize, moves: usize },

    #[error("Invalid hex in {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },

    #[error("Invalid length for {field}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed transcript: {0}")]
    Transcript(#[from] serde_json::Error),
}

impl GameError {
    /// Whether this error means the move list itself is unusable
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GameError::TooFewMoves { .. }
                | GameError::EvenMoveCount { .. }
                | GameError::DuplicateMove { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
