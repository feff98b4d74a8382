//! Game traits.

use crate::protocol::Outcome;

/// Trait for scoring a pair of moves - the move set computes outcomes on the
/// fly, the outcome table looks them up
pub trait GameJudge {
    /// Number of moves this judge understands
    fn size(&self) -> usize;

    /// Outcome of `first` played against `second`, both move indices in `0..size()`
    fn judge(&self, first: usize, second: usize) -> Outcome;
}
