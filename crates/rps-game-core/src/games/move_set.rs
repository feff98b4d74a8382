//! Validated, ordered list of move names.

use super::outcome::decide;
use super::traits::GameJudge;
use crate::error::{GameError, Result};
use crate::protocol::Outcome;
use std::collections::HashSet;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// An odd number (>= 3) of distinct move names.
///
/// Each move is identified by its position in the list. The set is immutable
/// once built and is shared between rounds through `Arc<MoveSet>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Build a move set, rejecting short, even-sized or duplicated lists
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let count = names.len();

        if count < MIN_MOVES {
            return Err(GameError::TooFewMoves { count });
        }
        if count % 2 == 0 {
            return Err(GameError::EvenMoveCount { count });
        }

        let mut seen = HashSet::with_capacity(count);
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(GameError::DuplicateMove { name: name.clone() });
            }
        }

        Ok(Self { names })
    }

    /// Number of moves (always odd and at least 3)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; kept alongside `len` for the usual collection API
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the move at `index`
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// All names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Index of the move called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Iterate `(index, name)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }

    /// Parse a 1-based move number typed by the user into a move index.
    ///
    /// Anything that is not a number in `1..=len` is an `InvalidMove`.
    pub fn parse_choice(&self, token: &str) -> Result<usize> {
        let invalid = || GameError::InvalidMove {
            token: token.to_string(),
        };
        let number: usize = token.trim().parse().map_err(|_| invalid())?;
        if number == 0 || number > self.len() {
            return Err(invalid());
        }
        Ok(number - 1)
    }

    /// Check that `index` names a move in this set
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(GameError::MoveOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

impl GameJudge for MoveSet {
    fn size(&self) -> usize {
        self.len()
    }

    fn judge(&self, first: usize, second: usize) -> Outcome {
        decide(first, second, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_valid_move_sets() {
        assert_eq!(classic().len(), 3);
        let five = MoveSet::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();
        assert_eq!(five.len(), 5);
        assert_eq!(five.name(4), Some("Spock"));
        assert_eq!(five.index_of("Lizard"), Some(3));
    }

    #[test]
    fn test_rejects_small_and_even_sets() {
        assert!(matches!(
            MoveSet::new(Vec::<String>::new()),
            Err(GameError::TooFewMoves { count: 0 })
        ));
        assert!(matches!(
            MoveSet::new(["Rock"]),
            Err(GameError::TooFewMoves { count: 1 })
        ));
        assert!(matches!(
            MoveSet::new(["Rock", "Paper"]),
            Err(GameError::TooFewMoves { count: 2 })
        ));
        assert!(matches!(
            MoveSet::new(["a", "b", "c", "d"]),
            Err(GameError::EvenMoveCount { count: 4 })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = MoveSet::new(["Rock", "Paper", "Rock"]).unwrap_err();
        assert!(matches!(err, GameError::DuplicateMove { ref name } if name == "Rock"));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_parse_choice() {
        let moves = classic();
        assert_eq!(moves.parse_choice("1").unwrap(), 0);
        assert_eq!(moves.parse_choice("3").unwrap(), 2);

        for bad in ["0", "4", "-1", "rock", "", "1.5", "99999999999999999999999"] {
            assert!(
                matches!(moves.parse_choice(bad), Err(GameError::InvalidMove { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_check_index() {
        let moves = classic();
        assert!(moves.check_index(2).is_ok());
        assert!(matches!(
            moves.check_index(3),
            Err(GameError::MoveOutOfRange { index: 3, len: 3 })
        ));
    }
}
