//! Circular-distance win rule and the precomputed outcome table.

use super::move_set::MoveSet;
use super::traits::GameJudge;
use crate::protocol::Outcome;
use std::fmt::Write;

/// Decide `first` against `second` among `size` cyclically arranged moves.
///
/// With `half = size / 2` in real arithmetic, the first move wins when
/// `first < second && second - first <= half` or
/// `first > second && first - second >= half`; otherwise the second wins.
/// Both sides are doubled so the comparison against `half` stays exact.
///
/// Only defined for odd `size >= 3`; `MoveSet` rejects anything else.
pub fn decide(first: usize, second: usize, size: usize) -> Outcome {
    debug_assert!(size >= 3 && size % 2 == 1, "invalid move count {size}");
    debug_assert!(first < size && second < size);

    if first == second {
        return Outcome::Draw;
    }

    let first_wins = (first < second && 2 * (second - first) <= size)
        || (first > second && 2 * (first - second) >= size);

    if first_wins {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

/// N x N matrix of outcomes, row = first player's move, column = second's
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeTable {
    size: usize,
    cells: Vec<Outcome>,
}

impl OutcomeTable {
    /// Evaluate `decide` for every pair of move indices
    pub fn build(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for first in 0..size {
            for second in 0..size {
                cells.push(decide(first, second, size));
            }
        }
        Self { size, cells }
    }

    /// Build the table for a move set
    pub fn for_moves(moves: &MoveSet) -> Self {
        Self::build(moves.len())
    }

    /// Outcome at (`first`, `second`), `None` outside the table
    pub fn get(&self, first: usize, second: usize) -> Option<Outcome> {
        if first < self.size && second < self.size {
            Some(self.cells[first * self.size + second])
        } else {
            None
        }
    }

    /// One row: the outcomes of `first` against every move
    pub fn row(&self, first: usize) -> &[Outcome] {
        let start = first * self.size;
        &self.cells[start..start + self.size]
    }

    /// Render the help table.
    ///
    /// Display number 0 is the exit command, so the first line marks it as
    /// unused; move `k` is shown on the line labelled `Move k`.
    pub fn render(&self, moves: &MoveSet) -> String {
        let mut out = String::from("Move 0 is not used\n");
        for (index, name) in moves.iter().take(self.size) {
            let labels: Vec<&str> = self.row(index).iter().map(Outcome::label).collect();
            // Writing into a String cannot fail
            let _ = writeln!(out, "Move {} ({}): {}", index + 1, name, labels.join(" "));
        }
        out
    }
}

impl GameJudge for OutcomeTable {
    fn size(&self) -> usize {
        self.size
    }

    fn judge(&self, first: usize, second: usize) -> Outcome {
        self.row(first)[second]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_on_diagonal() {
        for size in [3, 5, 7, 9] {
            for i in 0..size {
                assert_eq!(decide(i, i, size), Outcome::Draw);
            }
        }
    }

    #[test]
    fn test_three_moves() {
        // [Rock, Paper, Scissors]: each move beats the one after it
        assert_eq!(decide(0, 1, 3), Outcome::FirstWins);
        assert_eq!(decide(1, 0, 3), Outcome::SecondWins);
        assert_eq!(decide(1, 2, 3), Outcome::FirstWins);
        assert_eq!(decide(2, 1, 3), Outcome::SecondWins);
        assert_eq!(decide(0, 2, 3), Outcome::SecondWins);
        assert_eq!(decide(2, 0, 3), Outcome::FirstWins);
    }

    #[test]
    fn test_operator_asymmetry_at_boundary() {
        // size 5, half 2.5: distance 2 ascending wins, distance 3 descending wins
        assert_eq!(decide(0, 2, 5), Outcome::FirstWins);
        assert_eq!(decide(0, 3, 5), Outcome::SecondWins);
        assert_eq!(decide(3, 0, 5), Outcome::FirstWins);
        assert_eq!(decide(2, 0, 5), Outcome::SecondWins);
    }

    #[test]
    fn test_table_matches_decide() {
        let table = OutcomeTable::build(7);
        for i in 0..7 {
            for j in 0..7 {
                assert_eq!(table.get(i, j), Some(decide(i, j, 7)));
                assert_eq!(table.judge(i, j), decide(i, j, 7));
            }
        }
        assert_eq!(table.get(7, 0), None);
        assert_eq!(table.get(0, 7), None);
    }

    #[test]
    fn test_five_move_table_counts() {
        let table = OutcomeTable::build(5);
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;

        for i in 0..5 {
            for outcome in table.row(i) {
                match outcome {
                    Outcome::FirstWins => wins += 1,
                    Outcome::SecondWins => losses += 1,
                    Outcome::Draw => draws += 1,
                }
            }
        }

        assert_eq!(draws, 5);
        assert_eq!(wins, 10);
        assert_eq!(losses, 10);
    }

    #[test]
    fn test_render() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let rendered = OutcomeTable::for_moves(&moves).render(&moves);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Move 0 is not used",
                "Move 1 (Rock): Draw Win Lose",
                "Move 2 (Paper): Lose Draw Win",
                "Move 3 (Scissors): Win Lose Draw",
            ]
        );
    }
}
