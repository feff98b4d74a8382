//! Property-based tests for the circular-distance win rule.

use proptest::prelude::*;
use rps_game_core::{decide, GameJudge, MoveSet, Outcome, OutcomeTable};

/// Odd move counts from 3 to 51
fn arb_size() -> impl Strategy<Value = usize> {
    (1usize..=25).prop_map(|k| 2 * k + 1)
}

/// A move count with two indices inside it
fn arb_pair() -> impl Strategy<Value = (usize, usize, usize)> {
    arb_size().prop_flat_map(|n| (Just(n), 0..n, 0..n))
}

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("move{i}")).collect()
}

proptest! {
    #[test]
    fn prop_antisymmetric((n, i, j) in arb_pair()) {
        prop_assert_eq!(decide(i, j, n), decide(j, i, n).flip());
    }

    #[test]
    fn prop_draw_only_on_diagonal((n, i, j) in arb_pair()) {
        let outcome = decide(i, j, n);
        prop_assert_eq!(outcome == Outcome::Draw, i == j);
    }

    #[test]
    fn prop_every_move_beats_half(n in arb_size()) {
        let table = OutcomeTable::build(n);
        let half = (n - 1) / 2;

        for i in 0..n {
            let wins = table.row(i).iter().filter(|o| **o == Outcome::FirstWins).count();
            let losses = table.row(i).iter().filter(|o| **o == Outcome::SecondWins).count();
            prop_assert_eq!(wins, half, "move {} of {}", i, n);
            prop_assert_eq!(losses, half, "move {} of {}", i, n);
        }
    }

    #[test]
    fn prop_move_set_and_table_agree((n, i, j) in arb_pair()) {
        let moves = MoveSet::new(names(n)).unwrap();
        let table = OutcomeTable::for_moves(&moves);
        prop_assert_eq!(moves.judge(i, j), table.judge(i, j));
    }

    #[test]
    fn prop_matches_real_half((n, i, j) in arb_pair()) {
        // Reference form with real-valued half
        let half = n as f64 / 2.0;
        let (fi, fj) = (i as f64, j as f64);
        let expected = if i == j {
            Outcome::Draw
        } else if (i < j && fj - fi <= half) || (i > j && fi - fj >= half) {
            Outcome::FirstWins
        } else {
            Outcome::SecondWins
        };
        prop_assert_eq!(decide(i, j, n), expected);
    }

    #[test]
    fn prop_even_sizes_rejected(k in 0usize..20) {
        let err = MoveSet::new(names(2 * k)).unwrap_err();
        prop_assert!(err.is_config_error());
    }
}

#[test]
fn test_rock_paper_scissors_lizard_spock() {
    let moves = MoveSet::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();
    let table = OutcomeTable::for_moves(&moves);

    let mut draws = 0;
    let mut wins = 0;
    let mut losses = 0;
    for i in 0..5 {
        for j in 0..5 {
            match table.judge(i, j) {
                Outcome::Draw => draws += 1,
                Outcome::FirstWins => wins += 1,
                Outcome::SecondWins => losses += 1,
            }
        }
    }

    assert_eq!((draws, wins, losses), (5, 10, 10));
}

#[test]
fn test_invalid_sizes_rejected() {
    for n in [1, 2, 4] {
        let err = MoveSet::new(names(n)).unwrap_err();
        assert!(err.is_config_error(), "size {n} should be rejected");
    }
}
