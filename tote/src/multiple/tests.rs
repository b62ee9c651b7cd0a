use rust_decimal_macros::dec;

use crate::result_set::InvalidResults;
use crate::testing::{assert_decimals_near, assert_win, results};

use super::*;

const STAKE: Decimal = dec!(42);

fn abc() -> MultipleChoiceBet<char> {
    MultipleChoiceBet::try_new("abc".chars()).unwrap()
}

fn place(bet: &mut MultipleChoiceBet<char>, wagers: &[(&str, Decimal)]) -> Vec<Wager<ResultSet<char>>> {
    wagers
        .iter()
        .map(|(expected, stake)| bet.add_expected_results(&results(expected), *stake).unwrap())
        .collect()
}

fn settle(bet: &MultipleChoiceBet<char>, wagers: &[Wager<ResultSet<char>>], actual: &str) -> Vec<Outcome> {
    wagers
        .iter()
        .map(|wager| bet.outcome(wager, &results(actual)).unwrap())
        .collect()
}

#[test]
fn possible_results() {
    let bet = abc();
    let possible_results = bet.possible_results();
    assert_eq!(6, possible_results.len());
    for expected in ["a", "b", "c", "ab", "ac", "bc"] {
        assert!(possible_results.contains(&results(expected)), "{expected} should be possible");
    }
    assert!(!possible_results.contains(&results("abc")));
}

#[test]
fn try_new_invalid() {
    assert_eq!(
        BetError::InvalidResults(InvalidResults::Empty),
        MultipleChoiceBet::<char>::try_new(vec![]).unwrap_err()
    );
    assert_eq!(
        "duplicate result 'a'",
        MultipleChoiceBet::try_new("aa".chars()).unwrap_err().to_string()
    );
}

#[test]
fn single_result_accepts_no_wagers() {
    let mut bet = MultipleChoiceBet::try_new("a".chars()).unwrap();
    assert!(bet.possible_results().is_empty());
    assert_eq!(
        BetError::not_possible(&results("a")),
        bet.add_expected_results(&results("a"), STAKE).unwrap_err()
    );
}

#[test]
fn add_expected_results() {
    let mut bet = MultipleChoiceBet::try_new("ab".chars()).unwrap();
    let first = bet.add_expected_results(&results("a"), STAKE).unwrap();
    let second = bet.add_expected_results(&results("b"), dec!(1.5)).unwrap();
    assert_eq!(&results("a"), first.expected_results());
    assert_eq!(STAKE, first.stake().value());
    assert_eq!(0, first.ticket());
    assert_eq!(1, second.ticket());
    assert_ne!(first, second);
    assert_eq!(2, bet.wager_count());
}

#[test]
fn add_expected_results_invalid() {
    let mut bet = MultipleChoiceBet::try_new("ab".chars()).unwrap();
    assert_eq!(
        "{'a', 'b'} is not one of the possible results",
        bet.add_expected_results(&results("ab"), STAKE).unwrap_err().to_string()
    );
    assert_eq!(
        BetError::not_possible(&results("c")),
        bet.add_expected_results(&results("c"), STAKE).unwrap_err()
    );
    assert_eq!(
        BetError::NonPositiveStake { value: dec!(0) },
        bet.add_expected_results(&results("a"), dec!(0)).unwrap_err()
    );
    assert_eq!(
        "stake must be greater than zero, got -1",
        bet.add_expected_results(&results("a"), dec!(-1)).unwrap_err().to_string()
    );

    // rejected wagers leave no trace
    assert_eq!(0, bet.wager_count());
    for actual in bet.possible_results() {
        let pool = bet.pool(actual).unwrap();
        assert!(!pool.has_winners());
        assert_eq!(Decimal::ZERO, pool.leftover_loser_stake().unwrap());
    }
}

#[test]
fn odds_invalid() {
    let bet = MultipleChoiceBet::try_new("ab".chars()).unwrap();
    assert_eq!(
        BetError::not_possible(&results("c")),
        bet.odds(&results("c"), &results("b")).unwrap_err()
    );
    assert_eq!(
        BetError::not_possible(&results("c")),
        bet.odds(&results("b"), &results("c")).unwrap_err()
    );
    assert!(bet.pool(&results("ab")).is_err());
}

#[test]
fn outcome_invalid() {
    let mut bet = MultipleChoiceBet::try_new("ab".chars()).unwrap();
    let wager = bet.add_expected_results(&results("a"), STAKE).unwrap();
    let mut foreign_bet = MultipleChoiceBet::try_new("ab".chars()).unwrap();
    let foreign_wager = foreign_bet.add_expected_results(&results("a"), STAKE).unwrap();

    assert_eq!(
        BetError::ForeignWager {
            bet: bet.id(),
            placed_on: foreign_bet.id(),
        },
        bet.outcome(&foreign_wager, &results("a")).unwrap_err()
    );
    assert_eq!(
        BetError::not_possible(&results("c")),
        bet.outcome(&wager, &results("c")).unwrap_err()
    );
}

#[test]
fn canceled_without_winners() {
    let mut bet = abc();
    let wagers = place(&mut bet, &[("c", dec!(1)), ("bc", dec!(1)), ("c", dec!(1))]);
    assert_eq!(
        vec![Outcome::Canceled, Outcome::Canceled, Outcome::Canceled],
        settle(&bet, &wagers, "a")
    );
    assert_eq!(Decimal::ZERO, bet.odds(&results("a"), &results("a")).unwrap());
    assert_eq!(Decimal::ZERO, bet.odds(&results("c"), &results("a")).unwrap());
}

#[test]
fn single_winner() {
    let mut bet = abc();
    let wagers = place(&mut bet, &[("a", dec!(1))]);
    assert_win(0.0, &settle(&bet, &wagers, "a")[0]);
}

#[test]
fn single_winner_multiple_losers() {
    let mut bet = abc();
    let wagers = place(&mut bet, &[("a", dec!(1)), ("bc", dec!(1)), ("c", dec!(1))]);
    let outcomes = settle(&bet, &wagers, "a");
    assert_eq!(Outcome::Win(dec!(2)), outcomes[0]);
    assert_eq!(Outcome::Loss, outcomes[1]);
    assert_eq!(Outcome::Loss, outcomes[2]);
}

#[test]
fn multiple_winners_without_split() {
    let mut bet = abc();
    let wagers = place(&mut bet, &[("a", dec!(3)), ("ab", dec!(1)), ("bc", dec!(1))]);
    let outcomes = settle(&bet, &wagers, "a");

    // {b, c} is contrary to {a} alone, so {a, b} gets nothing from it
    assert_win(1.0, &outcomes[0]);
    assert_win(0.0, &outcomes[1]);
    assert_eq!(Outcome::Loss, outcomes[2]);
}

#[test]
fn multiple_winners_with_split() {
    let mut bet = abc();
    let wagers = place(&mut bet, &[("a", dec!(3)), ("ab", dec!(1)), ("c", dec!(1))]);
    let outcomes = settle(&bet, &wagers, "a");
    assert_win(0.75, &outcomes[0]);
    assert_win(0.25, &outcomes[1]);
    assert_eq!(Outcome::Loss, outcomes[2]);
}

#[test]
fn multiple_winners_nothing_to_split() {
    let mut bet = abc();
    let wagers = place(&mut bet, &[("a", dec!(3)), ("ab", dec!(1)), ("ac", dec!(1))]);
    for outcome in settle(&bet, &wagers, "a") {
        assert_win(0.0, &outcome);
    }
}

#[test]
fn multiple_winners_sharing_leftover() {
    let mut bet = abc();
    let wagers = place(&mut bet, &[("ac", dec!(3)), ("ac", dec!(1)), ("c", dec!(1))]);
    let outcomes = settle(&bet, &wagers, "a");
    assert_win(0.75, &outcomes[0]);
    assert_win(0.25, &outcomes[1]);
    assert_eq!(Outcome::Loss, outcomes[2]);
}

#[test]
fn multiple_actual_results() {
    let mut bet = abc();
    let wagers = place(&mut bet, &[("a", dec!(2)), ("b", dec!(2)), ("c", dec!(1))]);
    let outcomes = settle(&bet, &wagers, "ab");
    assert_win(0.5, &outcomes[0]);
    assert_win(0.5, &outcomes[1]);
    assert_eq!(Outcome::Loss, outcomes[2]);
}

#[test]
fn odds_sentinel() {
    let mut bet = abc();
    place(&mut bet, &[("a", dec!(1)), ("b", dec!(3))]);
    assert_eq!(dec!(3), bet.odds(&results("a"), &results("a")).unwrap());
    assert_eq!(NO_ODDS, bet.odds(&results("b"), &results("a")).unwrap());
    assert_eq!(Some(dec!(3)), bet.winning_odds(&results("a"), &results("a")).unwrap());
    assert_eq!(None, bet.winning_odds(&results("b"), &results("a")).unwrap());

    // odds for a result nobody has wagered on yet
    assert_eq!(dec!(3), bet.odds(&results("ac"), &results("a")).unwrap());
}

#[test]
fn queries_idempotent() {
    let mut bet = abc();
    let wagers = place(&mut bet, &[("a", dec!(3)), ("ab", dec!(1)), ("bc", dec!(1))]);
    for actual in bet.possible_results() {
        for expected in bet.possible_results() {
            assert_eq!(
                bet.odds(expected, actual).unwrap(),
                bet.odds(expected, actual).unwrap()
            );
        }
        for wager in &wagers {
            assert_eq!(bet.outcome(wager, actual).unwrap(), bet.outcome(wager, actual).unwrap());
        }
    }
}

#[test]
fn winnings_redistribute_all_losing_stakes() {
    let mut bet = MultipleChoiceBet::try_new("abcd".chars()).unwrap();
    let wagers = place(
        &mut bet,
        &[
            ("a", dec!(5)),
            ("ab", dec!(2.5)),
            ("bcd", dec!(4)),
            ("c", dec!(1)),
            ("cd", dec!(3)),
            ("d", dec!(0.75)),
            ("abc", dec!(2)),
            ("bd", dec!(6)),
        ],
    );
    for actual in bet.possible_results().to_vec() {
        let mut winnings = Decimal::ZERO;
        let mut lost = Decimal::ZERO;
        for wager in &wagers {
            match bet.outcome(wager, &actual).unwrap() {
                Outcome::Win(amount) => winnings += amount,
                Outcome::Loss => lost += wager.stake().value(),
                Outcome::Canceled => {}
            }
        }
        assert_decimals_near(lost, winnings);
    }
}

#[test]
fn settlement_independent_of_order() {
    let wagers = [("c", dec!(1)), ("ab", dec!(2)), ("bc", dec!(1.5)), ("a", dec!(4)), ("b", dec!(0.5))];
    let mut forward = abc();
    place(&mut forward, &wagers);
    let mut backward = abc();
    let reversed: Vec<_> = wagers.into_iter().rev().collect();
    place(&mut backward, &reversed);

    for actual in forward.possible_results() {
        for expected in forward.possible_results() {
            assert_eq!(
                forward.odds(expected, actual).unwrap(),
                backward.odds(expected, actual).unwrap(),
                "odds of {expected:?} against {actual:?}"
            );
        }
    }
}

fn snapshot(bet: &MultipleChoiceBet<char>) -> Vec<StakePool> {
    bet.possible_results()
        .iter()
        .map(|actual| bet.pool(actual).unwrap().clone())
        .collect()
}

#[test]
fn overflowing_stake_rejected_without_trace() {
    const LARGE: Decimal = dec!(50000000000000000000000000000);
    let mut bet = abc();
    let wager = bet.add_expected_results(&results("a"), LARGE).unwrap();
    let before = snapshot(&bet);

    // fits the pools ahead of {a, c} but overflows the winner total of {a, c}
    assert_eq!(
        BetError::StakeOverflow,
        bet.add_expected_results(&results("c"), LARGE).unwrap_err()
    );
    assert_eq!(
        BetError::StakeOverflow,
        bet.add_expected_results(&results("a"), Decimal::MAX).unwrap_err()
    );
    assert_eq!(1, bet.wager_count());
    assert_eq!(before, snapshot(&bet));

    // the bet remains usable
    bet.add_expected_results(&results("b"), dec!(1)).unwrap();
    assert_eq!(2, bet.wager_count());
    assert_eq!(Outcome::Loss, bet.outcome(&wager, &results("b")).unwrap());
}

#[test]
fn overflowing_odds_reported() {
    let mut bet = abc();
    let winner = bet
        .add_expected_results(&results("a"), dec!(0.0000000000000000000000000001))
        .unwrap();
    bet.add_expected_results(&results("b"), dec!(10000000000)).unwrap();

    assert_eq!(
        BetError::StakeOverflow,
        bet.odds(&results("a"), &results("a")).unwrap_err()
    );
    assert_eq!(
        BetError::StakeOverflow,
        bet.winning_odds(&results("a"), &results("a")).unwrap_err()
    );
    assert_eq!(
        BetError::StakeOverflow,
        bet.outcome(&winner, &results("a")).unwrap_err()
    );
    assert_eq!(Outcome::Loss, bet.outcome(&winner, &results("b")).unwrap());
}
