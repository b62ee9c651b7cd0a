//! Testing helpers.

use assert_float_eq::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::outcome::{Outcome, OutcomeType};
use crate::result_set::ResultSet;

const EPSILON: f64 = 1e-10;

/// A [ResultSet] of single-character results, e.g. `results("ab")` for {a, b}.
pub fn results(chars: &str) -> ResultSet<char> {
    ResultSet::try_from_iter(chars.chars()).unwrap()
}

pub fn assert_decimal_near(expected: f64, actual: Decimal) {
    let actual = actual.to_f64().unwrap();
    assert_float_absolute_eq!(expected, actual, EPSILON);
}

pub fn assert_decimals_near(expected: Decimal, actual: Decimal) {
    assert_decimal_near(expected.to_f64().unwrap(), actual);
}

pub fn assert_win(expected_winnings: f64, outcome: &Outcome) {
    assert_eq!(OutcomeType::Win, outcome.outcome_type(), "{outcome:?}");
    assert_decimal_near(expected_winnings, outcome.winnings().unwrap());
}
