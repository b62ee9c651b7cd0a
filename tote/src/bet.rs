//! The contract shared by [MultipleChoiceBet](crate::multiple::MultipleChoiceBet) and
//! [SingleChoiceBet](crate::single::SingleChoiceBet).

use std::fmt::Debug;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::outcome::Outcome;
use crate::result_set::InvalidResults;
use crate::stake::{BetId, Wager};

/// Returned by [Bet::odds] when the queried expected result does not win against the actual result.
/// It is a marker rather than a multiplier: scaling a stake by it fabricates a negative payout. Check
/// for it, or use an `Option`-returning variant such as
/// [MultipleChoiceBet::winning_odds](crate::multiple::MultipleChoiceBet::winning_odds).
pub const NO_ODDS: Decimal = Decimal::NEGATIVE_ONE;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BetError {
    #[error("{0}")]
    InvalidResults(#[from] InvalidResults),

    #[error("{results} is not one of the possible results")]
    NotPossible { results: String },

    #[error("stake must be greater than zero, got {value}")]
    NonPositiveStake { value: Decimal },

    #[error("stake arithmetic overflowed the decimal range")]
    StakeOverflow,

    #[error("wager placed on {placed_on} is not part of {bet}")]
    ForeignWager { bet: BetId, placed_on: BetId },
}

impl BetError {
    pub(crate) fn not_possible(results: &impl Debug) -> Self {
        Self::NotPossible {
            results: format!("{results:?}"),
        }
    }
}

pub trait Bet {
    type Results: Clone + Debug;

    fn id(&self) -> BetId;

    /// Everything that may be wagered on and everything the bet may settle on.
    fn possible_results(&self) -> &[Self::Results];

    /// Places a wager with the given stake on `expected`. Fails without side effects if `expected` is
    /// not possible or the stake is not positive, and likewise if the stake would overflow the bet's
    /// running totals.
    fn add_expected_results(
        &mut self,
        expected: &Self::Results,
        stake: Decimal,
    ) -> Result<Wager<Self::Results>, BetError>;

    /// The winnings per unit of stake that a wager on `expected` would presently claim if `actual`
    /// happened. Zero if nobody wins against `actual`; [NO_ODDS] if `expected` itself loses.
    fn odds(&self, expected: &Self::Results, actual: &Self::Results) -> Result<Decimal, BetError>;

    fn outcome(
        &self,
        wager: &Wager<Self::Results>,
        actual: &Self::Results,
    ) -> Result<Outcome, BetError>;
}
