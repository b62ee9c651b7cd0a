//! Stakes, and the wagers that carry them.

use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;

use crate::bet::{Bet, BetError};
use crate::outcome::Outcome;

/// Identifies a bet for the lifetime of the process. Wagers carry the identity of the bet that issued
/// them, so that a wager presented to a different bet is recognised as foreign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BetId(u64);
impl BetId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for BetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "bet #{}", self.0)
    }
}

/// The amount put on a wager. Bets only ever issue stakes with a positive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stake(Decimal);
impl Stake {
    pub(crate) fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Display for Stake {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stake on one expected result, issued by a bet. `T` is the bet's result type: a
/// [ResultSet](crate::result_set::ResultSet) for multiple-choice bets, a single atom for single-choice
/// bets.
///
/// Two wagers are the same wager only if they were issued by the same bet under the same ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wager<T> {
    bet: BetId,
    ticket: usize,
    expected_results: T,
    stake: Stake,
}
impl<T> Wager<T> {
    pub(crate) fn new(bet: BetId, ticket: usize, expected_results: T, stake: Stake) -> Self {
        Self {
            bet,
            ticket,
            expected_results,
            stake,
        }
    }

    pub fn bet(&self) -> BetId {
        self.bet
    }

    /// Sequence number of this wager within its bet, starting from zero.
    pub fn ticket(&self) -> usize {
        self.ticket
    }

    pub fn expected_results(&self) -> &T {
        &self.expected_results
    }

    pub fn stake(&self) -> Stake {
        self.stake
    }

    pub fn outcome<B: Bet<Results = T>>(&self, bet: &B, actual: &T) -> Result<Outcome, BetError> {
        bet.outcome(self, actual)
    }
}
