//! [SharedBet] lets several threads place wagers on, and query, the same bet. Placing a wager updates
//! every pool of the bet, so it takes an exclusive lock; odds and outcomes are read under a shared
//! lock and never observe a partially placed wager.

use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::bet::{Bet, BetError};
use crate::outcome::Outcome;
use crate::stake::{BetId, Wager};

#[derive(Debug)]
pub struct SharedBet<B> {
    bet: Arc<RwLock<B>>,
}

impl<B> Clone for SharedBet<B> {
    fn clone(&self) -> Self {
        Self {
            bet: self.bet.clone(),
        }
    }
}

impl<B: Bet> SharedBet<B> {
    pub fn new(bet: B) -> Self {
        Self {
            bet: Arc::new(RwLock::new(bet)),
        }
    }

    pub fn id(&self) -> BetId {
        self.bet.read().id()
    }

    pub fn possible_results(&self) -> Vec<B::Results> {
        self.bet.read().possible_results().to_vec()
    }

    pub fn add_expected_results(
        &self,
        expected: &B::Results,
        stake: Decimal,
    ) -> Result<Wager<B::Results>, BetError> {
        self.bet.write().add_expected_results(expected, stake)
    }

    pub fn odds(&self, expected: &B::Results, actual: &B::Results) -> Result<Decimal, BetError> {
        self.bet.read().odds(expected, actual)
    }

    pub fn outcome(
        &self,
        wager: &Wager<B::Results>,
        actual: &B::Results,
    ) -> Result<Outcome, BetError> {
        self.bet.read().outcome(wager, actual)
    }

    /// Runs `f` against a consistent view of the bet, e.g. to settle several wagers at once.
    pub fn read<T>(&self, f: impl FnOnce(&B) -> T) -> T {
        f(&self.bet.read())
    }
}
