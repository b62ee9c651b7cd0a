//! Multiple-choice bets, where a wager may expect, and the bet may settle on, any non-empty proper
//! subset of the atomic results. A wager wins if its expected results include at least one of the
//! actual results.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::bet::{Bet, BetError, NO_ODDS};
use crate::hash_lookup::HashLookup;
use crate::outcome::Outcome;
use crate::pool::{Overlaps, StakePool};
use crate::result_set::{Atom, ResultSet};
use crate::stake::{BetId, Stake, Wager};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
struct Placement {
    expected: usize,
    stake: Stake,
}

#[derive(Debug)]
pub struct MultipleChoiceBet<R: Atom> {
    id: BetId,
    possible_results: HashLookup<ResultSet<R>>,
    overlaps: Overlaps,
    pools: Vec<StakePool>,
    placements: Vec<Placement>,
}
impl<R: Atom> MultipleChoiceBet<R> {
    /// Creates a bet over the given atomic results, whose possible results are all the non-empty
    /// proper subsets of `results`. A bet over a single result has no possible results and accepts no
    /// wagers.
    pub fn try_new(results: impl IntoIterator<Item = R>) -> Result<Self, BetError> {
        let available = ResultSet::try_from_iter(results)?;
        let possible_results = HashLookup::from(available.subsets().to_vec());
        let overlaps = Overlaps::tabulate(possible_results.items());
        let pools = (0..possible_results.len())
            .map(|actual| StakePool::new(actual, possible_results.len()))
            .collect();
        let id = BetId::next();
        debug!(
            "created {id} over {available:?} with {} possible results",
            possible_results.len()
        );
        Ok(Self {
            id,
            possible_results,
            overlaps,
            pools,
            placements: vec![],
        })
    }

    pub fn ordinal(&self, results: &ResultSet<R>) -> Option<usize> {
        self.possible_results.index_of(results)
    }

    /// The aggregates for the given actual result, for inspection.
    pub fn pool(&self, actual: &ResultSet<R>) -> Result<&StakePool, BetError> {
        let actual = self.ordinal_of(actual)?;
        Ok(&self.pools[actual])
    }

    pub fn wager_count(&self) -> usize {
        self.placements.len()
    }

    /// As [Bet::odds], but `None` where the latter returns [NO_ODDS].
    pub fn winning_odds(
        &self,
        expected: &ResultSet<R>,
        actual: &ResultSet<R>,
    ) -> Result<Option<Decimal>, BetError> {
        let odds = self.odds(expected, actual)?;
        Ok(if odds == NO_ODDS { None } else { Some(odds) })
    }

    fn ordinal_of(&self, results: &ResultSet<R>) -> Result<usize, BetError> {
        self.ordinal(results)
            .ok_or_else(|| BetError::not_possible(results))
    }

    fn placement_of(&self, wager: &Wager<ResultSet<R>>) -> Result<&Placement, BetError> {
        let foreign = || BetError::ForeignWager {
            bet: self.id,
            placed_on: wager.bet(),
        };
        if wager.bet() != self.id {
            return Err(foreign());
        }
        self.placements.get(wager.ticket()).ok_or_else(foreign)
    }

    fn odds_by_ordinal(&self, expected: usize, actual: usize) -> Result<Decimal, BetError> {
        let pool = &self.pools[actual];
        if !pool.has_winners() {
            Ok(Decimal::ZERO)
        } else if !self.overlaps.shares(expected, actual) {
            Ok(NO_ODDS)
        } else {
            pool.odds(expected)
        }
    }
}

impl<R: Atom> Bet for MultipleChoiceBet<R> {
    type Results = ResultSet<R>;

    fn id(&self) -> BetId {
        self.id
    }

    fn possible_results(&self) -> &[ResultSet<R>] {
        self.possible_results.items()
    }

    fn add_expected_results(
        &mut self,
        expected: &ResultSet<R>,
        stake: Decimal,
    ) -> Result<Wager<ResultSet<R>>, BetError> {
        let expected = self.ordinal_of(expected)?;
        if stake <= Decimal::ZERO {
            return Err(BetError::NonPositiveStake { value: stake });
        }

        for pool in &self.pools {
            pool.check_wager(expected, stake, &self.overlaps)?;
        }

        let stake = Stake::new(stake);
        for pool in &mut self.pools {
            pool.add_wager(expected, stake.value(), &self.overlaps);
        }
        let ticket = self.placements.len();
        self.placements.push(Placement { expected, stake });

        let expected = &self.possible_results[expected];
        trace!("{}: placed wager {ticket} of {stake} on {expected:?}", self.id);
        Ok(Wager::new(self.id, ticket, expected.clone(), stake))
    }

    fn odds(&self, expected: &ResultSet<R>, actual: &ResultSet<R>) -> Result<Decimal, BetError> {
        let expected = self.ordinal_of(expected)?;
        let actual = self.ordinal_of(actual)?;
        self.odds_by_ordinal(expected, actual)
    }

    fn outcome(
        &self,
        wager: &Wager<ResultSet<R>>,
        actual: &ResultSet<R>,
    ) -> Result<Outcome, BetError> {
        let placement = self.placement_of(wager)?;
        let actual_ordinal = self.ordinal_of(actual)?;

        let outcome = if !self.pools[actual_ordinal].has_winners() {
            Outcome::Canceled
        } else if self.overlaps.shares(placement.expected, actual_ordinal) {
            let odds = self.odds_by_ordinal(placement.expected, actual_ordinal)?;
            let winnings = odds
                .checked_mul(placement.stake.value())
                .ok_or(BetError::StakeOverflow)?;
            Outcome::Win(winnings)
        } else {
            Outcome::Loss
        };
        trace!(
            "{}: wager {} settled as {outcome:?} against {actual:?}",
            self.id,
            wager.ticket()
        );
        Ok(outcome)
    }
}
