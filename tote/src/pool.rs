//! Stake aggregation for a single actual result.
//!
//! A bet keeps one [StakePool] per possible result, each answering the question "what if this
//! happened?". Every wager placed on the bet is classified into every pool, as a winner if its
//! expected results share a result with the pool's actual result, or as a loser otherwise. Pools
//! refer to possible results by their ordinal in the bet's list of possible results.
//!
//! For _P_ possible results a pool holds O(_P_) scalars and a _P_×_P_ matrix, so a bet holds
//! O(_P_<sup>2</sup>) state in its pools and each wager costs O(_P_<sup>2</sup>) to place. _P_ is
//! 2<sup>n</sup> − 2 for _n_ atomic results, which keeps this practical for the handful of results a
//! typical event has.

use rust_decimal::Decimal;

use crate::bet::BetError;
use crate::linear::Matrix;
use crate::result_set::{Atom, ResultSet};

/// Pairwise overlap between possible results: `shares(a, b)` iff they have a result in common.
#[derive(Debug, Clone)]
pub struct Overlaps(Matrix<bool>);
impl Overlaps {
    pub fn tabulate<R: Atom>(possible_results: &[ResultSet<R>]) -> Self {
        let mut matrix = Matrix::allocate(possible_results.len(), possible_results.len());
        for (row, lhs) in possible_results.iter().enumerate() {
            for (col, rhs) in possible_results.iter().enumerate() {
                matrix[(row, col)] = lhs.shares_result_with(rhs);
            }
        }
        Self(matrix)
    }

    #[inline]
    pub fn shares(&self, lhs: usize, rhs: usize) -> bool {
        self.0[(lhs, rhs)]
    }

    /// Ordinals of the possible results that share nothing with `ordinal`.
    pub fn contrary_to(&self, ordinal: usize) -> impl Iterator<Item = usize> + '_ {
        self.0
            .row_slice(ordinal)
            .iter()
            .enumerate()
            .filter(|(_, &shares)| !shares)
            .map(|(contrary, _)| contrary)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StakePool {
    actual: usize,
    total_winner_stake: Decimal,

    /// Per expected result _V_: the stake of winners contrary to _V_.
    contrary_winner_stake: Vec<Decimal>,

    /// Per expected result _L_: the stake of losers expecting _L_, for as long as no winner is contrary
    /// to _L_. `None` once some winner is.
    leftover_loser_stake: Vec<Option<Decimal>>,

    /// At (_E_, _L_): the stake of losers expecting _L_, where _L_ is contrary to _E_.
    contrary_loser_stake: Matrix<Decimal>,
}
impl StakePool {
    pub fn new(actual: usize, possible_results: usize) -> Self {
        Self {
            actual,
            total_winner_stake: Decimal::ZERO,
            contrary_winner_stake: vec![Decimal::ZERO; possible_results],
            leftover_loser_stake: vec![Some(Decimal::ZERO); possible_results],
            contrary_loser_stake: Matrix::allocate(possible_results, possible_results),
        }
    }

    /// Ordinal of the actual result this pool settles on.
    pub fn actual(&self) -> usize {
        self.actual
    }

    /// Fails with [BetError::StakeOverflow] if adding the wager would overflow any of this pool's
    /// aggregates. The pool is left as it was either way.
    pub fn check_wager(
        &self,
        expected: usize,
        stake: Decimal,
        overlaps: &Overlaps,
    ) -> Result<(), BetError> {
        let fits = |aggregate: Decimal| {
            aggregate
                .checked_add(stake)
                .map(|_| ())
                .ok_or(BetError::StakeOverflow)
        };
        if overlaps.shares(expected, self.actual) {
            fits(self.total_winner_stake)?;
            for contrary in overlaps.contrary_to(expected) {
                fits(self.contrary_winner_stake[contrary])?;
            }
        } else {
            if let Some(leftover) = self.leftover_loser_stake[expected] {
                fits(leftover)?;
            }
            for contrary in overlaps.contrary_to(expected) {
                fits(self.contrary_loser_stake[(contrary, expected)])?;
            }
        }
        Ok(())
    }

    /// Classifies the wager as a winner or a loser and adds its stake to the matching aggregates.
    ///
    /// # Panics
    ///
    /// If [StakePool::check_wager] would have rejected the wager.
    pub fn add_wager(&mut self, expected: usize, stake: Decimal, overlaps: &Overlaps) {
        if overlaps.shares(expected, self.actual) {
            self.total_winner_stake += stake;
            for contrary in overlaps.contrary_to(expected) {
                self.leftover_loser_stake[contrary] = None;
                self.contrary_winner_stake[contrary] += stake;
            }
        } else {
            if let Some(leftover) = &mut self.leftover_loser_stake[expected] {
                *leftover += stake;
            }
            for contrary in overlaps.contrary_to(expected) {
                self.contrary_loser_stake[(contrary, expected)] += stake;
            }
        }
    }

    pub fn has_winners(&self) -> bool {
        self.total_winner_stake > Decimal::ZERO
    }

    pub fn total_winner_stake(&self) -> Decimal {
        self.total_winner_stake
    }

    pub fn has_contrary_winner(&self, expected: usize) -> bool {
        self.leftover_loser_stake[expected].is_none()
    }

    pub fn contrary_winner_stake(&self, expected: usize) -> Decimal {
        self.contrary_winner_stake[expected]
    }

    /// Stake of the losers that no winner is contrary to. It is shared among all winners.
    pub fn leftover_loser_stake(&self) -> Result<Decimal, BetError> {
        self.leftover_loser_stake
            .iter()
            .flatten()
            .try_fold(Decimal::ZERO, |sum, &leftover| sum.checked_add(leftover))
            .ok_or(BetError::StakeOverflow)
    }

    pub fn contrary_loser_stake(&self, expected: usize, contrary_expected: usize) -> Decimal {
        self.contrary_loser_stake[(expected, contrary_expected)]
    }

    /// Winnings per unit of stake for a wager on `expected`, which must be a winner in this pool.
    ///
    /// Each group of losers expecting _V_ is paid out to the winners contrary to _V_, in proportion to
    /// their stake; the leftover losers are paid out to all winners, likewise in proportion.
    pub fn odds(&self, expected: usize) -> Result<Decimal, BetError> {
        if !self.has_winners() {
            return Ok(Decimal::ZERO);
        }

        let mut odds = Decimal::ZERO;
        for contrary in 0..self.contrary_winner_stake.len() {
            if !self.has_contrary_winner(contrary) {
                continue;
            }
            let share = self
                .contrary_loser_stake(expected, contrary)
                .checked_div(self.contrary_winner_stake[contrary])
                .ok_or(BetError::StakeOverflow)?;
            odds = odds.checked_add(share).ok_or(BetError::StakeOverflow)?;
        }
        self.leftover_loser_stake()?
            .checked_div(self.total_winner_stake)
            .and_then(|share| odds.checked_add(share))
            .ok_or(BetError::StakeOverflow)
    }
}
