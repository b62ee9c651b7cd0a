//! Single-choice bets, where a wager expects exactly one atomic result and the bet settles on exactly
//! one. Implemented as a [MultipleChoiceBet] restricted to singletons.

use rust_decimal::Decimal;

use crate::bet::{Bet, BetError};
use crate::multiple::MultipleChoiceBet;
use crate::outcome::Outcome;
use crate::result_set::{Atom, ResultSet};
use crate::stake::{BetId, Wager};

#[derive(Debug)]
pub struct SingleChoiceBet<R: Atom> {
    id: BetId,
    possible_results: Vec<R>,
    multiple: MultipleChoiceBet<R>,

    /// Indexed by ticket.
    wagers: Vec<Wager<ResultSet<R>>>,
}
impl<R: Atom> SingleChoiceBet<R> {
    pub fn try_new(results: impl IntoIterator<Item = R>) -> Result<Self, BetError> {
        let multiple = MultipleChoiceBet::try_new(results)?;
        let possible_results = multiple
            .possible_results()
            .iter()
            .filter_map(|result_set| match result_set.results() {
                [result] => Some(result.clone()),
                _ => None,
            })
            .collect();
        Ok(Self {
            id: BetId::next(),
            possible_results,
            multiple,
            wagers: vec![],
        })
    }

    /// The underlying multiple-choice bet, for inspecting its pools.
    pub fn multiple(&self) -> &MultipleChoiceBet<R> {
        &self.multiple
    }

    fn lift(&self, result: &R) -> Result<ResultSet<R>, BetError> {
        if self.possible_results.contains(result) {
            Ok(ResultSet::singleton(result.clone()))
        } else {
            Err(BetError::not_possible(result))
        }
    }
}

impl<R: Atom> Bet for SingleChoiceBet<R> {
    type Results = R;

    fn id(&self) -> BetId {
        self.id
    }

    fn possible_results(&self) -> &[R] {
        &self.possible_results
    }

    fn add_expected_results(&mut self, expected: &R, stake: Decimal) -> Result<Wager<R>, BetError> {
        let lifted = self.lift(expected)?;
        let underlying = self.multiple.add_expected_results(&lifted, stake)?;
        let wager = Wager::new(self.id, self.wagers.len(), expected.clone(), underlying.stake());
        self.wagers.push(underlying);
        Ok(wager)
    }

    fn odds(&self, expected: &R, actual: &R) -> Result<Decimal, BetError> {
        let expected = self.lift(expected)?;
        let actual = self.lift(actual)?;
        self.multiple.odds(&expected, &actual)
    }

    fn outcome(&self, wager: &Wager<R>, actual: &R) -> Result<Outcome, BetError> {
        let underlying = Some(wager)
            .filter(|wager| wager.bet() == self.id)
            .and_then(|wager| self.wagers.get(wager.ticket()))
            .ok_or(BetError::ForeignWager {
                bet: self.id,
                placed_on: wager.bet(),
            })?;
        let actual = self.lift(actual)?;
        self.multiple.outcome(underlying, &actual)
    }
}
