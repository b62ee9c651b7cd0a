//! The settlement of a wager against an actual result.

use rust_decimal::Decimal;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum OutcomeType {
    /// The wager keeps its stake and claims its share of the losers' stakes.
    Win,

    /// The wager forfeits its stake.
    Loss,

    /// Nobody won, so the pool is void and every stake is returned.
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win(Decimal),
    Loss,
    Canceled,
}
impl Outcome {
    pub fn outcome_type(&self) -> OutcomeType {
        match self {
            Outcome::Win(_) => OutcomeType::Win,
            Outcome::Loss => OutcomeType::Loss,
            Outcome::Canceled => OutcomeType::Canceled,
        }
    }

    /// The amount won on top of the returned stake. Only a [Outcome::Win] carries winnings.
    pub fn winnings(&self) -> Result<Decimal, OutcomeError> {
        match self {
            Outcome::Win(winnings) => Ok(*winnings),
            _ => Err(OutcomeError::NotAWin(self.outcome_type())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    #[error("outcome is {0}, not a win")]
    NotAWin(OutcomeType),
}
