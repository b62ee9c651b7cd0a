//! A bet card describes a multiple-choice bet in JSON: its atomic results, the wagers placed on it and,
//! optionally, the actual result to settle on.
//!
//! ```json
//! {
//!   "results": ["Home", "Away", "Draw"],
//!   "wagers": [
//!     { "expected": ["Home"], "stake": 3 },
//!     { "expected": ["Home", "Draw"], "stake": "1.5" }
//!   ],
//!   "actual": ["Home"]
//! }
//! ```

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::bet::{Bet, BetError};
use crate::multiple::MultipleChoiceBet;
use crate::outcome::Outcome;
use crate::result_set::ResultSet;
use crate::stake::Wager;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub results: Vec<String>,

    #[serde(default)]
    pub wagers: Vec<CardWager>,

    #[serde(default)]
    pub actual: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardWager {
    pub expected: Vec<String>,
    pub stake: Decimal,
}

/// A card's bet with all of its wagers placed, in card order.
#[derive(Debug)]
pub struct PlacedCard {
    pub bet: MultipleChoiceBet<String>,
    pub wagers: Vec<Wager<ResultSet<String>>>,
}

impl Card {
    pub fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        let card = serde_json::from_reader(file)
            .with_context(|| format!("malformed bet card {}", path.display()))?;
        Ok(card)
    }

    pub fn place(&self) -> Result<PlacedCard, BetError> {
        let mut bet = MultipleChoiceBet::try_new(self.results.iter().cloned())?;
        let wagers = self
            .wagers
            .iter()
            .map(|wager| {
                let expected = ResultSet::try_from_iter(wager.expected.iter().cloned())?;
                bet.add_expected_results(&expected, wager.stake)
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("placed {} wagers on {}", wagers.len(), bet.id());
        Ok(PlacedCard { bet, wagers })
    }

    pub fn actual_results(&self) -> Result<Option<ResultSet<String>>, BetError> {
        match &self.actual {
            None => Ok(None),
            Some(actual) => Ok(Some(ResultSet::try_from_iter(actual.iter().cloned())?)),
        }
    }
}

impl PlacedCard {
    /// Outcomes of the card's wagers, in card order.
    pub fn settle(&self, actual: &ResultSet<String>) -> Result<Vec<Outcome>, BetError> {
        self.wagers
            .iter()
            .map(|wager| self.bet.outcome(wager, actual))
            .collect()
    }
}

/// Parses results in the form `Home+Draw`.
pub struct ParsedResults(pub ResultSet<String>);

impl FromStr for ParsedResults {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut results = vec![];
        for frag in s.split('+') {
            let frag = frag.trim();
            if frag.is_empty() {
                bail!("empty result in '{s}'");
            }
            results.push(frag.to_string());
        }
        Ok(Self(ResultSet::try_from_iter(results)?))
    }
}
