//! Parsing of the interactive prompts.

use std::str::FromStr;

use anyhow::{bail, Context};
use rust_decimal::Decimal;

use crate::domain::MatchResult;

pub fn parse_selection(line: &str) -> anyhow::Result<MatchResult> {
    let line = line.trim();
    let index = usize::from_str(line)
        .with_context(|| format!("unknown format of input '{line}'; use 1, 2 or 3 to select a result"))?;
    match MatchResult::from_selection(index) {
        Some(result) => Ok(result),
        None => bail!("unknown index {index}; use indices 1, 2 or 3 to select a result"),
    }
}

pub fn parse_stake(line: &str) -> anyhow::Result<Decimal> {
    let line = line.trim();
    Decimal::from_str(line).with_context(|| {
        format!("unknown format of input '{line}'; specify a decimal value (e.g. '42.00')")
    })
}
