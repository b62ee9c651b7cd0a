use std::fmt::Display;

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::bet::{Bet, BetError, NO_ODDS};
use crate::outcome::Outcome;
use crate::stake::Wager;

/// Odds for every pairing of possible results: one row per expected result, one column per actual
/// result. Pairings that cannot win are shown as `-`.
pub fn tabulate_odds<B>(bet: &B) -> Result<Table, BetError>
where
    B: Bet,
    B::Results: Display,
{
    let possible_results = bet.possible_results();
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(10))
                    .with(HAlign::Left),
            )];
            for _ in possible_results {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(8)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Expected".into()];
            for actual in possible_results {
                header_cells.push(format!("{actual}").into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    for expected in possible_results {
        let mut row_cells = vec![format!("{expected}").into()];
        for actual in possible_results {
            let odds = bet.odds(expected, actual)?;
            if odds == NO_ODDS {
                row_cells.push("-".into());
            } else {
                row_cells.push(format!("{:.3}", odds.round_dp(3)).into());
            }
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    Ok(table)
}

/// One row per wager, paired positionally with its outcome.
pub fn tabulate_outcomes<T: Display>(wagers: &[Wager<T>], outcomes: &[Outcome]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "Ticket".into(),
                "Expected".into(),
                "Stake".into(),
                "Outcome".into(),
                "Winnings".into(),
            ],
        ));

    for (wager, outcome) in wagers.iter().zip(outcomes) {
        let winnings = match outcome.winnings() {
            Ok(winnings) => format!("{:.3}", winnings.round_dp(3)),
            Err(_) => "".to_string(),
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", wager.ticket()).into(),
                format!("{}", wager.expected_results()).into(),
                format!("{}", wager.stake()).into(),
                format!("{}", outcome.outcome_type()).into(),
                winnings.into(),
            ],
        ));
    }
    table
}
