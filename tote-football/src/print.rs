use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use tote::bet::{Bet, BetError};

use crate::domain::MatchResult;

/// The menu of results on offer, with the current winnings per unit of stake should each come in.
pub fn tabulate_offer<B: Bet<Results = MatchResult>>(bet: &B) -> Result<Table, BetError> {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(20)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["#".into(), "Result".into(), "Odds".into()],
        ));
    for result in MatchResult::iter() {
        let odds = bet.odds(&result, &result)?;
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("[{}]", result.selection()).into(),
                format!("{result}").into(),
                format!("{:.2}", odds.round_dp(2)).into(),
            ],
        ));
    }
    Ok(table)
}
