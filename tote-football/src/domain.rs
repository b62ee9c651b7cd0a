use ordinalizer::Ordinal;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

use tote::bet::BetError;
use tote::single::SingleChoiceBet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ordinal, EnumCount, EnumIter, Display)]
pub enum MatchResult {
    #[strum(to_string = "Home Team Wins")]
    HomeTeamWins,

    #[strum(to_string = "Visiting Team Wins")]
    VisitingTeamWins,

    #[strum(to_string = "Draw")]
    Draw,
}
impl MatchResult {
    /// The result at the given 1-based menu index.
    pub fn from_selection(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|ordinal| MatchResult::iter().nth(ordinal))
    }

    pub fn selection(&self) -> usize {
        self.ordinal() + 1
    }
}

/// A fresh bet over every [MatchResult], in menu order.
pub fn offer() -> Result<SingleChoiceBet<MatchResult>, BetError> {
    SingleChoiceBet::try_new(MatchResult::iter())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use tote::bet::{Bet, NO_ODDS};

    use super::*;

    #[test]
    fn selection() {
        assert_eq!(None, MatchResult::from_selection(0));
        assert_eq!(Some(MatchResult::HomeTeamWins), MatchResult::from_selection(1));
        assert_eq!(Some(MatchResult::Draw), MatchResult::from_selection(3));
        assert_eq!(None, MatchResult::from_selection(4));
        for result in MatchResult::iter() {
            assert_eq!(Some(result), MatchResult::from_selection(result.selection()));
        }
    }

    #[test]
    fn display() {
        assert_eq!("Visiting Team Wins", MatchResult::VisitingTeamWins.to_string());
    }

    #[test]
    fn offer_and_settle() {
        let mut bet = offer().unwrap();
        assert_eq!(
            &[MatchResult::HomeTeamWins, MatchResult::VisitingTeamWins, MatchResult::Draw],
            bet.possible_results()
        );
        let home = bet.add_expected_results(&MatchResult::HomeTeamWins, dec!(10)).unwrap();
        let draw = bet.add_expected_results(&MatchResult::Draw, dec!(5)).unwrap();
        assert_eq!(
            dec!(0.5),
            bet.odds(&MatchResult::HomeTeamWins, &MatchResult::HomeTeamWins).unwrap()
        );
        assert_eq!(
            NO_ODDS,
            bet.odds(&MatchResult::Draw, &MatchResult::HomeTeamWins).unwrap()
        );
        assert_eq!(
            dec!(5),
            home.outcome(&bet, &MatchResult::HomeTeamWins).unwrap().winnings().unwrap()
        );
        assert_eq!(
            dec!(10),
            draw.outcome(&bet, &MatchResult::Draw).unwrap().winnings().unwrap()
        );
    }
}
