//! Betting on the result of a football match, offered as a single-choice bet over [domain::MatchResult].

pub mod domain;
pub mod input;
pub mod print;
