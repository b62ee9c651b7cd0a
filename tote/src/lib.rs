//! A parimutuel pooling and odds engine. Wagers are placed on subsets of an event's possible results;
//! once the actual result is known, the winners split the losers' stakes in proportion to their own.
//! Losers are paid out only to the winners they are _contrary_ to (share no result with), falling
//! back to all winners when no such group exists.

pub mod bet;
pub mod card;
pub mod display;
pub mod hash_lookup;
pub mod linear;
pub mod multiple;
pub mod outcome;
pub mod pool;
pub mod print;
pub mod result_set;
pub mod single;
pub mod stake;
pub mod sync;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
