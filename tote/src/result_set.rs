//! A [ResultSet] is an unordered, duplicate-free set of atomic results. A wager expects one, and a bet
//! settles on one.

use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use rustc_hash::{FxHashSet, FxHasher};
use thiserror::Error;

/// An atomic result of an event, e.g. "home team wins". Any value type with identity semantics will do.
pub trait Atom: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Atom for T {}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidResults {
    #[error("no results specified")]
    Empty,

    #[error("duplicate result {result}")]
    Duplicate { result: String },
}

#[derive(Clone)]
pub struct ResultSet<R: Atom> {
    results: Vec<R>,
    subsets: OnceLock<Vec<ResultSet<R>>>,
}
impl<R: Atom> ResultSet<R> {
    pub fn try_from_iter(results: impl IntoIterator<Item = R>) -> Result<Self, InvalidResults> {
        let results: Vec<_> = results.into_iter().collect();
        if results.is_empty() {
            return Err(InvalidResults::Empty);
        }
        check_unique(&results)?;
        Ok(Self::new_unchecked(results))
    }

    pub fn singleton(result: R) -> Self {
        Self::new_unchecked(vec![result])
    }

    fn new_unchecked(results: Vec<R>) -> Self {
        Self {
            results,
            subsets: OnceLock::new(),
        }
    }

    /// The members, in the order they were supplied.
    pub fn results(&self) -> &[R] {
        &self.results
    }

    /// Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn contains(&self, result: &R) -> bool {
        self.results.contains(result)
    }

    /// Whether the two sets have at least one result in common. A wager wins against an actual result
    /// it shares a result with; two sets that share nothing are _contrary_.
    pub fn shares_result_with(&self, other: &ResultSet<R>) -> bool {
        self.results.iter().any(|result| other.contains(result))
    }

    /// All non-empty proper subsets, computed on first access and retained thereafter. There are
    /// 2<sup>n</sup> − 2 of them; their order is unspecified.
    pub fn subsets(&self) -> &[ResultSet<R>] {
        self.subsets.get_or_init(|| {
            let cardinality = self.results.len();
            powerset(&self.results)
                .into_iter()
                .filter(|subset| !subset.is_empty() && subset.len() != cardinality)
                .map(Self::new_unchecked)
                .collect()
        })
    }
}

fn powerset<R: Clone>(items: &[R]) -> Vec<Vec<R>> {
    match items.split_first() {
        None => vec![vec![]],
        Some((first, rest)) => {
            let without = powerset(rest);
            let mut subsets: Vec<_> = without
                .iter()
                .map(|subset| {
                    let mut with = Vec::with_capacity(subset.len() + 1);
                    with.push(first.clone());
                    with.extend_from_slice(subset);
                    with
                })
                .collect();
            subsets.extend(without);
            subsets
        }
    }
}

fn check_unique<R: Atom>(results: &[R]) -> Result<(), InvalidResults> {
    let mut seen = FxHashSet::with_capacity_and_hasher(results.len(), Default::default());
    for result in results {
        if !seen.insert(result) {
            return Err(InvalidResults::Duplicate {
                result: format!("{result:?}"),
            });
        }
    }
    Ok(())
}

impl<R: Atom> TryFrom<Vec<R>> for ResultSet<R> {
    type Error = InvalidResults;

    fn try_from(results: Vec<R>) -> Result<Self, Self::Error> {
        Self::try_from_iter(results)
    }
}

impl<R: Atom> PartialEq for ResultSet<R> {
    fn eq(&self, other: &Self) -> bool {
        self.results.len() == other.results.len()
            && self.results.iter().all(|result| other.contains(result))
    }
}

impl<R: Atom> Eq for ResultSet<R> {}

impl<R: Atom> Hash for ResultSet<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // XOR is commutative, so any member order folds to the same value
        let folded = self.results.iter().fold(0u64, |folded, result| {
            let mut hasher = FxHasher::default();
            result.hash(&mut hasher);
            folded ^ hasher.finish()
        });
        state.write_u64(folded);
    }
}

impl<R: Atom> Debug for ResultSet<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(&self.results).finish()
    }
}

impl<R: Atom + Display> Display for ResultSet<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, result) in self.results.iter().enumerate() {
            if index != 0 {
                write!(f, "+")?;
            }
            write!(f, "{result}")?;
        }
        Ok(())
    }
}
