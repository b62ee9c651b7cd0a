//! Interns a fixed set of items to dense ordinals, so that per-item state can live in vectors and
//! matrices rather than in maps keyed by the items themselves.

use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::Index;

#[derive(Debug, Clone)]
pub struct HashLookup<T: Eq + Hash> {
    item_to_index: FxHashMap<T, usize>,
    index_to_item: Vec<T>,
}
impl<T: Eq + Hash> HashLookup<T> {
    pub fn item_at(&self, index: usize) -> Option<&T> {
        self.index_to_item.get(index)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.item_to_index.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.index_to_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_item.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.index_to_item
    }
}

impl<T: Eq + Hash> Index<usize> for HashLookup<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.item_at(index)
            .unwrap_or_else(|| panic!("no item at index {index}"))
    }
}

impl<T: Eq + Hash + Clone> From<Vec<T>> for HashLookup<T> {
    /// Interns the items in their given order.
    ///
    /// # Panics
    ///
    /// If `index_to_item` contains duplicates.
    fn from(index_to_item: Vec<T>) -> Self {
        let mut item_to_index =
            FxHashMap::with_capacity_and_hasher(index_to_item.len(), Default::default());
        for (index, item) in index_to_item.iter().enumerate() {
            if let Some(existing_index) = item_to_index.insert(item.clone(), index) {
                panic!("duplicate item at index {index}, previously at {existing_index}")
            }
        }
        Self {
            item_to_index,
            index_to_item,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::result_set::ResultSet;

    use super::*;

    #[test]
    fn intern_result_sets() {
        let lookup = HashLookup::from(vec![
            ResultSet::singleton('a'),
            ResultSet::try_from(vec!['a', 'b']).unwrap(),
        ]);
        assert_eq!(2, lookup.len());
        assert!(!lookup.is_empty());
        assert_eq!(Some(0), lookup.index_of(&ResultSet::singleton('a')));
        assert_eq!(
            Some(1),
            lookup.index_of(&ResultSet::try_from(vec!['b', 'a']).unwrap())
        );
        assert_eq!(None, lookup.index_of(&ResultSet::singleton('b')));
        assert_eq!(&ResultSet::singleton('a'), &lookup[0]);
        assert_eq!(None, lookup.item_at(2));
    }

    #[test]
    fn empty() {
        let lookup = HashLookup::<ResultSet<char>>::from(vec![]);
        assert!(lookup.is_empty());
        assert!(lookup.items().is_empty());
    }

    #[test]
    #[should_panic(expected = "no item at index 2")]
    fn no_item_at_index() {
        let lookup = HashLookup::from(vec!["home", "away"]);
        let _ = lookup[2];
    }

    #[test]
    #[should_panic(expected = "duplicate item at index 1, previously at 0")]
    fn duplicate_result_sets() {
        let _ = HashLookup::from(vec![
            ResultSet::try_from(vec!['a', 'b']).unwrap(),
            ResultSet::try_from(vec!['b', 'a']).unwrap(),
        ]);
    }
}
