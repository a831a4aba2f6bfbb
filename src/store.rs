// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::itemset::Itemset;
use fnv::FnvHashMap;
use std::collections::BTreeMap;

/// Frequent itemsets of one size, with supports parallel to `itemsets`.
#[derive(Clone, Debug, Default)]
pub struct Level {
    itemsets: Vec<Itemset>,
    supports: Vec<u32>,
    index: FnvHashMap<Itemset, usize>,
}

impl Level {
    pub fn itemsets(&self) -> &[Itemset] {
        &self.itemsets
    }

    pub fn supports(&self) -> &[u32] {
        &self.supports
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, u32)> {
        self.itemsets.iter().zip(self.supports.iter().cloned())
    }
}

/// Frequent itemsets grouped by size. Every mining algorithm produces one of
/// these; the rule generator reads subset supports out of it.
#[derive(Clone, Debug)]
pub struct FrequentSetStore {
    levels: BTreeMap<usize, Level>,
    num_items: usize,
    num_transactions: usize,
}

impl FrequentSetStore {
    pub fn new(num_items: usize, num_transactions: usize) -> FrequentSetStore {
        FrequentSetStore {
            levels: BTreeMap::new(),
            num_items,
            num_transactions,
        }
    }

    /// Records `itemset` with its support. Returns false, leaving the store
    /// unchanged, if the itemset was already present.
    pub fn insert(&mut self, itemset: Itemset, support: u32) -> bool {
        let level = self.levels.entry(itemset.count()).or_default();
        if level.index.contains_key(&itemset) {
            return false;
        }
        level.index.insert(itemset.clone(), level.itemsets.len());
        level.itemsets.push(itemset);
        level.supports.push(support);
        true
    }

    /// Exact-match lookup of a stored itemset's support.
    pub fn support(&self, itemset: &Itemset) -> Option<u32> {
        let level = self.levels.get(&itemset.count())?;
        level.index.get(itemset).map(|&i| level.supports[i])
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.support(itemset).is_some()
    }

    pub fn level(&self, size: usize) -> Option<&Level> {
        self.levels.get(&size).filter(|level| !level.is_empty())
    }

    /// Sizes that hold at least one itemset, ascending.
    pub fn sizes(&self) -> Vec<usize> {
        self.levels
            .iter()
            .filter(|(_, level)| !level.is_empty())
            .map(|(&size, _)| size)
            .collect()
    }

    pub fn max_size(&self) -> usize {
        self.sizes().last().cloned().unwrap_or(0)
    }

    /// Every stored itemset with its support, smallest sizes first and in
    /// insertion order within a size.
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, u32)> {
        self.levels.values().flat_map(|level| level.iter())
    }

    pub fn len(&self) -> usize {
        self.levels.values().map(|level| level.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Content of size `size` as a sorted list, for order-insensitive
    /// comparison between stores.
    pub fn sorted_level(&self, size: usize) -> Vec<(Itemset, u32)> {
        let mut v: Vec<(Itemset, u32)> = match self.levels.get(&size) {
            Some(level) => level.iter().map(|(i, s)| (i.clone(), s)).collect(),
            None => vec![],
        };
        v.sort();
        v
    }

    /// True when both stores hold the same itemsets with the same supports,
    /// regardless of insertion order.
    pub fn same_content(&self, other: &FrequentSetStore) -> bool {
        let sizes = self.sizes();
        sizes == other.sizes()
            && sizes
                .iter()
                .all(|&size| self.sorted_level(size) == other.sorted_level(size))
    }
}

#[cfg(test)]
mod tests {
    use super::FrequentSetStore;
    use crate::itemset::Itemset;

    #[test]
    fn test_store() {
        let mut store = FrequentSetStore::new(4, 10);
        assert!(store.is_empty());
        assert_eq!(store.max_size(), 0);

        assert!(store.insert(Itemset::from_indices(4, vec![1]), 7));
        assert!(store.insert(Itemset::from_indices(4, vec![0]), 5));
        assert!(store.insert(Itemset::from_indices(4, vec![0, 1]), 4));
        assert!(!store.insert(Itemset::from_indices(4, vec![1, 0]), 4));

        assert_eq!(store.len(), 3);
        assert_eq!(store.sizes(), vec![1, 2]);
        assert_eq!(store.max_size(), 2);
        assert_eq!(store.support(&Itemset::from_indices(4, vec![0, 1])), Some(4));
        assert_eq!(store.support(&Itemset::from_indices(4, vec![2])), None);
        assert_eq!(store.support(&Itemset::from_indices(4, vec![0, 1, 2])), None);

        let level = store.level(1).unwrap();
        assert_eq!(level.supports(), &[7, 5]);
        assert!(store.level(3).is_none());
    }

    #[test]
    fn test_same_content_ignores_order() {
        let mut a = FrequentSetStore::new(3, 5);
        a.insert(Itemset::from_indices(3, vec![0]), 3);
        a.insert(Itemset::from_indices(3, vec![2]), 4);
        let mut b = FrequentSetStore::new(3, 5);
        b.insert(Itemset::from_indices(3, vec![2]), 4);
        b.insert(Itemset::from_indices(3, vec![0]), 3);
        assert!(a.same_content(&b));

        b.insert(Itemset::from_indices(3, vec![0, 2]), 3);
        assert!(!a.same_content(&b));
    }
}
