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

//! Fixed-width item and transaction sets.
//!
//! `Itemset` is a set of items (a row of the incidence matrix, a candidate,
//! an antecedent...), and `TidList` is the same structure laid over
//! transaction ids (a column of the incidence matrix). The bits live in a
//! `bit_set::BitSet`; the wrapper only adds the universe width, so that sets
//! built for one dataset can be range checked and enumerated by mask.

use crate::item::Item;
use bit_set::BitSet;
use std::fmt;

#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexSet {
    bits: BitSet,
    universe: usize,
}

pub type Itemset = IndexSet;
pub type TidList = IndexSet;

impl IndexSet {
    /// Empty set over a universe of `universe` elements.
    pub fn new(universe: usize) -> IndexSet {
        IndexSet {
            bits: BitSet::with_capacity(universe),
            universe,
        }
    }

    pub fn full(universe: usize) -> IndexSet {
        IndexSet::from_indices(universe, 0..universe)
    }

    pub fn from_indices<I>(universe: usize, indices: I) -> IndexSet
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = IndexSet::new(universe);
        for i in indices {
            set.insert(i);
        }
        set
    }

    pub fn from_items(universe: usize, items: &[Item]) -> IndexSet {
        IndexSet::from_indices(universe, items.iter().map(|item| item.as_index()))
    }

    /// Width of the universe, not the number of members.
    pub fn universe(&self) -> usize {
        self.universe
    }

    pub fn insert(&mut self, index: usize) {
        assert!(
            index < self.universe,
            "index {} out of range {}",
            index,
            self.universe
        );
        self.bits.insert(index);
    }

    pub fn remove(&mut self, index: usize) {
        self.bits.remove(index);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.bits.contains(index)
    }

    /// Number of members.
    pub fn count(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_subset_of(&self, other: &IndexSet) -> bool {
        self.bits.is_subset(&other.bits)
    }

    pub fn is_disjoint(&self, other: &IndexSet) -> bool {
        self.bits.is_disjoint(&other.bits)
    }

    pub fn union(&self, other: &IndexSet) -> IndexSet {
        let mut set = self.clone();
        set.bits.union_with(&other.bits);
        set
    }

    pub fn intersection(&self, other: &IndexSet) -> IndexSet {
        let mut set = self.clone();
        set.intersect_with(other);
        set
    }

    pub fn difference(&self, other: &IndexSet) -> IndexSet {
        let mut set = self.clone();
        set.bits.difference_with(&other.bits);
        set
    }

    pub fn intersect_with(&mut self, other: &IndexSet) {
        self.bits.intersect_with(&other.bits);
    }

    /// Number of members in exactly one of the two sets.
    pub fn symmetric_difference_count(&self, other: &IndexSet) -> usize {
        self.bits.symmetric_difference(&other.bits).count()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> bit_set::Iter<'_, u32> {
        self.bits.iter()
    }

    pub fn items(&self) -> Vec<Item> {
        self.iter().map(|i| Item::with_id(i as u32)).collect()
    }

    /// Set over `universe` elements holding the members picked by `mask`:
    /// bit `j` of the mask picks `members[j]`. With `members` collected from
    /// some set's `iter()`, masks enumerate that set's subsets.
    pub fn select(universe: usize, members: &[usize], mask: u64) -> IndexSet {
        IndexSet::from_indices(
            universe,
            members
                .iter()
                .enumerate()
                .filter(|&(j, _)| mask & (1u64 << j) != 0)
                .map(|(_, &member)| member),
        )
    }
}

impl fmt::Debug for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
