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
use fnv::FnvHashSet;

// Candidates with more members than this are always checked by scanning the
// entries, since enumerating their subsets would be too expensive.
const MAX_ENUMERATED_MEMBERS: usize = 20;

/// Itemsets that failed a threshold. Any superset of an entry is excluded
/// too, so `excludes` answers "does some entry lie inside this candidate".
#[derive(Clone, Debug, Default)]
pub struct TabuSet {
    entries: FnvHashSet<Itemset>,
}

impl TabuSet {
    pub fn new() -> TabuSet {
        TabuSet {
            entries: FnvHashSet::default(),
        }
    }

    pub fn insert(&mut self, itemset: Itemset) {
        self.entries.insert(itemset);
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.entries.contains(itemset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `candidate` is a superset of (or equal to) some entry.
    pub fn excludes(&self, candidate: &Itemset) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let members: Vec<usize> = candidate.iter().collect();
        if members.len() <= MAX_ENUMERATED_MEMBERS
            && (1usize << members.len()) <= self.entries.len()
        {
            self.excludes_by_lookup(candidate.universe(), &members)
        } else {
            self.entries.iter().any(|entry| entry.is_subset_of(candidate))
        }
    }

    // Hashes every non-empty subset of the candidate; cheaper than a scan
    // once the tabu set outgrows the candidate's power set.
    fn excludes_by_lookup(&self, universe: usize, members: &[usize]) -> bool {
        let subsets = 1u64 << members.len();
        (1..subsets).any(|mask| {
            self.entries
                .contains(&Itemset::select(universe, members, mask))
        })
    }
}
