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

//! Breadth-first candidate-generate-and-test, shared by Apriori and Eclat.
//! The two differ only in how a candidate's support is counted.

use crate::dataset::Dataset;
use crate::error::{MiningError, Result};
use crate::item::Item;
use crate::itemset::Itemset;
use crate::store::FrequentSetStore;
use crate::tabu::TabuSet;
use fnv::FnvHashSet;
use itertools::Itertools;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

pub fn mine_levels<F>(
    dataset: &Dataset,
    min_count: u32,
    cancel: &AtomicBool,
    count_support: F,
) -> Result<FrequentSetStore>
where
    F: Fn(&Itemset) -> u32 + Sync,
{
    let mut store = FrequentSetStore::new(dataset.num_items(), dataset.num_transactions());
    let mut tabu = TabuSet::new();

    // Level 1: every single item, counted straight off the columns.
    let item_count = dataset.column_sums();
    let mut level: Vec<Itemset> = vec![];
    for i in 0..dataset.num_items() {
        let itemset = Itemset::from_indices(dataset.num_items(), Some(i));
        let support = item_count.get(&Item::with_id(i as u32));
        if support >= min_count {
            store.insert(itemset.clone(), support);
            level.push(itemset);
        } else {
            tabu.insert(itemset);
        }
    }
    debug!(size = 1, frequent = level.len(), "counted level");

    let mut size = 1;
    while level.len() >= 2 {
        if cancel.load(Ordering::Relaxed) {
            return Err(MiningError::Cancelled);
        }
        let candidates = generate_candidates(&level, &tabu);
        if candidates.is_empty() {
            break;
        }
        let supports: Vec<u32> = candidates
            .par_iter()
            .map(|candidate| count_support(candidate))
            .collect();

        let mut next_level = Vec::with_capacity(candidates.len());
        for (candidate, support) in candidates.into_iter().zip(supports) {
            if support >= min_count {
                store.insert(candidate.clone(), support);
                next_level.push(candidate);
            } else {
                tabu.insert(candidate);
            }
        }
        size += 1;
        debug!(
            size,
            frequent = next_level.len(),
            tabu = tabu.len(),
            "counted level"
        );
        level = next_level;
    }

    Ok(store)
}

/// Joins every pair of itemsets in `level` that differ in exactly one item
/// on each side. Candidates keep the enumeration order of the pairs;
/// duplicates and supersets of tabu entries are dropped.
pub fn generate_candidates(level: &[Itemset], tabu: &TabuSet) -> Vec<Itemset> {
    let mut seen: FnvHashSet<Itemset> = FnvHashSet::default();
    let mut candidates = vec![];
    for (a, b) in level.iter().tuple_combinations() {
        if a.symmetric_difference_count(b) != 2 {
            continue;
        }
        let candidate = a.union(b);
        if !seen.insert(candidate.clone()) {
            continue;
        }
        if tabu.excludes(&candidate) {
            continue;
        }
        candidates.push(candidate);
    }
    candidates
}
