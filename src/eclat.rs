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

use crate::dataset::Dataset;
use crate::error::Result;
use crate::levelwise::mine_levels;
use crate::store::FrequentSetStore;
use std::sync::atomic::AtomicBool;

/// Level-wise Eclat: a candidate's support is the popcount of the AND of
/// the tid-lists of its items, with no row scan.
pub fn eclat(dataset: &Dataset, min_count: u32, cancel: &AtomicBool) -> Result<FrequentSetStore> {
    mine_levels(dataset, min_count, cancel, |candidate| {
        dataset.tidlist_support(candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::eclat;
    use crate::apriori::apriori;
    use crate::dataset::Dataset;
    use crate::error::MiningError;
    use std::sync::atomic::AtomicBool;

    fn dataset() -> Dataset {
        let item_order = vec!["a", "b", "c", "d", "e"];
        let transactions = vec![
            vec!["a", "b", "c", "d"],
            vec!["a", "b", "c"],
            vec!["a", "b", "d"],
            vec!["b", "c", "d", "e"],
            vec!["a", "c", "e"],
            vec!["a", "b", "c", "d", "e"],
        ];
        Dataset::load(&item_order, &transactions).unwrap()
    }

    #[test]
    fn test_eclat_matches_apriori() {
        let dataset = dataset();
        let not_cancelled = AtomicBool::new(false);
        for min_count in 1..=7 {
            let a = apriori(&dataset, min_count, &not_cancelled).unwrap();
            let e = eclat(&dataset, min_count, &not_cancelled).unwrap();
            assert!(a.same_content(&e), "min_count {}", min_count);
            // Same control flow, so even insertion order agrees.
            for size in a.sizes() {
                assert_eq!(
                    a.level(size).unwrap().itemsets(),
                    e.level(size).unwrap().itemsets()
                );
            }
        }
    }

    #[test]
    fn test_cancelled() {
        let dataset = dataset();
        match eclat(&dataset, 1, &AtomicBool::new(true)) {
            Err(MiningError::Cancelled) => {}
            other => panic!("expected Cancelled, got {:?}", other),
        }
    }
}
