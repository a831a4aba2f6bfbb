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

/// Level-wise Apriori: each candidate's support is counted by scanning
/// every transaction row for a superset of the candidate.
pub fn apriori(dataset: &Dataset, min_count: u32, cancel: &AtomicBool) -> Result<FrequentSetStore> {
    mine_levels(dataset, min_count, cancel, |candidate| {
        dataset.support(candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::apriori;
    use crate::dataset::Dataset;
    use crate::itemset::Itemset;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn test_apriori() {
        // HARM's census2.csv test dataset.
        let item_order = vec!["a", "b", "c", "d", "e", "f", "g"];
        let transactions = vec![
            vec!["a", "b", "c"],
            vec!["d", "b", "c"],
            vec!["a", "b", "e"],
            vec!["f", "g", "c"],
            vec!["d", "g", "e"],
            vec!["f", "b", "c"],
            vec!["f", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "e"],
        ];
        let dataset = Dataset::load(&item_order, &transactions).unwrap();
        let store = apriori(&dataset, 2, &AtomicBool::new(false)).unwrap();

        let set = |labels: &[&str]| -> Itemset {
            let mut s = dataset.empty_itemset();
            for l in labels {
                s.insert(dataset.itemizer().id_of(l).unwrap().as_index());
            }
            s
        };

        // Every singleton reaches support 2.
        assert_eq!(store.level(1).unwrap().len(), 7);
        assert_eq!(store.support(&set(&["b"])), Some(9));
        assert_eq!(store.support(&set(&["a", "b"])), Some(6));
        assert_eq!(store.support(&set(&["a", "b", "e"])), Some(4));
        assert_eq!(store.support(&set(&["b", "c", "f"])), Some(2));
        assert_eq!(store.support(&set(&["d", "e"])), None);
        assert_eq!(store.max_size(), 3);
        for (itemset, support) in store.iter() {
            assert!(support >= 2);
            assert_eq!(dataset.support(itemset), support);
        }
    }
}
