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

use crate::config::MiningConfig;
use crate::itemset::Itemset;
use crate::rule::{Rule, RuleSet};
use crate::store::FrequentSetStore;
use crate::tabu::TabuSet;
use rayon::prelude::*;
use tracing::{debug, warn};

// Splits are enumerated as bit masks over the itemset's members.
const MAX_RULE_ITEMSET_SIZE: usize = 63;

#[derive(Default)]
struct ItemsetRules {
    rules: Vec<Rule>,
    missing_subsets: usize,
    // Splits whose consequent contained a failed consequent.
    skipped_splits: usize,
}

/// Generates every rule `A => S\A` whose confidence reaches the configured
/// threshold, for every frequent itemset `S` of two or more items. Subset
/// supports are read from `store`; the dataset is not rescanned.
pub fn generate_rules(store: &FrequentSetStore, config: &MiningConfig) -> RuleSet {
    let itemsets: Vec<(&Itemset, u32)> = store
        .iter()
        .filter(|(itemset, _)| itemset.count() > 1)
        .collect();

    let per_itemset: Vec<ItemsetRules> = itemsets
        .par_iter()
        .map(|&(itemset, support)| rules_for_itemset(itemset, support, store, config))
        .collect();

    let mut rules = vec![];
    let mut missing_subsets = 0;
    let mut skipped_splits = 0;
    for found in per_itemset {
        rules.extend(found.rules);
        missing_subsets += found.missing_subsets;
        skipped_splits += found.skipped_splits;
    }
    if missing_subsets > 0 {
        warn!(
            missing_subsets,
            "frequent itemset store is not downward closed; affected rules were skipped"
        );
    }
    debug!(
        itemsets = itemsets.len(),
        rules = rules.len(),
        skipped_splits,
        "generated rules"
    );
    RuleSet::new(rules, missing_subsets).with_skipped_splits(skipped_splits)
}

// Splits of one itemset are visited in ascending order of the consequent's
// bit mask. A failed split tabus its consequent: growing the consequent
// shrinks the antecedent, whose support can only rise, so every split with
// a superset consequent fails as well.
fn rules_for_itemset(
    itemset: &Itemset,
    support: u32,
    store: &FrequentSetStore,
    config: &MiningConfig,
) -> ItemsetRules {
    let mut found = ItemsetRules::default();
    let members: Vec<usize> = itemset.iter().collect();
    if members.len() > MAX_RULE_ITEMSET_SIZE {
        warn!(
            items = members.len(),
            itemset = ?itemset,
            "itemset too large to split; skipped"
        );
        return found;
    }
    let universe = itemset.universe();
    let num_transactions = store.num_transactions() as f64;
    let mut tabu = TabuSet::new();

    let all = (1u64 << members.len()) - 1;
    for mask in 1..all {
        let consequent = Itemset::select(universe, &members, mask);
        if tabu.excludes(&consequent) {
            found.skipped_splits += 1;
            continue;
        }
        let antecedent = itemset.difference(&consequent);
        let antecedent_support = match store.support(&antecedent) {
            Some(s) => s,
            None => {
                warn!(antecedent = ?antecedent, itemset = ?itemset, "subset missing from store");
                found.missing_subsets += 1;
                continue;
            }
        };

        let confidence = support as f64 / antecedent_support as f64;
        if confidence < config.confidence() {
            tabu.insert(consequent);
            continue;
        }

        // Only lift needs the consequent's support.
        let lift = match store.support(&consequent) {
            Some(s) => confidence * num_transactions / s as f64,
            None if config.min_lift().is_none() => f64::NAN,
            None => {
                warn!(consequent = ?consequent, itemset = ?itemset, "subset missing from store");
                found.missing_subsets += 1;
                continue;
            }
        };
        if let Some(min_lift) = config.min_lift() {
            if lift < min_lift {
                continue;
            }
        }

        found.rules.push(Rule {
            antecedent,
            consequent,
            confidence,
            lift,
            support,
        });
    }
    found
}

#[cfg(test)]
mod tests {
    use super::{generate_rules, rules_for_itemset};
    use crate::apriori::apriori;
    use crate::config::MiningConfig;
    use crate::dataset::Dataset;
    use crate::itemset::Itemset;
    use crate::store::FrequentSetStore;
    use std::sync::atomic::AtomicBool;

    fn census() -> Dataset {
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
        Dataset::load(&item_order, &transactions).unwrap()
    }

    fn set(dataset: &Dataset, labels: &[&str]) -> Itemset {
        let mut s = dataset.empty_itemset();
        for l in labels {
            s.insert(dataset.itemizer().id_of(l).unwrap().as_index());
        }
        s
    }

    #[test]
    fn test_generate_rules() {
        let dataset = census();
        let store = apriori(&dataset, 1, &AtomicBool::new(false)).unwrap();
        let config = MiningConfig::new(1, 0.05).unwrap();
        let rules = generate_rules(&store, &config);
        assert_eq!(rules.missing_subsets(), 0);

        let expected = [
            (vec!["a"], vec!["e"], 0.6666666666666667, 1.4666666666666668),
            (vec!["a"], vec!["b"], 1.0, 1.222222222222222),
            (vec!["a", "b"], vec!["e"], 0.6666666666666667, 1.4666666666666668),
            (vec!["b"], vec!["c", "d"], 0.1111111111111111, 1.222222222222222),
            (vec!["c", "g"], vec!["f"], 1.0, 3.666666666666667),
            (vec!["d"], vec!["e", "g"], 0.5, 5.5),
            (vec!["g"], vec!["c", "f"], 0.5, 1.8333333333333335),
        ];
        for (antecedent, consequent, confidence, lift) in expected.iter() {
            let rule = rules
                .find(&set(&dataset, antecedent), &set(&dataset, consequent))
                .unwrap_or_else(|| panic!("missing {:?} => {:?}", antecedent, consequent));
            assert!((rule.confidence - confidence).abs() < 1e-9);
            assert!((rule.lift - lift).abs() < 1e-9);
        }

        for rule in rules.iter() {
            assert!(rule.antecedent.is_disjoint(&rule.consequent));
            let s = dataset.support(&rule.itemset());
            let a = dataset.support(&rule.antecedent);
            assert_eq!(rule.support, s);
            assert!(s as f64 / a as f64 >= 0.05);
        }
    }

    #[test]
    fn test_confidence_and_lift_thresholds() {
        let dataset = census();
        let store = apriori(&dataset, 2, &AtomicBool::new(false)).unwrap();

        let strict = MiningConfig::new(2, 1.0).unwrap();
        let rules = generate_rules(&store, &strict);
        assert!(!rules.is_empty());
        assert!(rules.iter().all(|r| r.confidence == 1.0));
        assert!(rules
            .find(&set(&dataset, &["a"]), &set(&dataset, &["b"]))
            .is_some());

        let lifted = MiningConfig::new(2, 0.1).unwrap().with_min_lift(1.5).unwrap();
        let rules = generate_rules(&store, &lifted);
        assert!(rules.iter().all(|r| r.lift >= 1.5));
        // a => b has lift 11/9 only.
        assert!(rules
            .find(&set(&dataset, &["a"]), &set(&dataset, &["b"]))
            .is_none());
    }

    #[test]
    fn test_missing_subset_is_skipped() {
        // {0,1} without {1}: a store that is not downward closed.
        let mut store = FrequentSetStore::new(2, 4);
        store.insert(Itemset::from_indices(2, vec![0]), 3);
        store.insert(Itemset::from_indices(2, vec![0, 1]), 2);

        // {1} => {0} has no antecedent support. {0} => {1} passes confidence
        // and only its lift is unknown.
        let rules = generate_rules(&store, &MiningConfig::new(1, 0.1).unwrap());
        assert_eq!(rules.missing_subsets(), 1);
        assert_eq!(rules.len(), 1);
        let rule = rules
            .find(&Itemset::from_indices(2, vec![0]), &Itemset::from_indices(2, vec![1]))
            .unwrap();
        assert!((rule.confidence - 2.0 / 3.0).abs() < 1e-9);
        assert!(rule.lift.is_nan());

        // With a lift threshold the consequent's support is required.
        let lifted = MiningConfig::new(1, 0.1).unwrap().with_min_lift(0.0).unwrap();
        let rules = generate_rules(&store, &lifted);
        assert_eq!(rules.missing_subsets(), 2);
        assert_eq!(rules.len(), 0);
    }

    #[test]
    fn test_failed_consequent_skips_its_supersets() {
        let set = |indices: &[usize]| Itemset::from_indices(3, indices.iter().cloned());
        // {1} and {2} are absent. They are only the antecedents of the splits
        // with consequents {0,1} and {0,2}, which must not be looked up once
        // {1,2} => {0} fails.
        let mut store = FrequentSetStore::new(3, 5);
        store.insert(set(&[0]), 2);
        store.insert(set(&[0, 1]), 2);
        store.insert(set(&[0, 2]), 2);
        store.insert(set(&[1, 2]), 4);
        store.insert(set(&[0, 1, 2]), 2);
        let config = MiningConfig::new(1, 0.6).unwrap();

        let found = rules_for_itemset(&set(&[0, 1, 2]), 2, &store, &config);
        assert_eq!(found.skipped_splits, 2);
        assert_eq!(found.missing_subsets, 0);
        let mut consequents: Vec<Itemset> =
            found.rules.iter().map(|r| r.consequent.clone()).collect();
        consequents.sort();
        let mut expected = vec![set(&[1]), set(&[2]), set(&[1, 2])];
        expected.sort();
        assert_eq!(consequents, expected);
        for rule in &found.rules {
            assert!(!rule.consequent.contains(0));
            assert_eq!(rule.confidence, 1.0);
        }
    }

    #[test]
    fn test_oversized_itemset_is_skipped() {
        let itemset = Itemset::full(64);
        let mut store = FrequentSetStore::new(64, 1);
        store.insert(itemset.clone(), 1);
        let found = rules_for_itemset(&itemset, 1, &store, &MiningConfig::new(1, 0.5).unwrap());
        assert!(found.rules.is_empty());
        assert_eq!(found.missing_subsets, 0);
        assert_eq!(found.skipped_splits, 0);
    }

    #[test]
    fn test_skipped_splits_are_reported() {
        let dataset = census();
        let store = apriori(&dataset, 1, &AtomicBool::new(false)).unwrap();
        let loose = generate_rules(&store, &MiningConfig::new(1, 0.01).unwrap());
        assert_eq!(loose.skipped_splits(), 0);
        let strict = generate_rules(&store, &MiningConfig::new(1, 1.0).unwrap());
        assert!(strict.skipped_splits() > 0);
        assert!(strict.len() < loose.len());
    }
}
