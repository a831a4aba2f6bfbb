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

use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::itemset::Itemset;
use fnv::FnvHashMap;
use std::hash::{Hash, Hasher};

/// An association rule `antecedent => consequent`. The two sides are
/// disjoint and non-empty, and their union is a frequent itemset.
#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: f64,
    /// NaN when the consequent's support was not in the store.
    pub lift: f64,
    /// Absolute support of `antecedent | consequent`.
    pub support: u32,
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Rule {
    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            Item::item_vec_to_string(&self.antecedent.items(), itemizer),
            " => ".to_owned(),
            Item::item_vec_to_string(&self.consequent.items(), itemizer),
        ]
        .join("")
    }

    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn lift(&self) -> f64 {
        self.lift
    }

    /// Support of the rule's itemset as a fraction of `num_transactions`.
    pub fn relative_support(&self, num_transactions: usize) -> f64 {
        if num_transactions == 0 {
            return 0.0;
        }
        self.support as f64 / num_transactions as f64
    }
}

/// Output of rule generation: every rule in generation order, plus the
/// number of antecedent/consequent lookups that missed the store and the
/// number of splits pruned without a lookup.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    missing_subsets: usize,
    skipped_splits: usize,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>, missing_subsets: usize) -> RuleSet {
        RuleSet {
            rules,
            missing_subsets,
            skipped_splits: 0,
        }
    }

    pub fn with_skipped_splits(mut self, skipped_splits: usize) -> RuleSet {
        self.skipped_splits = skipped_splits;
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Lookups of a subset that should have been frequent but was absent.
    /// Non-zero only if the store was not downward closed.
    pub fn missing_subsets(&self) -> usize {
        self.missing_subsets
    }

    /// Splits never evaluated because their consequent contained the
    /// consequent of a split that had already failed the confidence test.
    pub fn skipped_splits(&self) -> usize {
        self.skipped_splits
    }

    pub fn find(&self, antecedent: &Itemset, consequent: &Itemset) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|r| &r.antecedent == antecedent && &r.consequent == consequent)
    }

    /// One rule per antecedent. When several itemsets produce rules with the
    /// same antecedent, the most confident one is kept; ties keep the rule
    /// generated first.
    pub fn by_antecedent(&self) -> FnvHashMap<Itemset, &Rule> {
        let mut map: FnvHashMap<Itemset, &Rule> = FnvHashMap::default();
        for rule in &self.rules {
            let slot = map.entry(rule.antecedent.clone()).or_insert(rule);
            if rule.confidence > slot.confidence {
                *slot = rule;
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::{Rule, RuleSet};
    use crate::itemizer::Itemizer;
    use crate::itemset::Itemset;

    fn rule(antecedent: &[usize], consequent: &[usize], confidence: f64) -> Rule {
        Rule {
            antecedent: Itemset::from_indices(4, antecedent.iter().cloned()),
            consequent: Itemset::from_indices(4, consequent.iter().cloned()),
            confidence,
            lift: 1.0,
            support: 2,
        }
    }

    #[test]
    fn test_to_string() {
        let itemizer = Itemizer::from_order(&["milk", "bread", "beer", "diaper"]).unwrap();
        assert_eq!(rule(&[3, 1], &[2], 1.0).to_string(&itemizer), "bread diaper => beer");
    }

    #[test]
    fn test_by_antecedent_keeps_most_confident() {
        let rules = RuleSet::new(
            vec![
                rule(&[0], &[1], 0.6),
                rule(&[0], &[2], 0.9),
                rule(&[0], &[3], 0.9),
                rule(&[1], &[2], 0.5),
            ],
            0,
        );
        let map = rules.by_antecedent();
        assert_eq!(map.len(), 2);
        let from_zero = map[&Itemset::from_indices(4, vec![0])];
        assert_eq!(from_zero.consequent, Itemset::from_indices(4, vec![2]));
        assert_eq!(map[&Itemset::from_indices(4, vec![1])].confidence, 0.5);
    }

    #[test]
    fn test_rule_identity_ignores_measures() {
        assert_eq!(rule(&[0], &[1], 0.6), rule(&[0], &[1], 0.8));
        assert_ne!(rule(&[0], &[1], 0.6), rule(&[1], &[0], 0.6));
        assert_eq!(rule(&[0], &[1, 2], 0.6).itemset(), Itemset::from_indices(4, vec![0, 1, 2]));
        assert_eq!(rule(&[0], &[1], 0.6).relative_support(4), 0.5);
    }
}
