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

use crate::itemizer::Itemizer;
use crate::itemset::Itemset;
use crate::rule::Rule;

/// A rule projected back onto item labels.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledRule<'a> {
    pub antecedent: Vec<&'a str>,
    pub consequent: Vec<&'a str>,
    pub confidence: f64,
    pub lift: f64,
    pub support: u32,
}

/// Labels of the items in `itemset`, in item index order.
pub fn itemset_labels<'a>(itemset: &Itemset, itemizer: &'a Itemizer) -> Vec<&'a str> {
    itemset
        .items()
        .into_iter()
        .map(|item| itemizer.str_of(item))
        .collect()
}

/// Maps rules onto item labels. Rules where either side projects to no
/// labels are dropped.
pub fn verbalize<'a, 'r, I>(rules: I, itemizer: &'a Itemizer) -> Vec<LabeledRule<'a>>
where
    I: IntoIterator<Item = &'r Rule>,
{
    rules
        .into_iter()
        .map(|rule| LabeledRule {
            antecedent: itemset_labels(&rule.antecedent, itemizer),
            consequent: itemset_labels(&rule.consequent, itemizer),
            confidence: rule.confidence,
            lift: rule.lift,
            support: rule.support,
        })
        .filter(|labeled| !labeled.antecedent.is_empty() && !labeled.consequent.is_empty())
        .collect()
}
