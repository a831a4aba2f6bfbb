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

//! Frequent itemset mining and association rule generation over
//! market-basket style datasets.
//!
//! A `Dataset` is loaded once from labelled transactions. Any of the three
//! miners (Apriori, Eclat, FPGrowth) turns it into a `FrequentSetStore`,
//! and `generate_rules` turns the store into confident `Rule`s, which
//! `verbalize` maps back to item labels.
//!
//! ```
//! use arm_miner::{generate_rules, mine, verbalize, Dataset, MiningConfig};
//!
//! let dataset = Dataset::load(
//!     &["bread", "milk", "diaper", "beer"],
//!     &[
//!         vec!["bread", "milk"],
//!         vec!["bread", "diaper", "beer"],
//!         vec!["milk", "diaper", "beer"],
//!         vec!["bread", "milk", "diaper", "beer"],
//!         vec!["bread", "milk", "diaper"],
//!     ],
//! )
//! .unwrap();
//! let config = MiningConfig::new(3, 0.7).unwrap();
//! let store = mine(&dataset, &config).unwrap();
//! let rules = generate_rules(&store, &config);
//! let labeled = verbalize(rules.iter(), dataset.itemizer());
//! assert!(labeled
//!     .iter()
//!     .any(|r| r.antecedent == ["beer"] && r.consequent == ["diaper"]));
//! ```

pub mod apriori;
pub mod config;
pub mod dataset;
pub mod eclat;
pub mod error;
pub mod fptree;
pub mod generate_rules;
pub mod item;
pub mod item_counter;
pub mod itemizer;
pub mod itemset;
pub mod levelwise;
pub mod miner;
pub mod rule;
pub mod store;
pub mod tabu;
pub mod transaction_reader;
pub mod verbalize;

pub use crate::config::{Algorithm, MiningConfig};
pub use crate::dataset::Dataset;
pub use crate::error::{MiningError, Result};
pub use crate::generate_rules::generate_rules;
pub use crate::item::Item;
pub use crate::itemizer::Itemizer;
pub use crate::itemset::{Itemset, TidList};
pub use crate::miner::{mine, mine_with_cancel};
pub use crate::rule::{Rule, RuleSet};
pub use crate::store::FrequentSetStore;
pub use crate::transaction_reader::TransactionReader;
pub use crate::verbalize::{verbalize, LabeledRule};
