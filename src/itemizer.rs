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

use crate::error::{MiningError, Result};
use crate::item::Item;
use fnv::FnvHashMap;

/// Bidirectional mapping between item labels and column indices. The order
/// is fixed at construction; label `item_order[i]` is `Item::with_id(i)`.
#[derive(Clone, Debug)]
pub struct Itemizer {
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn from_order<S: AsRef<str>>(item_order: &[S]) -> Result<Itemizer> {
        let mut itemizer = Itemizer {
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: Vec::with_capacity(item_order.len()),
        };
        for label in item_order {
            let label = label.as_ref();
            if itemizer.item_str_to_id.contains_key(label) {
                return Err(MiningError::DuplicateItem(label.to_owned()));
            }
            let id = Item::with_id(itemizer.item_id_to_str.len() as u32);
            itemizer.item_str_to_id.insert(String::from(label), id);
            itemizer.item_id_to_str.push(String::from(label));
        }
        Ok(itemizer)
    }

    pub fn id_of(&self, item: &str) -> Option<Item> {
        self.item_str_to_id.get(item).cloned()
    }

    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index()]
    }

    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.item_id_to_str
    }
}
