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

/// Dense per-item counter, indexed by item id.
#[derive(Clone, Debug, Default)]
pub struct ItemCounter {
    counter: Vec<u32>,
}

impl ItemCounter {
    pub fn new() -> ItemCounter {
        ItemCounter { counter: vec![] }
    }
    pub fn with_counts(counts: Vec<u32>) -> ItemCounter {
        ItemCounter { counter: counts }
    }
    pub fn add(&mut self, item: &Item, count: u32) {
        let index = item.as_index();
        if self.counter.len() <= index {
            self.counter.resize(index + 1, 0);
        }
        self.counter[index] += count;
    }
    pub fn get(&self, item: &Item) -> u32 {
        let index = item.as_index();
        if index >= self.counter.len() {
            0
        } else {
            self.counter[index]
        }
    }
    pub fn items_with_count_at_least(&self, min_count: u32) -> Vec<Item> {
        (0..self.counter.len())
            .filter(|&i| self.counter[i] >= min_count && self.counter[i] > 0)
            .map(|i| Item::with_id(i as u32))
            .collect()
    }
    /// Sorts by descending count; equal counts keep ascending item order.
    pub fn sort_descending(&self, v: &mut Vec<Item>) {
        v.sort_by(|a, b| self.get(b).cmp(&self.get(a)).then(a.cmp(b)));
    }
}
