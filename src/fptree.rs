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
use crate::error::{MiningError, Result};
use crate::item::Item;
use crate::item_counter::ItemCounter;
use crate::itemset::Itemset;
use crate::store::FrequentSetStore;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

// The root is never anyone's child, so its index doubles as "no child" in
// the dense child arrays.
const ROOT: usize = 0;

#[derive(Debug)]
struct FPNode {
    item: Option<Item>,
    count: u32,
    parent: usize,
    children: Vec<usize>,
}

impl FPNode {
    fn new(item: Option<Item>, parent: usize, width: usize) -> FPNode {
        FPNode {
            item,
            count: 0,
            parent,
            children: vec![ROOT; width],
        }
    }

    fn is_root(&self) -> bool {
        self.item.is_none()
    }
}

/// Prefix tree over items `0..width`. Items are expected in rank space:
/// transactions are inserted in ascending item order, which is descending
/// global frequency once the dataset's columns have been ranked.
pub struct FPTree {
    nodes: Vec<FPNode>,
    width: usize,
    item_count: ItemCounter,
    item_lists: Vec<Vec<usize>>,
}

impl FPTree {
    pub fn new(width: usize) -> FPTree {
        FPTree {
            nodes: vec![FPNode::new(None, ROOT, width)],
            width,
            item_count: ItemCounter::new(),
            item_lists: vec![vec![]; width],
        }
    }

    fn add_node(&mut self, parent: usize, item: Item) -> usize {
        let id = self.nodes.len();
        self.nodes.push(FPNode::new(Some(item), parent, self.width));
        self.nodes[parent].children[item.as_index()] = id;
        self.item_lists[item.as_index()].push(id);
        id
    }

    pub fn child_of(&self, id: usize, item: Item) -> Option<usize> {
        match self.nodes[id].children[item.as_index()] {
            ROOT => None,
            child => Some(child),
        }
    }

    fn insert_child(&mut self, id: usize, item: Item, count: u32) -> usize {
        let child_id = match self.child_of(id, item) {
            Some(child_id) => child_id,
            None => self.add_node(id, item),
        };
        self.nodes[child_id].count += count;
        child_id
    }

    /// Inserts a transaction (sorted ascending) `count` times.
    pub fn insert(&mut self, transaction: &[Item], count: u32) {
        // Start iterating at the root node.
        let mut id = ROOT;
        for &item in transaction {
            // Keep a count of item frequencies of what's in the
            // tree, so mining knows which items can be frequent.
            self.item_count.add(&item, count);
            id = self.insert_child(id, item, count);
        }
    }

    pub fn item_count(&self) -> &ItemCounter {
        &self.item_count
    }

    /// Number of nodes, including the root.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Node-link chain of `item`: every node that represents it.
    pub fn item_nodes(&self, item: Item) -> &[usize] {
        match self.item_lists.get(item.as_index()) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// Sum of the path-counts along `item`'s node-link chain.
    pub fn item_support(&self, item: Item) -> u32 {
        self.item_nodes(item)
            .iter()
            .map(|&id| self.nodes[id].count)
            .sum()
    }

    /// Builds the tree of `item`'s conditional pattern base: the prefix
    /// path of every node holding `item`, weighted by that node's count.
    /// Prefixes only hold items ranked before `item`, so the new tree is
    /// narrower than this one.
    pub fn construct_conditional_tree(&self, item: Item) -> FPTree {
        let mut conditional_tree = FPTree::new(item.as_index());
        for &node_id in self.item_nodes(item) {
            let path = self.path_from_root_to_excluding(node_id);
            if !path.is_empty() {
                conditional_tree.insert(&path, self.nodes[node_id].count);
            }
        }
        conditional_tree
    }

    fn path_from_root_to_excluding(&self, node_id: usize) -> Vec<Item> {
        let mut path = vec![];
        let mut id = self.nodes[node_id].parent;
        loop {
            let node = &self.nodes[id];
            if node.is_root() {
                break;
            }
            path.extend(node.item);
            id = node.parent;
        }
        path.reverse();
        path
    }
}

/// An itemset found by FPGrowth, in the item space of the tree it was
/// mined from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequentPattern {
    pub items: Vec<Item>,
    pub count: u32,
}

/// Mines every frequent itemset that ends in `item`, with `suffix` being
/// the items already fixed by the enclosing conditional trees.
fn mine_item(fptree: &FPTree, item: Item, min_count: u32, suffix: &[Item]) -> Vec<FrequentPattern> {
    let count = fptree.item_support(item);
    if count < min_count {
        return vec![];
    }
    let mut itemset: Vec<Item> = Vec::from(suffix);
    itemset.push(item);

    let conditional_tree = fptree.construct_conditional_tree(item);
    let mut result = fp_growth(&conditional_tree, min_count, &itemset);
    result.push(FrequentPattern {
        items: itemset,
        count,
    });
    result
}

pub fn fp_growth(fptree: &FPTree, min_count: u32, suffix: &[Item]) -> Vec<FrequentPattern> {
    // Get list of items in the tree which are above the minimum support
    // threshold.
    let items: Vec<Item> = fptree.item_count().items_with_count_at_least(min_count);
    items
        .iter()
        .flat_map(|&item| mine_item(fptree, item, min_count, suffix))
        .collect()
}

/// Builds the initial tree from `dataset`. Items below `min_count` are left
/// out, and the rest are renamed to their frequency rank (0 = most
/// frequent, ties broken by original index). Returns the tree and the
/// rank -> original item mapping.
pub fn build_tree(dataset: &Dataset, min_count: u32) -> (FPTree, Vec<Item>) {
    let item_count = dataset.column_sums();
    let mut ranked: Vec<Item> = item_count.items_with_count_at_least(min_count);
    item_count.sort_descending(&mut ranked);

    let mut rank_of: Vec<Option<Item>> = vec![None; dataset.num_items()];
    for (rank, item) in ranked.iter().enumerate() {
        rank_of[item.as_index()] = Some(Item::with_id(rank as u32));
    }

    let mut fptree = FPTree::new(ranked.len());
    for row in dataset.rows() {
        let mut transaction: Vec<Item> = row.iter().filter_map(|i| rank_of[i]).collect();
        transaction.sort();
        if !transaction.is_empty() {
            fptree.insert(&transaction, 1);
        }
    }
    (fptree, ranked)
}

/// FPGrowth over `dataset`. Top-level items are mined in parallel; results
/// are mapped back to the dataset's item indices and grouped by size once
/// every worker has finished.
pub fn fp_growth_store(dataset: &Dataset, min_count: u32, cancel: &AtomicBool) -> Result<FrequentSetStore> {
    let (fptree, ranked) = build_tree(dataset, min_count);
    debug!(
        nodes = fptree.num_nodes(),
        frequent_items = ranked.len(),
        "built initial FPTree"
    );

    let items: Vec<Item> = fptree.item_count().items_with_count_at_least(min_count);
    let patterns: Vec<Vec<FrequentPattern>> = items
        .par_iter()
        .map(|&item| {
            if cancel.load(Ordering::Relaxed) {
                return Err(MiningError::Cancelled);
            }
            Ok(mine_item(&fptree, item, min_count, &[]))
        })
        .collect::<Result<Vec<Vec<FrequentPattern>>>>()?;

    let mut store = FrequentSetStore::new(dataset.num_items(), dataset.num_transactions());
    for pattern in patterns.into_iter().flatten() {
        let itemset = Itemset::from_indices(
            dataset.num_items(),
            pattern.items.iter().map(|rank| ranked[rank.as_index()].as_index()),
        );
        store.insert(itemset, pattern.count);
    }
    Ok(store)
}
