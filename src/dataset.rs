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
use crate::item_counter::ItemCounter;
use crate::itemizer::Itemizer;
use crate::itemset::{Itemset, TidList};
use tracing::debug;

/// Boolean transaction x item incidence matrix. Each transaction is kept as
/// a row bitset over items, and each item as a column bitset over
/// transactions (its tid-list). Immutable once loaded.
#[derive(Clone, Debug)]
pub struct Dataset {
    itemizer: Itemizer,
    rows: Vec<Itemset>,
    columns: Vec<TidList>,
}

impl Dataset {
    /// Encodes `transactions` against `item_order`. Every label in a
    /// transaction must be present in `item_order`; repeated labels within
    /// one transaction collapse to a single set bit.
    pub fn load<S, T>(item_order: &[S], transactions: &[T]) -> Result<Dataset>
    where
        S: AsRef<str>,
        T: AsRef<[S]>,
    {
        let itemizer = Itemizer::from_order(item_order)?;
        let num_items = itemizer.len();
        let mut rows = Vec::with_capacity(transactions.len());
        for (tid, transaction) in transactions.iter().enumerate() {
            let mut row = Itemset::new(num_items);
            for label in transaction.as_ref() {
                let label = label.as_ref();
                match itemizer.id_of(label) {
                    Some(item) => row.insert(item.as_index()),
                    None => {
                        return Err(MiningError::UnknownItem {
                            item: label.to_owned(),
                            transaction: tid,
                        })
                    }
                }
            }
            rows.push(row);
        }
        debug!(
            transactions = rows.len(),
            items = num_items,
            "encoded dataset"
        );
        Ok(Dataset::with_itemizer(itemizer, rows))
    }

    /// Builds a dataset straight from encoded rows, labelling item `i` as
    /// the string `"i"`. Every row must be over `num_items` items.
    pub fn from_rows(num_items: usize, rows: Vec<Itemset>) -> Result<Dataset> {
        if let Some(transaction) = rows.iter().position(|row| row.universe() != num_items) {
            return Err(MiningError::RowWidthMismatch {
                transaction,
                width: rows[transaction].universe(),
                expected: num_items,
            });
        }
        let labels: Vec<String> = (0..num_items).map(|i| i.to_string()).collect();
        let itemizer = Itemizer::from_order(&labels)?;
        Ok(Dataset::with_itemizer(itemizer, rows))
    }

    fn with_itemizer(itemizer: Itemizer, rows: Vec<Itemset>) -> Dataset {
        let mut columns = vec![TidList::new(rows.len()); itemizer.len()];
        for (tid, row) in rows.iter().enumerate() {
            for item in row.iter() {
                columns[item].insert(tid);
            }
        }
        Dataset {
            itemizer,
            rows,
            columns,
        }
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    pub fn num_items(&self) -> usize {
        self.columns.len()
    }

    pub fn num_transactions(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Itemset] {
        &self.rows
    }

    /// Tid-list of `item`.
    pub fn column(&self, item: Item) -> &TidList {
        &self.columns[item.as_index()]
    }

    /// Number of transactions containing each item.
    pub fn column_sums(&self) -> ItemCounter {
        ItemCounter::with_counts(self.columns.iter().map(|c| c.count() as u32).collect())
    }

    /// Empty itemset over this dataset's item universe.
    pub fn empty_itemset(&self) -> Itemset {
        Itemset::new(self.num_items())
    }

    /// Support by row scan: number of rows that contain every item of
    /// `itemset`.
    pub fn support(&self, itemset: &Itemset) -> u32 {
        self.rows
            .iter()
            .filter(|row| itemset.is_subset_of(row))
            .count() as u32
    }

    /// Support by vertical intersection: AND the tid-lists of every item in
    /// `itemset` and count what survives.
    pub fn tidlist_support(&self, itemset: &Itemset) -> u32 {
        let mut items = itemset.iter();
        let mut tids = match items.next() {
            Some(first) => self.columns[first].clone(),
            None => return self.num_transactions() as u32,
        };
        for item in items {
            tids.intersect_with(&self.columns[item]);
            if tids.is_empty() {
                return 0;
            }
        }
        tids.count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;
    use crate::error::MiningError;
    use crate::item::Item;
    use crate::itemset::Itemset;

    fn itemset(dataset: &Dataset, labels: &[&str]) -> Itemset {
        let mut set = dataset.empty_itemset();
        for label in labels {
            set.insert(dataset.itemizer().id_of(label).unwrap().as_index());
        }
        set
    }

    #[test]
    fn test_support() {
        let item_order = vec![
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "x", "y", "z",
        ];
        let transactions = vec![
            vec!["a", "b", "c", "d", "e", "f"],
            vec!["g", "h", "i", "j", "k", "l"],
            vec!["z", "x"],
            vec!["z", "x"],
            vec!["z", "x", "y"],
            vec!["z", "x", "y", "i"],
        ];
        let dataset = Dataset::load(&item_order, &transactions).unwrap();
        assert_eq!(dataset.num_transactions(), 6);
        assert_eq!(dataset.num_items(), 15);

        let cases: Vec<(Vec<&str>, u32)> = vec![
            (vec!["a"], 1),
            (vec!["f"], 1),
            (vec!["i"], 2),
            (vec!["z"], 4),
            (vec!["x"], 4),
            (vec!["y"], 2),
            (vec!["x", "z"], 4),
            (vec!["x", "y", "z"], 2),
            (vec!["a", "z"], 0),
            (vec![], 6),
        ];
        for (labels, expected) in cases {
            let set = itemset(&dataset, &labels);
            assert_eq!(dataset.support(&set), expected, "{:?}", labels);
            assert_eq!(dataset.tidlist_support(&set), expected, "{:?}", labels);
        }

        let sums = dataset.column_sums();
        assert_eq!(sums.get(&dataset.itemizer().id_of("z").unwrap()), 4);
        assert_eq!(dataset.column(Item::with_id(0)).count(), 1);
    }

    #[test]
    fn test_duplicate_items_are_ored() {
        let dataset = Dataset::load(&["a", "b"], &[vec!["a", "a", "b"], vec!["b", "b"]]).unwrap();
        assert_eq!(dataset.rows()[0].count(), 2);
        assert_eq!(dataset.rows()[1].count(), 1);
        assert_eq!(dataset.column_sums().get(&Item::with_id(1)), 2);
    }

    #[test]
    fn test_unknown_item() {
        let result = Dataset::load(&["a", "b"], &[vec!["a"], vec!["b", "c"]]);
        match result {
            Err(MiningError::UnknownItem { item, transaction }) => {
                assert_eq!(item, "c");
                assert_eq!(transaction, 1);
            }
            other => panic!("expected UnknownItem, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_dataset() {
        let transactions: Vec<Vec<&str>> = vec![];
        let dataset = Dataset::load(&["a", "b"], &transactions).unwrap();
        assert_eq!(dataset.num_transactions(), 0);
        assert_eq!(dataset.support(&itemset(&dataset, &["a"])), 0);
        assert_eq!(dataset.tidlist_support(&itemset(&dataset, &["a"])), 0);
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            Itemset::from_indices(3, vec![0, 2]),
            Itemset::from_indices(3, vec![2]),
        ];
        let dataset = Dataset::from_rows(3, rows).unwrap();
        assert_eq!(dataset.itemizer().str_of(Item::with_id(2)), "2");
        assert_eq!(dataset.column_sums().get(&Item::with_id(2)), 2);

        let rows = vec![Itemset::from_indices(3, vec![0]), Itemset::from_indices(4, vec![3])];
        match Dataset::from_rows(3, rows) {
            Err(MiningError::RowWidthMismatch {
                transaction,
                width,
                expected,
            }) => assert_eq!((transaction, width, expected), (1, 4, 3)),
            other => panic!("expected RowWidthMismatch, got {:?}", other),
        }
    }
}
