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

use crate::apriori::apriori;
use crate::config::{Algorithm, MiningConfig};
use crate::dataset::Dataset;
use crate::eclat::eclat;
use crate::error::Result;
use crate::fptree::fp_growth_store;
use crate::store::FrequentSetStore;
use std::sync::atomic::AtomicBool;
use std::time::Instant;
use tracing::info;

/// Mines the frequent itemsets of `dataset` with the configured algorithm.
pub fn mine(dataset: &Dataset, config: &MiningConfig) -> Result<FrequentSetStore> {
    mine_with_cancel(dataset, config, &AtomicBool::new(false))
}

/// As `mine`, but gives up with `MiningError::Cancelled` once `cancel` is
/// set. The flag is polled between levels (Apriori, Eclat) and before each
/// top-level item (FPGrowth).
pub fn mine_with_cancel(
    dataset: &Dataset,
    config: &MiningConfig,
    cancel: &AtomicBool,
) -> Result<FrequentSetStore> {
    let timer = Instant::now();
    let min_count = config.absolute_support();
    let store = match config.algorithm() {
        Algorithm::Apriori => apriori(dataset, min_count, cancel)?,
        Algorithm::Eclat => eclat(dataset, min_count, cancel)?,
        Algorithm::FpGrowth => fp_growth_store(dataset, min_count, cancel)?,
    };
    info!(
        algorithm = %config.algorithm(),
        min_count,
        itemsets = store.len(),
        max_size = store.max_size(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "mined frequent itemsets"
    );
    Ok(store)
}
