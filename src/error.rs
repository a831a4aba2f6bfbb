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

use thiserror::Error;

/// Errors raised while configuring, encoding or mining a dataset.
#[derive(Debug, Error)]
pub enum MiningError {
    #[error("absolute support must be at least 1, got {0}")]
    InvalidSupport(u32),

    #[error("minimum support fraction must be in range (0,1], got {0}")]
    InvalidRelativeSupport(f64),

    #[error("minimum confidence must be in range (0,1], got {0}")]
    InvalidConfidence(f64),

    #[error("minimum lift must be a non-negative number, got {0}")]
    InvalidLift(f64),

    #[error("item '{item}' in transaction {transaction} is not in the item order")]
    UnknownItem { item: String, transaction: usize },

    #[error("transaction {transaction} is over {width} items, expected {expected}")]
    RowWidthMismatch {
        transaction: usize,
        width: usize,
        expected: usize,
    },

    #[error("item '{0}' appears more than once in the item order")]
    DuplicateItem(String),

    #[error("unknown algorithm '{0}', expected one of: apriori, eclat, fpgrowth")]
    UnknownAlgorithm(String),

    #[error("mining was cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MiningError>;
