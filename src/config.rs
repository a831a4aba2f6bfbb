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
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Apriori,
    Eclat,
    FpGrowth,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 3] {
        [Algorithm::Apriori, Algorithm::Eclat, Algorithm::FpGrowth]
    }
}

impl FromStr for Algorithm {
    type Err = MiningError;
    fn from_str(s: &str) -> Result<Algorithm> {
        match s.to_ascii_lowercase().as_str() {
            "apriori" => Ok(Algorithm::Apriori),
            "eclat" => Ok(Algorithm::Eclat),
            "fpgrowth" | "fp-growth" | "fptree" => Ok(Algorithm::FpGrowth),
            _ => Err(MiningError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Apriori => "apriori",
            Algorithm::Eclat => "eclat",
            Algorithm::FpGrowth => "fpgrowth",
        };
        write!(f, "{}", name)
    }
}

/// Thresholds for one mining run. Construct through `new` so the values
/// are validated before any mining starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MiningConfig {
    absolute_support: u32,
    confidence: f64,
    min_lift: Option<f64>,
    algorithm: Algorithm,
}

impl MiningConfig {
    pub fn new(absolute_support: u32, confidence: f64) -> Result<MiningConfig> {
        if absolute_support < 1 {
            return Err(MiningError::InvalidSupport(absolute_support));
        }
        // Written this way round so NaN is rejected too.
        if !(confidence > 0.0 && confidence <= 1.0) {
            return Err(MiningError::InvalidConfidence(confidence));
        }
        Ok(MiningConfig {
            absolute_support,
            confidence,
            min_lift: None,
            algorithm: Algorithm::FpGrowth,
        })
    }

    /// Converts a minimum support fraction into a transaction count,
    /// rounding up so that no itemset below the fraction qualifies.
    pub fn absolute_support_for(min_support: f64, num_transactions: usize) -> Result<u32> {
        if !(min_support > 0.0 && min_support <= 1.0) {
            return Err(MiningError::InvalidRelativeSupport(min_support));
        }
        let count = (min_support * num_transactions as f64).ceil() as u32;
        Ok(count.max(1))
    }

    pub fn with_min_lift(mut self, min_lift: f64) -> Result<MiningConfig> {
        if !(min_lift >= 0.0) || min_lift.is_infinite() {
            return Err(MiningError::InvalidLift(min_lift));
        }
        self.min_lift = Some(min_lift);
        Ok(self)
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> MiningConfig {
        self.algorithm = algorithm;
        self
    }

    pub fn absolute_support(&self) -> u32 {
        self.absolute_support
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn min_lift(&self) -> Option<f64> {
        self.min_lift
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}
