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

mod command_line_args;

use arm_miner::{
    generate_rules, mine, Algorithm, Dataset, MiningConfig, Result, Rule, TransactionReader,
};
use command_line_args::{parse_args_or_exit, Arguments};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;
use tracing::{error, info};

fn log_level(name: &str) -> tracing::Level {
    match name.to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

fn mine_rules(args: &Arguments) -> Result<()> {
    let start = Instant::now();
    info!("Mining data set: {}", args.input_file_path);

    let timer = Instant::now();
    let transactions: Vec<Vec<String>> =
        TransactionReader::open(&args.input_file_path)?.collect::<Result<_>>()?;
    // Items are numbered in label order, so output is stable across runs.
    let item_order: Vec<String> = transactions
        .iter()
        .flatten()
        .cloned()
        .sorted()
        .dedup()
        .collect();
    let dataset = Dataset::load(&item_order, &transactions)?;
    info!(
        "Loaded {} transactions over {} items in {} ms.",
        dataset.num_transactions(),
        dataset.num_items(),
        timer.elapsed().as_millis()
    );

    let min_count = match (args.min_count, args.min_support) {
        (Some(count), _) => count,
        (None, Some(fraction)) => {
            MiningConfig::absolute_support_for(fraction, dataset.num_transactions())?
        }
        (None, None) => unreachable!("checked while parsing arguments"),
    };
    let algorithm: Algorithm = args.algorithm.parse()?;
    let mut config = MiningConfig::new(min_count, args.min_confidence)?.with_algorithm(algorithm);
    if let Some(min_lift) = args.min_lift {
        config = config.with_min_lift(min_lift)?;
    }

    let store = mine(&dataset, &config)?;

    let timer = Instant::now();
    let mut rules: Vec<Rule> = generate_rules(&store, &config).into_rules();
    rules.sort_by_key(|rule| Reverse(OrderedFloat(rule.confidence)));
    info!(
        "Generated {} rules in {} ms.",
        rules.len(),
        timer.elapsed().as_millis()
    );

    {
        let mut output = BufWriter::new(File::create(&args.output_rules_path)?);
        writeln!(output, "Antecedent->Consequent,Confidence,Lift,Support")?;
        for rule in &rules {
            writeln!(
                output,
                "{},{},{},{}",
                rule.to_string(dataset.itemizer()),
                rule.confidence(),
                rule.lift(),
                rule.relative_support(dataset.num_transactions())
            )?;
        }
        output.flush()?;
    }

    info!("Total runtime: {} ms", start.elapsed().as_millis());
    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();
    tracing_subscriber::fmt()
        .with_max_level(log_level(&arguments.log_level))
        .init();

    if let Err(err) = mine_rules(&arguments) {
        error!("{}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
