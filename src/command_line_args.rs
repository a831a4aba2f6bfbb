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

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Store, StoreOption};

pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: String,
    pub min_support: Option<f64>,
    pub min_count: Option<u32>,
    pub min_confidence: f64,
    pub min_lift: Option<f64>,
    pub algorithm: String,
    pub log_level: String,
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args: Arguments = Arguments {
        input_file_path: String::new(),
        output_rules_path: String::new(),
        min_support: None,
        min_count: None,
        min_confidence: 0.0,
        min_lift: None,
        algorithm: String::from("fpgrowth"),
        log_level: String::from("info"),
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Frequent itemset and association rule miner.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset, one comma separated transaction per line.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store output rules. \
                 Format: antecedent -> consequent, confidence, lift, support.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                StoreOption,
                "Minimum itemset support threshold, in range (0,1].",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.min_count)
            .add_option(
                &["--min-count"],
                StoreOption,
                "Minimum number of transactions an itemset must appear in. \
                 Alternative to --min-support.",
            )
            .metavar("count");

        parser
            .refer(&mut args.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range (0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut args.min_lift)
            .add_option(
                &["--min-lift"],
                StoreOption,
                "Minimum rule lift threshold.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.algorithm)
            .add_option(
                &["--algorithm"],
                Store,
                "Mining algorithm: apriori, eclat or fpgrowth (default).",
            )
            .metavar("name");

        parser
            .refer(&mut args.log_level)
            .add_option(
                &["--log-level"],
                Store,
                "Log level: trace, debug, info (default), warn or error.",
            )
            .metavar("level");

        if env::args().count() == 1 {
            parser.print_help("Usage:", &mut io::stderr()).unwrap_or(());
            process::exit(1);
        }

        if let Err(err) = parser.parse_args() {
            process::exit(err);
        }
    }

    match (args.min_support, args.min_count) {
        (None, None) => {
            eprintln!("One of --min-support or --min-count is required");
            process::exit(1);
        }
        (Some(_), Some(_)) => {
            eprintln!("Only one of --min-support and --min-count may be given");
            process::exit(1);
        }
        _ => {}
    }

    args
}
