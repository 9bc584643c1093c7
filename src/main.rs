//! CSV Challenge CLI
//!
//! Reads a transactions CSV and prints the answers to the fixed spending questions.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- path/to/transactions.csv
//! cargo run -- --list-ids
//! RUST_LOG=debug cargo run
//! ```
//!
//! With no arguments the program reads `./csv_challenge.csv`. Logs go to stderr,
//! the report goes to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed row, output failure)

use csv_challenge::cli;
use csv_challenge::{ChallengeEngine, ReportConfig};
use env_logger::Env;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    let engine = ChallengeEngine::new(ReportConfig::default()).with_list_ids(args.list_ids);

    let mut output = std::io::stdout().lock();
    if let Err(e) = engine.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
