use clap::Parser;
use std::path::PathBuf;

/// Input file read when no path is given
pub const DEFAULT_INPUT: &str = "csv_challenge.csv";

/// Answer fixed spending questions about a CSV of transactions
#[derive(Parser, Debug)]
#[command(name = "csv-challenge")]
#[command(about = "Answer fixed spending questions about a CSV of transactions", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing transaction rows
    #[arg(
        value_name = "INPUT",
        default_value = DEFAULT_INPUT,
        help = "Path to the input CSV file"
    )]
    pub input_file: PathBuf,

    /// Print the ids of suspicious transactions under each vendor line
    #[arg(long = "list-ids", help = "List the ids of suspicious transactions")]
    pub list_ids: bool,
}
