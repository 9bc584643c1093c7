//! Report engine
//!
//! Orchestrates one run: load every row into a [`TransactionStore`], build the
//! [`Report`], then write it. Loading finishes before anything is written, so a
//! malformed row never leaves a half-printed report behind.

use crate::core::{Report, ReportConfig};
use crate::io::{load_transactions, write_report};
use crate::types::ChallengeError;
use std::io::Write;
use std::path::Path;

/// Runs the full load, query and write pipeline
#[derive(Debug, Clone, Default)]
pub struct ChallengeEngine {
    config: ReportConfig,
    list_ids: bool,
}

impl ChallengeEngine {
    /// Create an engine with the given query parameters
    pub fn new(config: ReportConfig) -> Self {
        ChallengeEngine {
            config,
            list_ids: false,
        }
    }

    /// Also print the ids of suspicious transactions
    pub fn with_list_ids(mut self, list_ids: bool) -> Self {
        self.list_ids = list_ids;
        self
    }

    /// Query parameters in use
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Process the input file and write the report to `output`
    ///
    /// # Errors
    ///
    /// * `FileNotFound` / `IoError` if the input cannot be read
    /// * `MalformedRecord` for the first row that fails to parse
    /// * `IoError` if the report cannot be written
    pub fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ChallengeError> {
        let store = load_transactions(input_path)?;
        let report = Report::build(&store, &self.config);
        write_report(&report, self.list_ids, output)
    }
}
