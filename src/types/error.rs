//! Error types for the CSV challenge report
//!
//! This module defines all error types that can occur while loading the input
//! file and writing the report. Every error is fatal: the run aborts instead
//! of skipping bad rows.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, broken output pipe
//! - **Record Errors**: Wrong field count, bad amount, bad timestamp, broken CSV row

use thiserror::Error;

/// Main error type for the report
///
/// Each variant includes enough context to point the user at the failing
/// path or row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChallengeError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing the report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A data row could not be turned into a transaction
    ///
    /// `row_index` is the 1-based position among data rows (the header is not counted).
    #[error("Malformed record at row {row_index} [{}]: {reason}", raw_fields.join(", "))]
    MalformedRecord {
        /// 1-based data row position
        row_index: usize,
        /// Raw field values as read from the file
        raw_fields: Vec<String>,
        /// What went wrong
        reason: String,
    },
}

// Conversion from io::Error to ChallengeError
impl From<std::io::Error> for ChallengeError {
    fn from(error: std::io::Error) -> Self {
        ChallengeError::IoError {
            message: error.to_string(),
        }
    }
}

impl ChallengeError {
    /// Create a MalformedRecord error
    pub fn malformed_record(row_index: usize, raw_fields: &[String], reason: &str) -> Self {
        ChallengeError::MalformedRecord {
            row_index,
            raw_fields: raw_fields.to_vec(),
            reason: reason.to_string(),
        }
    }

    /// Map a CSV reader failure hit while reading data row `row_index`
    ///
    /// Underlying I/O failures (including ones raised while the header is read)
    /// are `IoError` and carry no row. Anything else is a `MalformedRecord`; the
    /// reader produced no fields for the row, so none are attached.
    pub fn from_csv(row_index: usize, error: &csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_error) => ChallengeError::IoError {
                message: io_error.to_string(),
            },
            _ => ChallengeError::MalformedRecord {
                row_index,
                raw_fields: Vec::new(),
                reason: format!("CSV parse error: {}", error),
            },
        }
    }
}
