//! CSV reader with iterator interface
//!
//! Provides an iterator over parsed transactions from a CSV source and the
//! eager [`load_transactions`] entry point that materializes the whole file into
//! a [`TransactionStore`]. Delegates row conversion to the csv_format module.
//!
//! # Error Handling
//!
//! - A missing input file is reported as `FileNotFound` from `from_path()`
//! - Any other open failure is an `IoError`
//! - Each row that fails to parse is yielded as `MalformedRecord`; the loader
//!   stops at the first one
//! - Rows are read as raw bytes, so a row with invalid UTF-8 still reports its
//!   field values (lossily decoded). The header row is discarded unread.

use crate::core::TransactionStore;
use crate::io::csv_format::parse_record;
use crate::types::{ChallengeError, Transaction};
use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use log::info;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// CSV transaction reader
///
/// Skips the header row and yields one parsed transaction per data row in file
/// order. Quoted fields containing commas are handled by the underlying reader.
#[derive(Debug)]
pub struct TransactionReader<R> {
    reader: csv::Reader<R>,
    record: ByteRecord,
    row_index: usize,
}

impl TransactionReader<File> {
    /// Open a CSV file for reading
    ///
    /// # Errors
    ///
    /// * `ChallengeError::FileNotFound` if nothing exists at `path`
    /// * `ChallengeError::IoError` for any other open failure
    pub fn from_path(path: &Path) -> Result<Self, ChallengeError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ChallengeError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ChallengeError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> TransactionReader<R> {
    /// Wrap any byte source
    ///
    /// The CSV reader is configured to:
    /// - Treat the first row as a header and discard it
    /// - Keep fields untrimmed so vendor names compare exactly
    /// - Allow ragged rows so the field count is checked per row
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::None)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        Self {
            reader,
            record: ByteRecord::new(),
            row_index: 0,
        }
    }
}

impl<R: Read> Iterator for TransactionReader<R> {
    type Item = Result<Transaction, ChallengeError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                self.row_index += 1;
                Some(self.parse_current())
            }
            Err(e) => {
                self.row_index += 1;
                Some(Err(ChallengeError::from_csv(self.row_index, &e)))
            }
        }
    }
}

impl<R> TransactionReader<R> {
    fn parse_current(&self) -> Result<Transaction, ChallengeError> {
        match StringRecord::from_byte_record(self.record.clone()) {
            Ok(record) => parse_record(self.row_index, &record),
            Err(e) => {
                let raw_fields: Vec<String> = self
                    .record
                    .iter()
                    .map(|field| String::from_utf8_lossy(field).into_owned())
                    .collect();
                Err(ChallengeError::malformed_record(
                    self.row_index,
                    &raw_fields,
                    &format!("invalid UTF-8: {}", e.utf8_error()),
                ))
            }
        }
    }
}

/// Load every data row of a CSV file into a transaction store
///
/// Parsing is all-or-nothing: the first malformed row aborts the load. The
/// file is closed on every return path.
pub fn load_transactions(path: &Path) -> Result<TransactionStore, ChallengeError> {
    let reader = TransactionReader::from_path(path)?;
    let transactions = reader.collect::<Result<Vec<_>, _>>()?;

    info!(
        "Loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );

    Ok(TransactionStore::from_transactions(transactions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "id,institution,paymentType,amount,currency,vendor,tags,date\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_load_transactions_preserves_file_order() {
        let content = format!(
            "{}\
            a,Chase,Credit Card,1.00,USD,V1,food,2012-01-01T00:00:00Z\n\
            b,Chase,Credit Card,2.00,USD,V2,food,2012-01-02T00:00:00Z\n\
            c,Chase,Credit Card,3.00,USD,V1,food,2012-01-03T00:00:00Z\n",
            HEADER
        );
        let file = create_temp_csv(&content);

        let store = load_transactions(file.path()).unwrap();
        let ids: Vec<&str> = store.iter().map(|tx| tx.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_load_transactions_handles_quoted_commas() {
        let content = format!(
            "{}t1,Wells Fargo,Debit Card,4.50,USD,\"Whole Foods, Inc.\",\"food personal\",{}\n",
            HEADER, "2012-01-01T00:00:00Z"
        );
        let file = create_temp_csv(&content);

        let store = load_transactions(file.path()).unwrap();
        let tx = &store.as_slice()[0];

        assert_eq!(tx.vendor, "Whole Foods, Inc.");
        assert_eq!(tx.tags, vec!["food".to_string(), "personal".to_string()]);
        assert_eq!(tx.amount_cents, 450);
    }

    #[test]
    fn test_load_transactions_header_only_is_empty() {
        let file = create_temp_csv(HEADER);

        let store = load_transactions(file.path()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_transactions_missing_file() {
        let result = load_transactions(Path::new("does/not/exist.csv"));

        assert_eq!(
            result.unwrap_err(),
            ChallengeError::FileNotFound {
                path: "does/not/exist.csv".to_string()
            }
        );
    }

    #[test]
    fn test_load_transactions_fails_on_first_malformed_row() {
        let content = format!(
            "{}\
            a,Chase,Credit Card,1.00,USD,V1,food,2012-01-01T00:00:00Z\n\
            b,Chase,Credit Card,oops,USD,V2,food,2012-01-02T00:00:00Z\n\
            c,Chase,Credit Card,3.00,USD,V1,food,not-a-date\n",
            HEADER
        );
        let file = create_temp_csv(&content);

        match load_transactions(file.path()).unwrap_err() {
            ChallengeError::MalformedRecord {
                row_index,
                raw_fields,
                ..
            } => {
                assert_eq!(row_index, 2);
                assert_eq!(raw_fields[0], "b");
                assert_eq!(raw_fields[3], "oops");
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_reports_short_rows() {
        let content = format!("{}a,Chase,Credit Card,1.00\n", HEADER);

        let results: Vec<_> = TransactionReader::from_reader(content.as_bytes()).collect();

        assert_eq!(results.len(), 1);
        assert!(matches!(
            &results[0],
            Err(ChallengeError::MalformedRecord { row_index: 1, reason, .. })
                if reason.contains("expected 8 fields, found 4")
        ));
    }

    #[test]
    fn test_reader_keeps_whitespace_in_fields() {
        let content = format!(
            "{}a,Chase,Credit Card,1.00,USD, RICKHOUSE ,food,2012-01-01T00:00:00Z\n",
            HEADER
        );

        let tx = TransactionReader::from_reader(content.as_bytes())
            .next()
            .unwrap()
            .unwrap();

        assert_eq!(tx.vendor, " RICKHOUSE ");
    }

    #[test]
    fn test_reader_keeps_raw_fields_of_invalid_utf8_row() {
        let mut content = HEADER.as_bytes().to_vec();
        content.extend_from_slice(
            b"a,Chase,Credit Card,1.00,USD,Caf\xe9,food,2012-01-01T00:00:00Z\n",
        );

        let results: Vec<_> = TransactionReader::from_reader(content.as_slice()).collect();

        match &results[..] {
            [Err(ChallengeError::MalformedRecord {
                row_index,
                raw_fields,
                reason,
            })] => {
                assert_eq!(*row_index, 1);
                assert_eq!(raw_fields.len(), 8);
                assert_eq!(raw_fields[0], "a");
                assert_eq!(raw_fields[5], "Caf\u{FFFD}");
                assert!(reason.contains("invalid UTF-8"), "unexpected reason: {}", reason);
            }
            other => panic!("Expected one MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_ignores_invalid_utf8_in_header() {
        let mut content =
            b"id,institution,payment\xffType,amount,currency,vendor,tags,date\n".to_vec();
        content.extend_from_slice(
            b"a,Chase,Credit Card,1.00,USD,Cafe,food,2012-01-01T00:00:00Z\n",
        );

        let results: Vec<_> = TransactionReader::from_reader(content.as_slice()).collect();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].as_ref().unwrap().vendor, "Cafe");
    }
}
