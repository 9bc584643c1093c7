//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row to transaction conversion)
//! - `csv_reader` - CSV reader with iterator interface and the eager loader
//! - `report_writer` - Plain-text report output

pub mod csv_format;
pub mod csv_reader;
pub mod report_writer;

pub use csv_format::{parse_fields, parse_record, CsvRecord};
pub use csv_reader::{load_transactions, TransactionReader};
pub use report_writer::write_report;
