//! CSV format handling for transaction rows
//!
//! This module centralizes all input format concerns, providing:
//! - CsvRecord structure for positional deserialization of the 8 columns
//! - Field parsers for amounts, tags and timestamps
//! - Conversion from a raw CSV row to a typed [`Transaction`]
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Cents, ChallengeError, Transaction};
use chrono::{DateTime, Utc};
use csv::StringRecord;
use serde::Deserialize;

/// Number of columns every data row must carry
pub const FIELD_COUNT: usize = 8;

/// Largest accepted amount magnitude, in cents ($10 billion)
///
/// Keeps every i64 total below overflow for up to ~9.2 million rows at this
/// magnitude, and every i128 sum of squares far below overflow.
pub const MAX_AMOUNT_CENTS: Cents = 1_000_000_000_000;

/// CSV record structure for deserialization
///
/// Column order: id, institution, paymentType, amount, currency, vendor, tags, date.
/// Rows are deserialized by position, the header row is never consulted.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: String,
    pub institution: String,
    pub payment_type: String,
    pub amount: String,
    pub currency: String,
    pub vendor: String,
    pub tags: String,
    pub date: String,
}

/// Parse a decimal amount string into cents
///
/// The value is parsed as a binary float, multiplied by 100 and truncated toward
/// zero. Truncation means inputs such as `1.005` land on `100`, not `101`.
/// Surrounding whitespace is ignored; NaN, infinities and amounts above
/// [`MAX_AMOUNT_CENTS`] in magnitude are rejected.
pub fn parse_amount_cents(amount: &str) -> Result<Cents, String> {
    let value: f64 = amount
        .trim()
        .parse()
        .map_err(|_| format!("Invalid amount '{}'", amount))?;

    if !value.is_finite() {
        return Err(format!("Invalid amount '{}'", amount));
    }

    let cents = (value * 100.0).trunc();
    if cents.abs() > MAX_AMOUNT_CENTS as f64 {
        return Err(format!("Amount '{}' out of range", amount));
    }

    Ok(cents as Cents)
}

/// Split a tag column on single spaces
///
/// No filtering happens: an empty column yields one empty tag and repeated
/// spaces yield empty tags in between.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(' ').map(str::to_string).collect()
}

/// Parse an ISO-8601 instant such as `2008-09-15T15:53:00Z`
///
/// Explicit offsets (`2012-12-05T19:00:00-08:00`) are accepted and normalised to UTC.
pub fn parse_timestamp(date: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(date)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid timestamp '{}': {}", date, e))
}

/// Convert a CsvRecord to a Transaction
///
/// # Returns
///
/// Result containing either:
/// - Ok(Transaction) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Transaction, String> {
    let amount_cents = parse_amount_cents(&csv_record.amount)?;
    let timestamp = parse_timestamp(&csv_record.date)?;
    let tags = parse_tags(&csv_record.tags);

    Ok(Transaction {
        id: csv_record.id,
        institution: csv_record.institution,
        payment_type: csv_record.payment_type,
        amount_cents,
        currency: csv_record.currency,
        vendor: csv_record.vendor,
        tags,
        timestamp,
    })
}

/// Parse one raw CSV row into a Transaction
///
/// # Arguments
///
/// * `row_index` - 1-based data row position, used for error reporting
/// * `record` - The raw row as read by the CSV reader
///
/// # Errors
///
/// Returns `ChallengeError::MalformedRecord` carrying the row index and the raw
/// field values when the row does not have exactly 8 fields or a field fails to
/// convert.
pub fn parse_record(
    row_index: usize,
    record: &StringRecord,
) -> Result<Transaction, ChallengeError> {
    let raw_fields: Vec<String> = record.iter().map(str::to_string).collect();

    if record.len() != FIELD_COUNT {
        return Err(ChallengeError::malformed_record(
            row_index,
            &raw_fields,
            &format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        ));
    }

    let csv_record: CsvRecord = record
        .deserialize(None)
        .map_err(|e| ChallengeError::malformed_record(row_index, &raw_fields, &e.to_string()))?;

    convert_csv_record(csv_record)
        .map_err(|reason| ChallengeError::malformed_record(row_index, &raw_fields, &reason))
}

/// Parse a row given as plain string fields
///
/// Convenience wrapper over [`parse_record`] for callers that do not hold a
/// `StringRecord`.
pub fn parse_fields(row_index: usize, fields: &[&str]) -> Result<Transaction, ChallengeError> {
    parse_record(row_index, &StringRecord::from(fields.to_vec()))
}
