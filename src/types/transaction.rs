//! Transaction-related types
//!
//! This module defines the typed transaction row that every query consumes.

use chrono::{DateTime, Utc};

/// Amount in minor currency units (cents)
///
/// Signed, refunds show up as negative amounts.
pub type Cents = i64;

/// Transaction identifier
///
/// Opaque string taken verbatim from the first CSV column. Uniqueness is not enforced.
pub type TransactionId = String;

/// A single parsed transaction row
///
/// Values are immutable once constructed. String fields are kept exactly as they
/// appear in the file; vendor and tag comparisons are case- and punctuation-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Row identifier from the file
    pub id: TransactionId,

    /// Financial institution name (e.g. "Wells Fargo")
    pub institution: String,

    /// Payment type (e.g. "Debit Card")
    pub payment_type: String,

    /// Amount in cents, truncated toward zero from the decimal string
    pub amount_cents: Cents,

    /// Currency code, carried through but not used by any query
    pub currency: String,

    /// Vendor name
    pub vendor: String,

    /// Space-delimited tags in file order; an empty column yields `[""]`
    pub tags: Vec<String>,

    /// Absolute instant of the transaction
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Whether `tag` appears in this transaction's tag list (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
