//! In-memory transaction store
//!
//! This module provides the TransactionStore component: the ordered, read-only
//! sequence of every transaction parsed during a run. It is built once after the
//! whole file has been read and is only ever borrowed by the queries afterwards.

use crate::types::Transaction;

/// Read-only ordered sequence of transactions
///
/// Preserves file order. There is no mutation API; a new store is built per run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Build a store from already-parsed transactions, keeping their order
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        TransactionStore { transactions }
    }

    /// Iterate over transactions in file order
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Borrow the underlying slice
    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl FromIterator<Transaction> for TransactionStore {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        TransactionStore::from_transactions(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TransactionStore {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
