//! CSV Challenge Report Library
//! # Overview
//!
//! This library loads a CSV file of card transactions into memory and answers a
//! fixed set of spending questions about it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, ChallengeError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::transaction_store`] - Read-only in-memory transaction sequence
//!   - [`core::queries`] - Aggregate queries and per-vendor statistics
//!   - [`core::report`] - Query parameters and the assembled report
//!   - [`core::engine`] - Load, query and write orchestration
//! - [`io`] - Row parsing, file loading and report output
//!
//! # Questions
//!
//! - **Institution spend**: total spent with Wells Fargo debit cards
//! - **Unique vendors**: how many distinct vendors appear, and which
//! - **Tagged spend**: total of transactions tagged `food` or `personal`
//! - **Date window**: total strictly between 2012-01-23 and 2012-01-26 (UTC)
//! - **Bar nights**: December evenings in Los Angeles with two or more distinct bars
//! - **Suspicious spends**: per vendor, transactions above `mean + 1.75 * stdev`
//!
//! # Amounts
//!
//! Amounts are stored as signed cents, truncated toward zero from the decimal
//! column.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{ChallengeEngine, Report, ReportConfig, TransactionStore};
pub use io::{load_transactions, write_report};
pub use types::{Cents, ChallengeError, Transaction, TransactionId};
