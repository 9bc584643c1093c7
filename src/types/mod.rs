//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: The parsed transaction row and its identifiers
//! - `error`: Error types for loading and reporting

pub mod error;
pub mod transaction;

pub use error::ChallengeError;
pub use transaction::{Cents, Transaction, TransactionId};
