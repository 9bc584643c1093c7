//! Core business logic module
//!
//! This module contains the report components:
//! - `transaction_store` - Read-only in-memory transaction sequence
//! - `queries` - The aggregate queries and per-vendor statistics
//! - `report` - Query parameters and the assembled report
//! - `engine` - Load, query and write orchestration

pub mod engine;
pub mod queries;
pub mod report;
pub mod transaction_store;

pub use engine::ChallengeEngine;
pub use report::{Report, ReportConfig};
pub use transaction_store::TransactionStore;
