//! Transaction parsing and record definitions.
//!
//! This module handles:
//! - The wire format served by record sources
//! - Converting text amounts and years into typed values

pub mod schema;
pub mod transaction;

// Re-export main types
pub use schema::{Transaction, TransactionDto};
pub use transaction::{parse_transaction, parse_transactions, parse_transactions_json};
