//! Transaction record definitions.
//!
//! `TransactionDto` is the wire shape served by a record source, where
//! `amount` and `year` arrive as text. `Transaction` is the parsed form
//! the aggregator consumes.

use serde::{Deserialize, Serialize};

/// Transaction as serialized by the record source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDto {
    pub transaction_type: String,

    pub transaction_number: String,

    /// Signed decimal amount, as text
    pub amount: String,

    pub status: String,

    /// Four digit year, as text
    pub year: String,
}

/// Parsed transaction record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Category, e.g. `invoice` or `bill`
    pub transaction_type: String,

    /// Identifier, not used for grouping
    pub transaction_number: String,

    /// Signed amount summed into pivot cells
    pub amount: f64,

    /// Category, e.g. `paid` or `unpaid`
    pub status: String,

    pub year: i32,
}
