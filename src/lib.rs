//! Ledger Pivot
//!
//! Pivot table aggregation over financial transaction lists.
//!
//! Pick a field for rows, one for columns and optionally a second one
//! nested inside the columns; the aggregator sums transaction amounts
//! into a dense grid with column totals.
//!
//! ```ignore
//! use ledger_pivot::aggregator::{aggregate, Field};
//!
//! let result = aggregate(&transactions, Field::Year, Field::Status, None);
//! ```
//!
//! This crate also provides the `ledger-pivot` CLI.

pub mod aggregator;
pub mod commands;
pub mod grouping;
pub mod output;
pub mod parser;
pub mod source;
pub mod utils;
