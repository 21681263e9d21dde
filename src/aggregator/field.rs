//! Grouping fields and the typed values observed along each axis.

use crate::parser::Transaction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A transaction attribute that can partition the pivot grid.
///
/// `amount` is deliberately absent: it is the summed value, never an axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    #[value(name = "transaction_type")]
    TransactionType,
    #[value(name = "status")]
    Status,
    #[value(name = "year")]
    Year,
}

impl Field {
    /// Every grouping field, in selector order
    pub const ALL: [Field; 3] = [Field::TransactionType, Field::Status, Field::Year];

    /// Wire / query-string name of the field
    pub fn name(self) -> &'static str {
        match self {
            Field::TransactionType => "transaction_type",
            Field::Status => "status",
            Field::Year => "year",
        }
    }

    /// Whether values of this field sort and align as numbers
    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Year)
    }

    /// Read this field off a transaction
    pub fn value_of(self, transaction: &Transaction) -> AxisValue {
        match self {
            Field::TransactionType => AxisValue::Text(transaction.transaction_type.clone()),
            Field::Status => AxisValue::Text(transaction.status.clone()),
            Field::Year => AxisValue::Year(transaction.year),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A distinct value seen for a field.
///
/// All values along one axis share a variant, so the derived ordering is
/// lexicographic for categories and numeric for years.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Year(i32),
    Text(String),
}

impl AxisValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, AxisValue::Year(_))
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisValue::Year(year) => write!(f, "{}", year),
            AxisValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<i32> for AxisValue {
    fn from(year: i32) -> Self {
        AxisValue::Year(year)
    }
}

impl From<&str> for AxisValue {
    fn from(text: &str) -> Self {
        AxisValue::Text(text.to_string())
    }
}

impl From<String> for AxisValue {
    fn from(text: String) -> Self {
        AxisValue::Text(text)
    }
}
