//! Aggregate transactions into a dense pivot grid.
//!
//! The grid is zero-filled: every (row value, column) pair is present even
//! when no transaction falls in that cell. Columns are either one level
//! (primary values) or two levels (primary x secondary, nested order).

use super::field::{AxisValue, Field};
use crate::grouping::GroupingSelection;
use crate::parser::Transaction;
use crate::utils::config::KEY_SEPARATOR;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Structured identity of one visible column.
///
/// Ordering is (primary, secondary), which matches descriptor order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnKey {
    pub primary: AxisValue,
    pub secondary: Option<AxisValue>,
}

impl ColumnKey {
    pub fn single(primary: impl Into<AxisValue>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
        }
    }

    pub fn nested(primary: impl Into<AxisValue>, secondary: impl Into<AxisValue>) -> Self {
        Self {
            primary: primary.into(),
            secondary: Some(secondary.into()),
        }
    }

    /// Column key of a transaction under the given column fields
    fn of(transaction: &Transaction, column: Field, secondary: Option<Field>) -> Self {
        Self {
            primary: column.value_of(transaction),
            secondary: secondary.map(|field| field.value_of(transaction)),
        }
    }

    /// Text form used at the presentation boundary, e.g. `invoice|paid`
    pub fn label(&self) -> String {
        match &self.secondary {
            Some(secondary) => format!("{}{}{}", self.primary, KEY_SEPARATOR, secondary),
            None => self.primary.to_string(),
        }
    }
}

/// One rendered column of the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Joined text key (`primary` or `primary|secondary`)
    pub key: String,

    pub primary: AxisValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<AxisValue>,
}

impl ColumnDescriptor {
    fn new(column_key: ColumnKey) -> Self {
        Self {
            key: column_key.label(),
            primary: column_key.primary,
            secondary: column_key.secondary,
        }
    }

    /// Structured key for grid lookups
    pub fn column_key(&self) -> ColumnKey {
        ColumnKey {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
        }
    }
}

/// Result of one aggregation pass
#[derive(Debug, Clone, PartialEq)]
pub struct PivotResult {
    /// Distinct row values, ascending
    pub row_values: Vec<AxisValue>,

    /// Distinct primary column values, ascending
    pub primary_column_values: Vec<AxisValue>,

    /// Distinct secondary column values, ascending; `None` when no secondary field
    pub secondary_column_values: Option<Vec<AxisValue>>,

    /// Visible columns in nested (primary, secondary) order
    pub column_values: Vec<ColumnDescriptor>,

    /// row value -> column -> summed amount, dense over both axes
    pub cells: BTreeMap<AxisValue, BTreeMap<ColumnKey, f64>>,

    /// column -> sum of that column over all rows
    pub column_totals: BTreeMap<ColumnKey, f64>,
}

impl PivotResult {
    pub fn cell(&self, row: &AxisValue, column: &ColumnKey) -> Option<f64> {
        self.cells.get(row).and_then(|columns| columns.get(column)).copied()
    }

    pub fn column_total(&self, column: &ColumnKey) -> Option<f64> {
        self.column_totals.get(column).copied()
    }

    /// Sum of one row across every column
    pub fn row_total(&self, row: &AxisValue) -> Option<f64> {
        self.cells.get(row).map(|columns| columns.values().sum())
    }

    pub fn grand_total(&self) -> f64 {
        self.column_totals.values().sum()
    }

    pub fn is_two_level(&self) -> bool {
        self.secondary_column_values.is_some()
    }

    /// Number of columns each primary header spans
    pub fn secondary_span(&self) -> usize {
        self.secondary_column_values
            .as_ref()
            .map_or(1, |values| values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_values.is_empty()
    }
}

/// Build the pivot grid for a set of transactions
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - Transactions to aggregate (may be empty)
/// * `row` - Field forming the rows
/// * `column` - Field forming the primary columns
/// * `secondary` - Optional field nested inside each primary column
///
/// # Returns
/// A dense grid with sorted axes and column totals
///
/// The fields are expected to be pairwise distinct; that is not checked here.
/// Use [`GroupingSelection::apply`] to maintain it.
pub fn aggregate(
    records: &[Transaction],
    row: Field,
    column: Field,
    secondary: Option<Field>,
) -> PivotResult {
    debug!(
        "Aggregating {} transactions: row={}, column={}, secondary={:?}",
        records.len(),
        row,
        column,
        secondary.map(Field::name)
    );

    let row_values = distinct_values(records, row);
    let primary_column_values = distinct_values(records, column);
    let secondary_column_values = secondary.map(|field| distinct_values(records, field));

    let column_keys = build_column_keys(&primary_column_values, secondary_column_values.as_deref());

    // Every cell exists before any amount is added
    let mut cells: BTreeMap<AxisValue, BTreeMap<ColumnKey, f64>> = row_values
        .iter()
        .map(|row_value| {
            let columns: BTreeMap<ColumnKey, f64> =
                column_keys.iter().map(|key| (key.clone(), 0.0)).collect();
            (row_value.clone(), columns)
        })
        .collect();

    for transaction in records {
        let row_value = row.value_of(transaction);
        let column_key = ColumnKey::of(transaction, column, secondary);

        if let Some(cell) = cells
            .get_mut(&row_value)
            .and_then(|columns| columns.get_mut(&column_key))
        {
            *cell += transaction.amount;
        }
    }

    // Totals come from the grid, never from a second scan of the records
    let column_totals: BTreeMap<ColumnKey, f64> = column_keys
        .iter()
        .map(|key| {
            let total = row_values
                .iter()
                .filter_map(|row_value| cells.get(row_value).and_then(|columns| columns.get(key)))
                .sum::<f64>();
            (key.clone(), total)
        })
        .collect();

    let column_values: Vec<ColumnDescriptor> =
        column_keys.into_iter().map(ColumnDescriptor::new).collect();

    debug!(
        "Built {} x {} pivot grid",
        row_values.len(),
        column_values.len()
    );

    PivotResult {
        row_values,
        primary_column_values,
        secondary_column_values,
        column_values,
        cells,
        column_totals,
    }
}

/// Aggregate with the fields of a grouping selection
///
/// **Public** - convenience wrapper over [`aggregate`]
pub fn aggregate_grouping(records: &[Transaction], grouping: &GroupingSelection) -> PivotResult {
    aggregate(records, grouping.row, grouping.column, grouping.secondary_column)
}

/// Sorted distinct values of a field
///
/// **Private** - one scan per axis
fn distinct_values(records: &[Transaction], field: Field) -> Vec<AxisValue> {
    records
        .iter()
        .map(|transaction| field.value_of(transaction))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Column keys in nested order: outer primary, inner secondary
///
/// **Private** - internal helper for aggregate
fn build_column_keys(primary: &[AxisValue], secondary: Option<&[AxisValue]>) -> Vec<ColumnKey> {
    match secondary {
        None => primary.iter().cloned().map(ColumnKey::single).collect(),
        Some(secondary) => primary
            .iter()
            .flat_map(|p| {
                secondary.iter().map(move |s| ColumnKey {
                    primary: p.clone(),
                    secondary: Some(s.clone()),
                })
            })
            .collect(),
    }
}
