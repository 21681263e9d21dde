//! Aggregation of transactions into pivot grids.
//!
//! This module transforms a flat transaction list into:
//! - Sorted distinct axis values per grouping field
//! - One- or two-level column descriptors
//! - A dense, zero-filled grid of summed amounts with column totals

pub mod field;
pub mod pivot;

// Re-export main types and functions
pub use field::{AxisValue, Field};
pub use pivot::{aggregate, aggregate_grouping, ColumnDescriptor, ColumnKey, PivotResult};
