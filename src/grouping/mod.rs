//! Grouping selection state.
//!
//! Keeps the row, column and secondary column fields pairwise distinct
//! while the user changes them, and persists the selection as a query
//! string so it can be shared and restored.

pub mod selection;

pub use selection::{GroupingAction, GroupingSelection};
