//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod pivot;
pub mod utils;

// Re-export main command functions
pub use pivot::{execute_pivot, resolve_grouping, run_pivot, validate_args, OutputFormat, PivotArgs};
pub use utils::{display_fields, display_version, validate_transactions_file};
