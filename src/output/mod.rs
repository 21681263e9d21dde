//! Output writers for pivot results.
//!
//! This module handles presenting aggregated data:
//! - Amount and currency formatting
//! - Text tables with one- or two-level column headers
//! - JSON reports

pub mod format;
pub mod json;
pub mod table;

// Re-export main functions
pub use format::{format_amount, format_currency};
pub use json::{read_report, report_to_string, write_report, PivotReport};
pub use table::render_table;
