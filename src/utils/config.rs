//! Configuration and constants for the CLI.

use crate::aggregator::Field;
use std::time::Duration;

/// Default timeout for record source requests
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Joins primary and secondary values in rendered column labels
pub const KEY_SEPARATOR: &str = "|";

/// Currency glyph printed in front of every amount
pub const CURRENCY_SYMBOL: &str = "$";

/// Label used for the totals footer and totals column
pub const TOTAL_LABEL: &str = "Total";

// Initial grouping selection
pub const DEFAULT_ROW_FIELD: Field = Field::Year;
pub const DEFAULT_COLUMN_FIELD: Field = Field::Status;

/// Environment variable consulted when `--source` is omitted
pub const SOURCE_ENV_VAR: &str = "LEDGER_PIVOT_SOURCE";

/// Shown instead of a table when the record source fails
pub const DATA_UNAVAILABLE_MESSAGE: &str = "Could not fetch the data";
