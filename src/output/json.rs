//! JSON pivot report writer.
//!
//! Reports are the presentation-boundary form of a pivot result: row
//! values and column keys are rendered to text so the file can be read
//! without this crate.

use crate::aggregator::{AxisValue, ColumnDescriptor, PivotResult};
use crate::grouping::GroupingSelection;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Grouping the report was built with
    pub grouping: GroupingSelection,

    pub row_values: Vec<AxisValue>,

    pub primary_column_values: Vec<AxisValue>,

    /// `null` for single-level columns
    pub secondary_column_values: Option<Vec<AxisValue>>,

    /// Columns in display order
    pub columns: Vec<ColumnDescriptor>,

    /// row label -> column key -> amount
    pub cells: BTreeMap<String, BTreeMap<String, f64>>,

    /// column key -> amount
    pub column_totals: BTreeMap<String, f64>,

    pub grand_total: f64,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl PivotReport {
    /// Render a pivot result into report form
    pub fn new(result: &PivotResult, grouping: &GroupingSelection) -> Self {
        let cells: BTreeMap<String, BTreeMap<String, f64>> = result
            .cells
            .iter()
            .map(|(row, columns)| {
                let columns: BTreeMap<String, f64> = columns
                    .iter()
                    .map(|(key, amount)| (key.label(), *amount))
                    .collect();
                (row.to_string(), columns)
            })
            .collect();

        let column_totals: BTreeMap<String, f64> = result
            .column_totals
            .iter()
            .map(|(key, amount)| (key.label(), *amount))
            .collect();

        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            grouping: *grouping,
            row_values: result.row_values.clone(),
            primary_column_values: result.primary_column_values.clone(),
            secondary_column_values: result.secondary_column_values.clone(),
            columns: result.column_values.clone(),
            cells,
            column_totals,
            grand_total: result.grand_total(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &PivotReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a report to a pretty JSON string
pub fn report_to_string(report: &PivotReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<PivotReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let report: PivotReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} rows",
        report.version,
        report.row_values.len()
    );

    Ok(report)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
