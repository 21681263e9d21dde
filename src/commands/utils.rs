use crate::aggregator::Field;
use crate::grouping::GroupingSelection;
use crate::parser::parse_transactions_json;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// Validate a transactions JSON file
pub fn validate_transactions_file(file_path: &Path) -> Result<()> {
    println!("Validating transactions: {}", file_path.display());

    let json = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let transactions = parse_transactions_json(&json)?;

    println!("✓ Valid transactions JSON");
    println!("  Transactions: {}", transactions.len());
    for field in Field::ALL {
        let distinct: BTreeSet<_> = transactions.iter().map(|t| field.value_of(t)).collect();
        println!("  Distinct {}: {}", field, distinct.len());
    }
    let total: f64 = transactions.iter().map(|t| t.amount).sum();
    println!("  Total amount: {:.2}", total);

    Ok(())
}

/// List the fields each selector offers for a selection
pub fn display_fields(grouping: &GroupingSelection) {
    println!("Current grouping: {}", grouping.describe());
    println!();
    println!("  Row fields:              {}", join(&grouping.row_fields()));
    println!("  Column fields:           {}", join(&grouping.available_column_fields()));
    println!(
        "  Secondary column fields: {}",
        join(&grouping.available_secondary_column_fields())
    );
}

/// Display version information
pub fn display_version() {
    println!("Ledger Pivot v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Pivot table aggregation over financial transactions.");
}

fn join(fields: &[Field]) -> String {
    if fields.is_empty() {
        return "(none)".to_string();
    }
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}
