//! Pivot command implementation.
//!
//! The pivot command:
//! 1. Resolves the grouping selection
//! 2. Fetches transactions from the record source
//! 3. Aggregates them into a pivot grid
//! 4. Renders a table or a JSON report

use crate::aggregator::{aggregate_grouping, Field, PivotResult};
use crate::grouping::{GroupingAction, GroupingSelection};
use crate::output::{render_table, report_to_string, write_report, PivotReport};
use crate::parser::Transaction;
use crate::source::{open_source, RecordSource};
use crate::utils::config::{CURRENCY_SYMBOL, DATA_UNAVAILABLE_MESSAGE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// How the pivot is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Arguments for the pivot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PivotArgs {
    /// URL or file path of the transaction list
    pub source: String,

    /// Previously shared selection (`row=..&column=..`)
    pub query: Option<String>,

    pub row: Option<Field>,

    pub column: Option<Field>,

    pub secondary: Option<Field>,

    /// Drop the secondary column level
    pub no_secondary: bool,

    pub format: OutputFormat,

    /// Write the JSON report here instead of stdout
    pub output: Option<PathBuf>,

    /// Currency glyph printed before amounts
    pub currency: String,
}

impl Default for PivotArgs {
    fn default() -> Self {
        Self {
            source: String::new(),
            query: None,
            row: None,
            column: None,
            secondary: None,
            no_secondary: false,
            format: OutputFormat::Table,
            output: None,
            currency: CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Execute the pivot command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid grouping query
/// * Record source failures (reported as data unavailable)
/// * File write errors
pub fn execute_pivot(args: PivotArgs) -> Result<()> {
    let start_time = Instant::now();

    let grouping = resolve_grouping(&args)?;
    info!("Grouping: {}", grouping.describe());
    info!("Share this view with --query '{}'", grouping.to_query()?);

    let source = open_source(&args.source).context(DATA_UNAVAILABLE_MESSAGE)?;

    if let Some(rendered) = run_pivot(source.as_ref(), &grouping, &args)? {
        println!("{}", rendered);
    }

    info!("Pivot completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Fetch, aggregate and render against an already opened source
///
/// **Public** - returns the text to print, or `None` when the output went to a file
pub fn run_pivot(
    source: &dyn RecordSource,
    grouping: &GroupingSelection,
    args: &PivotArgs,
) -> Result<Option<String>> {
    let transactions = fetch_transactions(source)?;

    let result = build_pivot(&transactions, grouping);

    match args.format {
        OutputFormat::Table => Ok(Some(render_table(&result, grouping, &args.currency))),
        OutputFormat::Json => {
            let report = PivotReport::new(&result, grouping);
            match &args.output {
                Some(path) => {
                    write_report(&report, path).context("Failed to write pivot report")?;
                    info!("✓ Report written to: {}", path.display());
                    Ok(None)
                }
                None => Ok(Some(report_to_string(&report)?)),
            }
        }
    }
}

/// Build the selection from `--query` plus explicit field overrides
///
/// **Public** - overrides go through the transition function, so the
/// result is always pairwise distinct
pub fn resolve_grouping(args: &PivotArgs) -> Result<GroupingSelection> {
    let mut grouping = match &args.query {
        Some(query) => GroupingSelection::from_query(query)
            .with_context(|| format!("Invalid grouping query '{}'", query))?,
        None => GroupingSelection::default(),
    };

    let mut actions = Vec::new();
    if let Some(row) = args.row {
        actions.push(GroupingAction::SetRow(row));
    }
    if let Some(column) = args.column {
        actions.push(GroupingAction::SetColumn(column));
    }
    if args.no_secondary {
        actions.push(GroupingAction::SetSecondaryColumn(None));
    } else if let Some(secondary) = args.secondary {
        actions.push(GroupingAction::SetSecondaryColumn(Some(secondary)));
    }

    for action in actions {
        let next = grouping.apply(action);
        if next == grouping {
            warn!("Ignoring {:?}: conflicts with {}", action, grouping.describe());
        }
        grouping = next;
    }

    Ok(grouping)
}

/// Fetch every transaction, mapping failures to the data-unavailable state
///
/// **Private** - internal helper for run_pivot
fn fetch_transactions(source: &dyn RecordSource) -> Result<Vec<Transaction>> {
    let transactions = source
        .fetch_all()
        .with_context(|| format!("{} ({})", DATA_UNAVAILABLE_MESSAGE, source.describe()))?;

    info!("Loaded {} transactions", transactions.len());

    Ok(transactions)
}

/// **Private** - aggregation step with summary logging
fn build_pivot(transactions: &[Transaction], grouping: &GroupingSelection) -> PivotResult {
    let result = aggregate_grouping(transactions, grouping);

    debug!(
        "{} rows, {} columns, grand total {:.2}",
        result.row_values.len(),
        result.column_values.len(),
        result.grand_total()
    );

    result
}

/// Validate pivot arguments
///
/// **Public** - can be called before execute_pivot for early validation
pub fn validate_args(args: &PivotArgs) -> Result<()> {
    if args.source.trim().is_empty() {
        anyhow::bail!("Record source cannot be empty");
    }

    if args.source.contains("://") && !crate::source::is_http_location(&args.source) {
        anyhow::bail!("Record source URL must start with http:// or https://");
    }

    if args.output.is_some() && args.format != OutputFormat::Json {
        anyhow::bail!("--output is only supported with --format json");
    }

    if args.no_secondary && args.secondary.is_some() {
        anyhow::bail!("--secondary and --no-secondary cannot be combined");
    }

    Ok(())
}
