//! Ledger Pivot CLI
//!
//! Renders pivot tables of summed transaction amounts.
//! Rows, columns and nested columns are chosen from the transaction fields.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use ledger_pivot::aggregator::Field;
use ledger_pivot::commands::{
    display_fields, display_version, execute_pivot, resolve_grouping, validate_args,
    validate_transactions_file, OutputFormat, PivotArgs,
};
use ledger_pivot::utils::config::{CURRENCY_SYMBOL, SOURCE_ENV_VAR};

/// Ledger Pivot - pivot tables over financial transactions
#[derive(Parser, Debug)]
#[command(name = "ledger-pivot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate transactions into a pivot table
    Pivot {
        /// Transaction list URL or JSON file path
        #[arg(short, long, env = SOURCE_ENV_VAR)]
        source: String,

        /// Restore a shared grouping (e.g. "row=year&column=status")
        #[arg(short, long)]
        query: Option<String>,

        /// Field forming the rows
        #[arg(short, long, value_enum)]
        row: Option<Field>,

        /// Field forming the columns
        #[arg(short, long, value_enum)]
        column: Option<Field>,

        /// Field nested inside each column
        #[arg(long, value_enum)]
        secondary: Option<Field>,

        /// Remove the nested column level
        #[arg(long)]
        no_secondary: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Currency glyph printed before amounts
        #[arg(long, default_value = CURRENCY_SYMBOL)]
        currency: String,
    },

    /// Show which fields each selector offers
    Fields {
        /// Restore a shared grouping first
        #[arg(short, long)]
        query: Option<String>,

        /// Field forming the rows
        #[arg(short, long, value_enum)]
        row: Option<Field>,

        /// Field forming the columns
        #[arg(short, long, value_enum)]
        column: Option<Field>,
    },

    /// Validate a transactions JSON file
    Validate {
        /// Path to transactions JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Pivot {
            source,
            query,
            row,
            column,
            secondary,
            no_secondary,
            format,
            output,
            currency,
        } => {
            let args = PivotArgs {
                source,
                query,
                row,
                column,
                secondary,
                no_secondary,
                format,
                output,
                currency,
            };

            // Validate args first
            validate_args(&args)?;

            execute_pivot(args)?;
        }

        Commands::Fields { query, row, column } => {
            let args = PivotArgs {
                query,
                row,
                column,
                ..Default::default()
            };
            display_fields(&resolve_grouping(&args)?);
        }

        Commands::Validate { file } => {
            validate_transactions_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
