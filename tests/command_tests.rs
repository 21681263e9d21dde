use ledger_pivot::commands::{run_pivot, OutputFormat, PivotArgs};
use ledger_pivot::grouping::GroupingSelection;
use ledger_pivot::aggregator::Field;
use ledger_pivot::output::read_report;
use ledger_pivot::source::{FileSource, RecordSource};
use std::io::Write;
use tempfile::NamedTempFile;

const TRANSACTIONS: &str = r#"[
  {"transaction_type": "invoice", "transaction_number": "1", "amount": "100.00", "status": "paid", "year": "2023"},
  {"transaction_type": "invoice", "transaction_number": "2", "amount": "200.00", "status": "unpaid", "year": "2023"},
  {"transaction_type": "bill", "transaction_number": "3", "amount": "-50.00", "status": "paid", "year": "2023"},
  {"transaction_type": "invoice", "transaction_number": "4", "amount": "150.00", "status": "paid", "year": "2024"}
]"#;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_run_pivot_table() {
    let file = source_file(TRANSACTIONS);
    let source = FileSource::new(file.path());
    let args = PivotArgs {
        source: file.path().display().to_string(),
        ..Default::default()
    };

    let table = run_pivot(&source, &GroupingSelection::default(), &args)
        .unwrap()
        .unwrap();

    assert!(table.contains("year \\ status"));
    assert!(table.contains("$50.00"));
    assert!(table.contains("$200.00"));
    assert!(table.contains("$400.00"));
}

#[test]
fn test_run_pivot_json_to_file() {
    let file = source_file(TRANSACTIONS);
    let source = FileSource::new(file.path());
    let out_dir = tempfile::tempdir().unwrap();
    let report_path = out_dir.path().join("report.json");
    let grouping = GroupingSelection {
        row: Field::Year,
        column: Field::TransactionType,
        secondary_column: Some(Field::Status),
    };
    let args = PivotArgs {
        source: file.path().display().to_string(),
        format: OutputFormat::Json,
        output: Some(report_path.clone()),
        ..Default::default()
    };

    let printed = run_pivot(&source, &grouping, &args).unwrap();
    assert!(printed.is_none());

    let report = read_report(&report_path).unwrap();
    assert_eq!(report.grouping, grouping);
    assert_eq!(report.cells["2023"]["bill|paid"], -50.0);
    assert_eq!(report.cells["2023"]["bill|unpaid"], 0.0);
    assert_eq!(report.column_totals["invoice|paid"], 250.0);
    assert_eq!(report.grand_total, 400.0);
}

#[test]
fn test_run_pivot_reports_data_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("missing.json"));
    let args = PivotArgs {
        source: source.describe(),
        ..Default::default()
    };

    let err = run_pivot(&source, &GroupingSelection::default(), &args).unwrap_err();

    assert!(err.to_string().starts_with("Could not fetch the data"));
}

#[test]
fn test_run_pivot_rejects_malformed_amount() {
    let file = source_file(
        r#"[{"transaction_type": "bill", "transaction_number": "9", "amount": "n/a", "status": "paid", "year": "2023"}]"#,
    );
    let source = FileSource::new(file.path());
    let args = PivotArgs {
        source: file.path().display().to_string(),
        ..Default::default()
    };

    assert!(run_pivot(&source, &GroupingSelection::default(), &args).is_err());
}
