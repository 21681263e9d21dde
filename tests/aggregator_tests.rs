use ledger_pivot::aggregator::{aggregate, AxisValue, ColumnKey, Field};
use ledger_pivot::parser::Transaction;
use pretty_assertions::assert_eq;

fn txn(transaction_type: &str, number: &str, amount: f64, status: &str, year: i32) -> Transaction {
    Transaction {
        transaction_type: transaction_type.to_string(),
        transaction_number: number.to_string(),
        amount,
        status: status.to_string(),
        year,
    }
}

fn sample_transactions() -> Vec<Transaction> {
    vec![
        txn("invoice", "1", 100.0, "paid", 2023),
        txn("invoice", "2", 200.0, "unpaid", 2023),
        txn("bill", "3", 50.0, "paid", 2023),
        txn("invoice", "4", 150.0, "paid", 2024),
        txn("bill", "5", 75.0, "partially_paid", 2024),
    ]
}

fn text(values: &[&str]) -> Vec<AxisValue> {
    values.iter().map(|v| AxisValue::from(*v)).collect()
}

fn years(values: &[i32]) -> Vec<AxisValue> {
    values.iter().map(|v| AxisValue::Year(*v)).collect()
}

#[test]
fn test_groups_by_row_and_column() {
    let result = aggregate(&sample_transactions(), Field::Year, Field::Status, None);

    assert_eq!(result.row_values, years(&[2023, 2024]));
    assert_eq!(
        result.primary_column_values,
        text(&["paid", "partially_paid", "unpaid"])
    );
    assert_eq!(result.secondary_column_values, None);
}

#[test]
fn test_single_level_cells_and_totals() {
    let result = aggregate(&sample_transactions(), Field::Year, Field::Status, None);
    let y2023 = AxisValue::Year(2023);
    let y2024 = AxisValue::Year(2024);

    assert_eq!(result.cell(&y2023, &ColumnKey::single("paid")), Some(150.0));
    assert_eq!(result.cell(&y2023, &ColumnKey::single("unpaid")), Some(200.0));
    assert_eq!(result.cell(&y2023, &ColumnKey::single("partially_paid")), Some(0.0));
    assert_eq!(result.cell(&y2024, &ColumnKey::single("paid")), Some(150.0));
    assert_eq!(result.cell(&y2024, &ColumnKey::single("partially_paid")), Some(75.0));
    assert_eq!(result.cell(&y2024, &ColumnKey::single("unpaid")), Some(0.0));

    assert_eq!(result.column_total(&ColumnKey::single("paid")), Some(300.0));
    assert_eq!(result.column_total(&ColumnKey::single("partially_paid")), Some(75.0));
    assert_eq!(result.column_total(&ColumnKey::single("unpaid")), Some(200.0));
}

#[test]
fn test_three_record_scenario() {
    let records = vec![
        txn("invoice", "1", 100.0, "paid", 2023),
        txn("invoice", "2", 200.0, "unpaid", 2023),
        txn("invoice", "3", 150.0, "paid", 2024),
    ];
    let result = aggregate(&records, Field::Year, Field::Status, None);
    let y2023 = AxisValue::Year(2023);
    let y2024 = AxisValue::Year(2024);

    assert_eq!(result.row_values, years(&[2023, 2024]));
    assert_eq!(result.primary_column_values, text(&["paid", "unpaid"]));
    assert_eq!(result.cell(&y2023, &ColumnKey::single("paid")), Some(100.0));
    assert_eq!(result.cell(&y2023, &ColumnKey::single("unpaid")), Some(200.0));
    assert_eq!(result.cell(&y2024, &ColumnKey::single("paid")), Some(150.0));
    assert_eq!(result.cell(&y2024, &ColumnKey::single("unpaid")), Some(0.0));
    assert_eq!(result.column_total(&ColumnKey::single("paid")), Some(250.0));
    assert_eq!(result.column_total(&ColumnKey::single("unpaid")), Some(200.0));
}

#[test]
fn test_single_level_column_descriptors() {
    let result = aggregate(&sample_transactions(), Field::TransactionType, Field::Year, None);

    let keys: Vec<&str> = result.column_values.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["2023", "2024"]);
    assert_eq!(result.column_values[0].primary, AxisValue::Year(2023));
    assert_eq!(result.column_values[0].secondary, None);
}

#[test]
fn test_secondary_axis_values() {
    let result = aggregate(
        &sample_transactions(),
        Field::Year,
        Field::TransactionType,
        Some(Field::Status),
    );

    assert_eq!(result.primary_column_values, text(&["bill", "invoice"]));
    assert_eq!(
        result.secondary_column_values,
        Some(text(&["paid", "partially_paid", "unpaid"]))
    );
}

#[test]
fn test_two_level_cells_and_totals() {
    let result = aggregate(
        &sample_transactions(),
        Field::Year,
        Field::TransactionType,
        Some(Field::Status),
    );
    let y2023 = AxisValue::Year(2023);
    let y2024 = AxisValue::Year(2024);

    assert_eq!(result.cell(&y2023, &ColumnKey::nested("invoice", "paid")), Some(100.0));
    assert_eq!(result.cell(&y2023, &ColumnKey::nested("invoice", "unpaid")), Some(200.0));
    assert_eq!(result.cell(&y2023, &ColumnKey::nested("bill", "paid")), Some(50.0));
    assert_eq!(result.cell(&y2023, &ColumnKey::nested("bill", "partially_paid")), Some(0.0));
    assert_eq!(result.cell(&y2024, &ColumnKey::nested("invoice", "paid")), Some(150.0));
    assert_eq!(result.cell(&y2024, &ColumnKey::nested("bill", "partially_paid")), Some(75.0));

    assert_eq!(result.column_total(&ColumnKey::nested("invoice", "paid")), Some(250.0));
    assert_eq!(result.column_total(&ColumnKey::nested("invoice", "unpaid")), Some(200.0));
    assert_eq!(result.column_total(&ColumnKey::nested("bill", "paid")), Some(50.0));
    assert_eq!(result.column_total(&ColumnKey::nested("bill", "partially_paid")), Some(75.0));
}

#[test]
fn test_two_level_descriptors_in_nested_order() {
    let result = aggregate(
        &sample_transactions(),
        Field::Year,
        Field::TransactionType,
        Some(Field::Status),
    );

    let keys: Vec<&str> = result.column_values.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "bill|paid",
            "bill|partially_paid",
            "bill|unpaid",
            "invoice|paid",
            "invoice|partially_paid",
            "invoice|unpaid",
        ]
    );
    assert_eq!(result.column_values[1].primary, AxisValue::from("bill"));
    assert_eq!(
        result.column_values[1].secondary,
        Some(AxisValue::from("partially_paid"))
    );
}

#[test]
fn test_empty_input() {
    let result = aggregate(&[], Field::Year, Field::Status, None);

    assert!(result.row_values.is_empty());
    assert!(result.primary_column_values.is_empty());
    assert!(result.column_values.is_empty());
    assert!(result.cells.is_empty());
    assert!(result.column_totals.is_empty());
    assert!(result.is_empty());
}

#[test]
fn test_empty_input_with_secondary() {
    let result = aggregate(&[], Field::Year, Field::Status, Some(Field::TransactionType));

    assert_eq!(result.secondary_column_values, Some(vec![]));
    assert!(result.column_values.is_empty());
    assert!(result.cells.is_empty());
}

#[test]
fn test_single_transaction() {
    let records = vec![txn("sale", "1", 100.0, "completed", 2023)];
    let result = aggregate(&records, Field::Year, Field::Status, None);

    assert_eq!(result.row_values, years(&[2023]));
    assert_eq!(result.primary_column_values, text(&["completed"]));
    assert_eq!(
        result.cell(&AxisValue::Year(2023), &ColumnKey::single("completed")),
        Some(100.0)
    );
    assert_eq!(result.column_total(&ColumnKey::single("completed")), Some(100.0));
}

#[test]
fn test_missing_combinations_are_zero() {
    let records = vec![
        txn("sale", "1", 100.0, "completed", 2023),
        txn("refund", "2", 50.0, "pending", 2024),
    ];
    let result = aggregate(&records, Field::Year, Field::Status, None);
    let y2023 = AxisValue::Year(2023);
    let y2024 = AxisValue::Year(2024);

    assert_eq!(result.cell(&y2023, &ColumnKey::single("completed")), Some(100.0));
    assert_eq!(result.cell(&y2023, &ColumnKey::single("pending")), Some(0.0));
    assert_eq!(result.cell(&y2024, &ColumnKey::single("completed")), Some(0.0));
    assert_eq!(result.cell(&y2024, &ColumnKey::single("pending")), Some(50.0));
}

#[test]
fn test_same_cell_accumulates() {
    let records = vec![
        txn("sale", "1", 100.0, "completed", 2023),
        txn("sale", "2", 150.0, "completed", 2023),
        txn("sale", "3", 75.0, "completed", 2023),
    ];
    let result = aggregate(&records, Field::Year, Field::Status, None);

    assert_eq!(
        result.cell(&AxisValue::Year(2023), &ColumnKey::single("completed")),
        Some(325.0)
    );
    assert_eq!(result.column_total(&ColumnKey::single("completed")), Some(325.0));
}

#[test]
fn test_axes_sorted() {
    let records = vec![
        txn("sale", "1", 100.0, "pending", 2025),
        txn("refund", "2", 50.0, "completed", 2023),
        txn("sale", "3", 75.0, "cancelled", 2024),
    ];
    let result = aggregate(&records, Field::Year, Field::Status, None);

    assert_eq!(result.row_values, years(&[2023, 2024, 2025]));
    assert_eq!(
        result.primary_column_values,
        text(&["cancelled", "completed", "pending"])
    );
}

#[test]
fn test_years_sort_numerically_not_textually() {
    let records = vec![
        txn("sale", "1", 1.0, "paid", 10000),
        txn("sale", "2", 1.0, "paid", 999),
    ];
    let result = aggregate(&records, Field::Year, Field::Status, None);

    assert_eq!(result.row_values, years(&[999, 10000]));
}

#[test]
fn test_transaction_type_rows() {
    let result = aggregate(&sample_transactions(), Field::TransactionType, Field::Year, None);

    assert_eq!(result.row_values, text(&["bill", "invoice"]));
    assert_eq!(
        result.cell(&AxisValue::from("invoice"), &ColumnKey::single(2023)),
        Some(300.0)
    );
    assert_eq!(
        result.cell(&AxisValue::from("bill"), &ColumnKey::single(2023)),
        Some(50.0)
    );
}

#[test]
fn test_status_rows_type_columns() {
    let result = aggregate(&sample_transactions(), Field::Status, Field::TransactionType, None);

    assert_eq!(result.row_values, text(&["paid", "partially_paid", "unpaid"]));
    assert_eq!(
        result.cell(&AxisValue::from("unpaid"), &ColumnKey::single("bill")),
        Some(0.0)
    );
    assert_eq!(
        result.cell(&AxisValue::from("paid"), &ColumnKey::single("invoice")),
        Some(250.0)
    );
}

#[test]
fn test_grid_is_dense() {
    let result = aggregate(
        &sample_transactions(),
        Field::Status,
        Field::Year,
        Some(Field::TransactionType),
    );

    assert_eq!(result.cells.len(), result.row_values.len());
    for row in &result.row_values {
        let columns = &result.cells[row];
        assert_eq!(columns.len(), result.column_values.len());
        for column in &result.column_values {
            assert!(columns.contains_key(&column.column_key()));
        }
    }
    assert_eq!(result.column_totals.len(), result.column_values.len());
}

#[test]
fn test_totals_partition_total_amount() {
    let records = vec![
        txn("invoice", "1", 10.5, "paid", 2023),
        txn("bill", "2", -4.25, "unpaid", 2024),
        txn("credit", "3", 7.0, "paid", 2022),
        txn("invoice", "4", 0.75, "void", 2024),
    ];
    let expected: f64 = records.iter().map(|t| t.amount).sum();

    for (row, column, secondary) in [
        (Field::Year, Field::Status, None),
        (Field::Status, Field::TransactionType, Some(Field::Year)),
        (Field::TransactionType, Field::Year, Some(Field::Status)),
    ] {
        let result = aggregate(&records, row, column, secondary);
        assert!((result.grand_total() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_cells_match_filtered_sums() {
    let records = sample_transactions();
    let result = aggregate(&records, Field::Status, Field::TransactionType, Some(Field::Year));

    for row in &result.row_values {
        for column in &result.column_values {
            let expected: f64 = records
                .iter()
                .filter(|t| Field::Status.value_of(t) == *row)
                .filter(|t| Field::TransactionType.value_of(t) == column.primary)
                .filter(|t| Some(Field::Year.value_of(t)) == column.secondary)
                .map(|t| t.amount)
                .sum();
            assert_eq!(result.cell(row, &column.column_key()), Some(expected));
        }
    }
}

#[test]
fn test_adding_secondary_refines_without_changing_totals() {
    let records = sample_transactions();
    let flat = aggregate(&records, Field::Year, Field::TransactionType, None);
    let nested = aggregate(&records, Field::Year, Field::TransactionType, Some(Field::Status));

    for primary in &flat.primary_column_values {
        let flat_total = flat.column_total(&ColumnKey::single(primary.clone())).unwrap();
        let nested_total: f64 = nested
            .column_totals
            .iter()
            .filter(|(key, _)| key.primary == *primary)
            .map(|(_, total)| total)
            .sum();
        assert_eq!(flat_total, nested_total);
    }

    for row in &flat.row_values {
        assert_eq!(flat.row_total(row), nested.row_total(row));
    }
}

#[test]
fn test_aggregate_is_idempotent() {
    let records = sample_transactions();
    let before = records.clone();

    let first = aggregate(&records, Field::Year, Field::TransactionType, Some(Field::Status));
    let second = aggregate(&records, Field::Year, Field::TransactionType, Some(Field::Status));

    assert_eq!(first, second);
    assert_eq!(records, before);
}

#[test]
fn test_aggregation_order_independent() {
    let records = sample_transactions();
    let mut reversed = records.clone();
    reversed.reverse();

    assert_eq!(
        aggregate(&records, Field::Year, Field::Status, None),
        aggregate(&reversed, Field::Year, Field::Status, None)
    );
}
