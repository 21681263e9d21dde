//! Text table rendering of a pivot result.
//!
//! Layout mirrors the interactive pivot view: one header line per column
//! level, one body line per row value, and a totals footer. A trailing
//! totals column carries each row's sum.

use super::format::format_currency;
use crate::aggregator::{ColumnDescriptor, PivotResult};
use crate::grouping::GroupingSelection;
use crate::utils::config::TOTAL_LABEL;

const SEP: &str = " ┃ ";

/// Render a pivot result as a boxed text table
///
/// **Public** - main entry point for terminal output
///
/// # Arguments
/// * `result` - Aggregated pivot grid
/// * `grouping` - Selection the grid was built from (used for header captions)
/// * `glyph` - Currency glyph placed before each amount
pub fn render_table(result: &PivotResult, grouping: &GroupingSelection, glyph: &str) -> String {
    let span = result.secondary_span();

    let corner = match grouping.secondary_column {
        Some(secondary) if result.is_two_level() => format!("{} \\ {}", grouping.row, secondary),
        _ => format!("{} \\ {}", grouping.row, grouping.column),
    };

    // Body text first so widths fit every cell
    let body: Vec<(String, bool, Vec<String>, String)> = result
        .row_values
        .iter()
        .map(|row| {
            let amounts: Vec<String> = result
                .column_values
                .iter()
                .map(|column| {
                    let amount = result.cell(row, &column.column_key()).unwrap_or(0.0);
                    format_currency(amount, glyph)
                })
                .collect();
            let total = format_currency(result.row_total(row).unwrap_or(0.0), glyph);
            (row.to_string(), row.is_numeric(), amounts, total)
        })
        .collect();

    let footer: Vec<String> = result
        .column_values
        .iter()
        .map(|column| {
            let total = result.column_total(&column.column_key()).unwrap_or(0.0);
            format_currency(total, glyph)
        })
        .collect();
    let grand_total = format_currency(result.grand_total(), glyph);

    let mut widths: Vec<usize> = result.column_values.iter().map(|c| width(&leaf_label(c))).collect();
    for amounts in body.iter().map(|(_, _, amounts, _)| amounts).chain(std::iter::once(&footer)) {
        for (w, text) in widths.iter_mut().zip(amounts) {
            *w = (*w).max(width(text));
        }
    }

    // A primary header wider than its group pushes the group's last column out
    if result.is_two_level() && span > 0 {
        for (group, primary) in result.primary_column_values.iter().enumerate() {
            let columns = &mut widths[group * span..(group + 1) * span];
            let available = group_width(columns);
            let needed = width(&primary.to_string());
            if needed > available {
                if let Some(last) = columns.last_mut() {
                    *last += needed - available;
                }
            }
        }
    }

    let label_width = body
        .iter()
        .map(|(label, _, _, _)| width(label))
        .chain([width(&corner), width(TOTAL_LABEL), width(&grouping.column.to_string())])
        .max()
        .unwrap_or(0);

    let total_width = body
        .iter()
        .map(|(_, _, _, total)| width(total))
        .chain([width(&grand_total), width(TOTAL_LABEL)])
        .max()
        .unwrap_or(0);

    let mut header_lines = Vec::new();

    if result.is_two_level() && span > 0 {
        let mut line = format!("{:<w$}", grouping.column.to_string(), w = label_width);
        for (group, primary) in result.primary_column_values.iter().enumerate() {
            let w = group_width(&widths[group * span..(group + 1) * span]);
            line.push_str(SEP);
            line.push_str(&format!("{:^w$}", primary.to_string(), w = w));
        }
        line.push_str(SEP);
        line.push_str(&" ".repeat(total_width));
        header_lines.push(line);
    }

    let mut leaf = format!("{:<w$}", corner, w = label_width);
    for (column, w) in result.column_values.iter().zip(&widths) {
        leaf.push_str(SEP);
        leaf.push_str(&format!("{:>w$}", leaf_label(column), w = *w));
    }
    leaf.push_str(SEP);
    leaf.push_str(&format!("{:>w$}", TOTAL_LABEL, w = total_width));
    header_lines.push(leaf);

    let body_lines: Vec<String> = body
        .iter()
        .map(|(label, numeric, amounts, total)| {
            let mut line = if *numeric {
                format!("{:>w$}", label, w = label_width)
            } else {
                format!("{:<w$}", label, w = label_width)
            };
            push_amounts(&mut line, amounts, &widths);
            line.push_str(SEP);
            line.push_str(&format!("{:>w$}", total, w = total_width));
            line
        })
        .collect();

    let mut footer_line = format!("{:<w$}", TOTAL_LABEL, w = label_width);
    push_amounts(&mut footer_line, &footer, &widths);
    footer_line.push_str(SEP);
    footer_line.push_str(&format!("{:>w$}", grand_total, w = total_width));

    let rule = "━".repeat(width(&footer_line) + 4);

    let mut lines = Vec::with_capacity(header_lines.len() + body_lines.len() + 5);
    lines.push(rule.clone());
    lines.extend(header_lines.into_iter().map(boxed));
    lines.push(rule.clone());
    lines.extend(body_lines.into_iter().map(boxed));
    lines.push(rule.clone());
    lines.push(boxed(footer_line));
    lines.push(rule);

    lines.join("\n")
}

/// Header text of the innermost column level
fn leaf_label(column: &ColumnDescriptor) -> String {
    column
        .secondary
        .as_ref()
        .unwrap_or(&column.primary)
        .to_string()
}

fn push_amounts(line: &mut String, amounts: &[String], widths: &[usize]) {
    for (text, w) in amounts.iter().zip(widths) {
        line.push_str(SEP);
        line.push_str(&format!("{:>w$}", text, w = *w));
    }
}

fn group_width(columns: &[usize]) -> usize {
    columns.iter().sum::<usize>() + width(SEP) * columns.len().saturating_sub(1)
}

fn boxed(line: String) -> String {
    format!("┃ {} ┃", line)
}

fn width(text: &str) -> usize {
    text.chars().count()
}
