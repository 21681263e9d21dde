//! Amount formatting for pivot cells and totals.

/// Format an amount with two decimals, negatives in parentheses
///
/// **Public** - `-50` renders as `(50.00)`, `1234.5` as `1234.50`
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());

    if amount < 0.0 {
        format!("({})", formatted)
    } else {
        formatted
    }
}

/// Format an amount prefixed by a currency glyph
pub fn format_currency(amount: f64, glyph: &str) -> String {
    format!("{}{}", glyph, format_amount(amount))
}
