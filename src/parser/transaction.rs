//! Convert record-source payloads into transactions.
//!
//! Amounts and years are transported as text and must be parsed before
//! anything reaches the aggregator. A single bad record fails the whole
//! payload so the pivot is never built from partial data.

use super::schema::{Transaction, TransactionDto};
use crate::utils::error::ParseError;
use log::debug;

/// Parse one wire record
///
/// **Public** - used by record sources
///
/// # Errors
/// * `ParseError::InvalidAmount` - amount is not a finite decimal number
/// * `ParseError::InvalidYear` - year is not an integer
pub fn parse_transaction(dto: TransactionDto) -> Result<Transaction, ParseError> {
    let amount = parse_amount(&dto.amount).ok_or_else(|| ParseError::InvalidAmount {
        transaction: dto.transaction_number.clone(),
        value: dto.amount.clone(),
    })?;

    let year = dto
        .year
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidYear {
            transaction: dto.transaction_number.clone(),
            value: dto.year.clone(),
        })?;

    Ok(Transaction {
        transaction_type: dto.transaction_type,
        transaction_number: dto.transaction_number,
        amount,
        status: dto.status,
        year,
    })
}

/// Parse every wire record, stopping at the first failure
///
/// **Public** - main entry point for parsing
pub fn parse_transactions(dtos: Vec<TransactionDto>) -> Result<Vec<Transaction>, ParseError> {
    let transactions = dtos
        .into_iter()
        .map(parse_transaction)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} transactions", transactions.len());

    Ok(transactions)
}

/// Parse a JSON array of wire records
///
/// **Public** - used by file sources and the validate command
pub fn parse_transactions_json(json: &str) -> Result<Vec<Transaction>, ParseError> {
    let dtos: Vec<TransactionDto> = serde_json::from_str(json)?;
    parse_transactions(dtos)
}

/// **Private** - NaN and infinities are rejected
fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|amount| amount.is_finite())
}
