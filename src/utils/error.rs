//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while fetching the record list
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid source response: {0}")]
    InvalidResponse(String),

    #[error("Failed to read source file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Malformed transaction payload: {0}")]
    Malformed(#[from] ParseError),
}

/// Errors that can occur while parsing transaction records
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid amount {value:?} on transaction {transaction}")]
    InvalidAmount { transaction: String, value: String },

    #[error("Invalid year {value:?} on transaction {transaction}")]
    InvalidYear { transaction: String, value: String },
}

/// Errors that can occur while restoring a grouping selection
#[derive(Error, Debug)]
pub enum GroupingError {
    #[error("Invalid grouping query: {0}")]
    InvalidQuery(#[from] serde_urlencoded::de::Error),

    #[error("Failed to encode grouping: {0}")]
    EncodeFailed(#[from] serde_urlencoded::ser::Error),

    #[error("Grouping fields must be distinct: {0}")]
    Conflict(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
