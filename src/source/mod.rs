//! Record sources supplying the flat transaction list.
//!
//! A source is fetched once per run. Any failure surfaces as a
//! `SourceError` and the pivot is not built.

pub mod client;
pub mod file;

pub use client::HttpSource;
pub use file::FileSource;

use crate::parser::Transaction;
use crate::utils::error::SourceError;
use log::info;

/// Something that can produce the full transaction list
pub trait RecordSource {
    /// Fetch and parse every transaction
    fn fetch_all(&self) -> Result<Vec<Transaction>, SourceError>;

    /// Where the records come from, for logs
    fn describe(&self) -> String;
}

/// Pick a source from a location string
///
/// **Public** - `http://` and `https://` locations are fetched over HTTP,
/// anything else is read as a local JSON file
pub fn open_source(location: &str) -> Result<Box<dyn RecordSource>, SourceError> {
    if is_http_location(location) {
        info!("Using HTTP record source: {}", location);
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        info!("Using file record source: {}", location);
        Ok(Box::new(FileSource::new(location)))
    }
}

pub fn is_http_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
