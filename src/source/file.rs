//! Local JSON file record source.

use super::RecordSource;
use crate::parser::{parse_transactions_json, Transaction};
use crate::utils::error::SourceError;
use log::debug;
use std::path::{Path, PathBuf};

/// Record source reading a JSON array of transactions from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn fetch_all(&self) -> Result<Vec<Transaction>, SourceError> {
        debug!("Reading transactions from: {}", self.path.display());

        let json = std::fs::read_to_string(&self.path)?;

        Ok(parse_transactions_json(&json)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
