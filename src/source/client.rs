//! HTTP client for fetching transactions from a remote record source.

use super::RecordSource;
use crate::parser::{parse_transactions, Transaction, TransactionDto};
use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::SourceError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Record source backed by an HTTP endpoint returning a JSON array
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a new HTTP source with the default timeout
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SourceError::RequestFailed)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RecordSource for HttpSource {
    fn fetch_all(&self) -> Result<Vec<Transaction>, SourceError> {
        info!("Fetching transactions from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(SourceError::RequestFailed)?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(SourceError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let dtos: Vec<TransactionDto> = response.json().map_err(SourceError::RequestFailed)?;

        debug!("Received {} transaction records", dtos.len());

        Ok(parse_transactions(dtos)?)
    }

    fn describe(&self) -> String {
        format!("http {}", self.url)
    }
}
