//! Retrieval seam for raw ledger text.
//!
//! The engine awaits a source once per load and computes everything else
//! in memory. Sources are injected so the dashboard can read the published
//! CSVs over HTTP in deployment and local files (or canned fixtures) in
//! tests, without the engine knowing the difference.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::errors::{Result, SourceError};

#[async_trait]
pub trait LedgerSourceTrait: Send + Sync {
    /// Raw text of the portfolio ledger CSV.
    async fn portfolio_ledger(&self) -> Result<String>;

    /// Raw text of the trade ledger CSV.
    async fn trade_ledger(&self) -> Result<String>;
}

/// Fetches the published ledger CSVs over HTTP.
pub struct HttpLedgerSource {
    client: reqwest::Client,
    portfolio_url: String,
    trade_url: String,
}

impl HttpLedgerSource {
    pub fn new(portfolio_url: impl Into<String>, trade_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            portfolio_url: portfolio_url.into(),
            trade_url: trade_url.into(),
        }
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl LedgerSourceTrait for HttpLedgerSource {
    async fn portfolio_ledger(&self) -> Result<String> {
        self.fetch(&self.portfolio_url).await
    }

    async fn trade_ledger(&self) -> Result<String> {
        self.fetch(&self.trade_url).await
    }
}

/// Reads ledger CSVs from the local filesystem, mirroring the experiment's
/// `Scripts and CSV Files/` layout.
pub struct FileLedgerSource {
    portfolio_path: PathBuf,
    trade_path: PathBuf,
}

impl FileLedgerSource {
    pub fn new(portfolio_path: impl Into<PathBuf>, trade_path: impl Into<PathBuf>) -> Self {
        Self {
            portfolio_path: portfolio_path.into(),
            trade_path: trade_path.into(),
        }
    }

    fn read(path: &PathBuf) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|e| SourceError::Io(format!("{}: {}", path.display(), e)).into())
    }
}

#[async_trait]
impl LedgerSourceTrait for FileLedgerSource {
    async fn portfolio_ledger(&self) -> Result<String> {
        Self::read(&self.portfolio_path)
    }

    async fn trade_ledger(&self) -> Result<String> {
        Self::read(&self.trade_path)
    }
}
