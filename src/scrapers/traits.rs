use crate::models::JobRecord;
use crate::scrapers::types::ScrapeParams;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a scraping service
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::Parse(err.to_string())
    }
}

/// Common trait for job scraping services.
/// The aggregator treats implementations as opaque: one call in, rows or a failure out.
#[async_trait]
pub trait JobScraper: Send + Sync {
    /// Run one multi-site search and return the rows in service order
    async fn scrape(&self, params: &ScrapeParams) -> Result<Vec<JobRecord>, ScrapeError>;

    /// Get the name of the scraping service
    fn source_name(&self) -> &'static str;
}
