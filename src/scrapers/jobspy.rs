use crate::config::Config;
use crate::models::JobRecord;
use crate::scrapers::traits::{JobScraper, ScrapeError};
use crate::scrapers::types::ScrapeParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

const SEARCH_PATH: &str = "/api/v1/search_jobs";

/// Response body of the search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    count: Option<usize>,
    #[serde(default)]
    jobs: Vec<JobRecord>,
}

/// Client for a JobSpy-compatible REST service.
///
/// Crawling, sessions and rate limiting all live in the service; this only
/// forwards the search parameters and decodes the returned rows.
pub struct JobSpyClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl JobSpyClient {
    /// Create a client from loaded configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("job-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.jobspy_url.trim_end_matches('/').to_string(),
            api_key: config.jobspy_api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

#[async_trait]
impl JobScraper for JobSpyClient {
    async fn scrape(&self, params: &ScrapeParams) -> Result<Vec<JobRecord>, ScrapeError> {
        let url = self.endpoint();
        debug!(url = %url, sites = ?params.site_name, "Requesting job search");

        let mut request = self.client.post(&url).json(params);
        if let Some(ref key) = self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("JobSpy service returned status: {}", status);
            return Err(ScrapeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of JSON", body.len());

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        if let Some(count) = parsed.count {
            if count != parsed.jobs.len() {
                debug!(count, rows = parsed.jobs.len(), "Reported count differs from rows");
            }
        }

        info!("Fetched {} job rows from {}", parsed.jobs.len(), self.source_name());
        Ok(parsed.jobs)
    }

    fn source_name(&self) -> &'static str {
        "JobSpy"
    }
}
