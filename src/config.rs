use anyhow::{Context, Result};
use std::time::Duration;

const DEFAULT_JOBSPY_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Runtime configuration loaded from environment variables (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the JobSpy-compatible search service
    pub jobspy_url: String,
    pub jobspy_api_key: Option<String>,
    /// Upper bound on a single search call
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let timeout_secs = match std::env::var("JOBSPY_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("JOBSPY_TIMEOUT_SECS must be a whole number, got '{raw}'"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            jobspy_url: std::env::var("JOBSPY_API_URL")
                .unwrap_or_else(|_| DEFAULT_JOBSPY_URL.to_string()),
            jobspy_api_key: std::env::var("JOBSPY_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            request_timeout: Duration::from_secs(timeout_secs),
        };

        config.log_keys();
        Ok(config)
    }

    fn log_keys(&self) {
        fn preview(val: &Option<String>) -> String {
            match val {
                Some(v) => {
                    let n = v.chars().count().min(5);
                    let head: String = v.chars().take(n).collect();
                    format!("{}...({} chars)", head, v.chars().count())
                }
                None => "<not set>".to_string(),
            }
        }

        tracing::debug!("Config loaded:");
        tracing::debug!("  JOBSPY_API_URL: {}", self.jobspy_url);
        tracing::debug!("  JOBSPY_API_KEY: {}", preview(&self.jobspy_api_key));
        tracing::debug!("  JOBSPY_TIMEOUT_SECS: {}", self.request_timeout.as_secs());
    }
}
