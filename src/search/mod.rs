//! Job search aggregation: validate a request, run one scrape, render a digest.

pub mod format;
pub mod summary;

pub use summary::{SalaryStats, SearchSummary};

use crate::models::{JobRecord, Site};
use crate::scrapers::{JobScraper, ScrapeError, SearchRequest};
use format::{listing_block, quoted_list};
use thiserror::Error;
use tracing::{error, info};

/// Advisory returned when a search succeeds but matches nothing
pub const NO_RESULTS_MESSAGE: &str =
    "No jobs found that match your criteria. Try adjusting your search parameters.";

/// Failures surfaced to the caller as text
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Error: invalid site names: {}. Valid sites: {}", quoted_list(.invalid), quoted_list(&Site::sorted_ids()))]
    InvalidSites { invalid: Vec<String> },

    #[error("Error scraping jobs: {0}")]
    Scrape(#[from] ScrapeError),
}

/// Run one job search and render the results.
///
/// `Ok` carries either the digest or [`NO_RESULTS_MESSAGE`]. Site validation happens
/// before the scraper is called; scraper failures are logged here and not retried.
pub async fn search(scraper: &dyn JobScraper, request: &SearchRequest) -> Result<String, SearchError> {
    info!("Starting job search for '{}'", request.search_term);

    let sites = request
        .resolve_sites()
        .map_err(|invalid| SearchError::InvalidSites { invalid })?;
    let params = request.to_params(sites);

    let jobs = match scraper.scrape(&params).await {
        Ok(jobs) => jobs,
        Err(e) => {
            error!(source = scraper.source_name(), "Error scraping jobs: {}", e);
            return Err(e.into());
        }
    };

    if jobs.is_empty() {
        info!("No jobs found for '{}'", request.search_term);
        return Ok(NO_RESULTS_MESSAGE.to_string());
    }

    let report = render_report(request, &jobs);
    info!("Job search completed for '{}'", request.search_term);
    Ok(report)
}

/// [`search`] flattened to a single string, for tool-call style callers
pub async fn search_text(scraper: &dyn JobScraper, request: &SearchRequest) -> String {
    match search(scraper, request).await {
        Ok(report) => report,
        Err(e) => e.to_string(),
    }
}

fn render_report(request: &SearchRequest, jobs: &[JobRecord]) -> String {
    let mut header = format!("Found {} jobs for '{}'", jobs.len(), request.search_term);
    if let Some(location) = request.location.as_deref().filter(|l| !l.is_empty()) {
        header.push_str(&format!(" in {location}"));
    }

    let listings: Vec<String> = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| listing_block(i + 1, job))
        .collect();

    let mut lines = vec![header, String::new(), listings.join("\n---\n"), String::new()];
    lines.extend(SearchSummary::from_jobs(jobs).lines(&request.site_ids()));

    lines.join("\n")
}
