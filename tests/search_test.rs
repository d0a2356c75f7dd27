//! Aggregator tests against a scripted scraper.
//!
//! Each test scripts the scraper's response, runs one search, and checks the
//! rendered text plus what (if anything) the scraper was asked for.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use job_scout::models::Site;
use job_scout::search::SearchError;
use job_scout::{search, search_text, JobRecord, JobScraper, ScrapeError, ScrapeParams, SearchRequest};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

enum Script {
    Rows(Vec<JobRecord>),
    Fail(&'static str),
}

struct MockScraper {
    script: Script,
    calls: AtomicUsize,
    last_params: Mutex<Option<ScrapeParams>>,
}

impl MockScraper {
    fn returning(rows: Vec<JobRecord>) -> Self {
        Self::with(Script::Rows(rows))
    }

    fn failing(reason: &'static str) -> Self {
        Self::with(Script::Fail(reason))
    }

    fn with(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_params: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_params(&self) -> ScrapeParams {
        self.last_params.lock().unwrap().clone().expect("scraper was not called")
    }
}

#[async_trait]
impl JobScraper for MockScraper {
    async fn scrape(&self, params: &ScrapeParams) -> Result<Vec<JobRecord>, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_params.lock().unwrap() = Some(params.clone());

        match &self.script {
            Script::Rows(rows) => Ok(rows.clone()),
            Script::Fail(reason) => Err(ScrapeError::Network(reason.to_string())),
        }
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

fn request(term: &str, sites: &[&str]) -> SearchRequest {
    SearchRequest {
        site_name: Some(sites.iter().map(|s| s.to_string()).collect()),
        ..SearchRequest::new(term)
    }
}

fn row(value: serde_json::Value) -> JobRecord {
    serde_json::from_value(value).unwrap()
}

fn full_row() -> JobRecord {
    row(json!({
        "title": "Senior Python Developer",
        "company": "Acme Corp",
        "location": "Austin, TX",
        "site": "indeed",
        "job_type": "fulltime",
        "date_posted": "2024-05-20",
        "min_amount": 120000.0,
        "max_amount": 150000.0,
        "currency": "USD",
        "interval": "yearly",
        "is_remote": true,
        "job_url": "https://www.indeed.com/viewjob?jk=abc123",
        "description": "Work on data pipelines."
    }))
}

fn minimal_row() -> JobRecord {
    row(json!({
        "title": "Python Developer",
        "company": "Small Co",
        "location": "Remote",
        "site": "indeed"
    }))
}

fn listing_count(report: &str) -> usize {
    report.matches("\nCompany: ").count()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_site_is_rejected_without_scraping() {
    let scraper = MockScraper::returning(vec![full_row()]);

    let text = search_text(&scraper, &request("python developer", &["monster"])).await;

    assert_eq!(
        text,
        "Error: invalid site names: ['monster']. Valid sites: \
         ['bayt', 'bdjobs', 'glassdoor', 'google', 'indeed', 'linkedin', 'naukri', 'zip_recruiter']"
    );
    assert_eq!(scraper.calls(), 0);
}

#[tokio::test]
async fn mixed_sites_report_only_the_invalid_ones() {
    let scraper = MockScraper::returning(vec![]);

    let err = search(&scraper, &request("nurse", &["indeed", "dice", "linkedin", "monster"]))
        .await
        .unwrap_err();

    match &err {
        SearchError::InvalidSites { invalid } => assert_eq!(invalid, &["dice", "monster"]),
        other => panic!("expected InvalidSites, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Error: invalid site names: ['dice', 'monster']."));
    assert_eq!(scraper.calls(), 0);
}

// ---------------------------------------------------------------------------
// Scraper boundary
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scraper_failure_becomes_error_text() {
    let scraper = MockScraper::failing("connection reset by peer");

    let text = search_text(&scraper, &request("python developer", &["indeed"])).await;

    assert_eq!(text, "Error scraping jobs: Network error: connection reset by peer");
    assert_eq!(scraper.calls(), 1, "failures are not retried");
}

#[tokio::test]
async fn empty_result_is_an_advisory_not_an_error() {
    let scraper = MockScraper::returning(vec![]);

    let result = search(&scraper, &request("underwater basket weaver", &["indeed"])).await;

    let text = result.expect("empty results are a successful search");
    assert!(text.starts_with("No jobs found"));
    assert_eq!(listing_count(&text), 0);
    assert_eq!(scraper.calls(), 1);
}

#[tokio::test]
async fn scraper_receives_every_parameter_with_markdown_descriptions() {
    let scraper = MockScraper::returning(vec![]);
    let req = SearchRequest {
        location: Some("Austin, TX".into()),
        site_name: Some(vec!["glassdoor".into(), "bayt".into()]),
        results_wanted: 30,
        job_type: Some("contract".into()),
        is_remote: true,
        hours_old: Some(72),
        distance: 25,
        easy_apply: true,
        country_indeed: "canada".into(),
        linkedin_fetch_description: true,
        offset: 10,
        verbose: 2,
        ..SearchRequest::new("devops")
    };

    search(&scraper, &req).await.unwrap();

    let params = scraper.last_params();
    assert_eq!(params.site_name, vec![Site::Glassdoor, Site::Bayt]);
    assert_eq!(params.search_term, "devops");
    assert_eq!(params.location.as_deref(), Some("Austin, TX"));
    assert_eq!(params.results_wanted, 30);
    assert_eq!(params.job_type.as_deref(), Some("contract"));
    assert!(params.is_remote && params.easy_apply && params.linkedin_fetch_description);
    assert_eq!(params.hours_old, Some(72));
    assert_eq!(params.distance, 25);
    assert_eq!(params.country_indeed, "canada");
    assert_eq!(params.offset, 10);
    assert_eq!(params.verbose, 2);
    assert_eq!(params.description_format, "markdown");
}

#[tokio::test]
async fn omitted_sites_fall_back_to_defaults() {
    let scraper = MockScraper::returning(vec![minimal_row()]);

    let text = search_text(&scraper, &SearchRequest::new("designer")).await;

    assert_eq!(
        scraper.last_params().site_name,
        vec![Site::Indeed, Site::Linkedin, Site::ZipRecruiter, Site::Google]
    );
    assert!(text.contains("Sites searched: indeed, linkedin, zip_recruiter, google"));
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[tokio::test]
async fn two_row_search_renders_listings_and_summary() {
    let scraper = MockScraper::returning(vec![full_row(), minimal_row()]);
    let req = SearchRequest {
        results_wanted: 2,
        ..request("python developer", &["indeed"])
    };

    let text = search_text(&scraper, &req).await;

    let expected = "\
Found 2 jobs for 'python developer'

1. Senior Python Developer
Company: Acme Corp
Location: Austin, TX
Source: Indeed
Type: fulltime
Posted: 2024-05-20
Salary: 120,000 - 150,000 USD (yearly)
Remote work available
Apply: https://www.indeed.com/viewjob?jk=abc123
Description: Work on data pipelines.
---
2. Python Developer
Company: Small Co
Location: Remote
Source: Indeed

Search Summary
Total jobs found: 2
Sites searched: indeed
Remote jobs: 1
Jobs with salary info: 1
Average salary range: 120,000 - 150,000";

    assert_eq!(text, expected);
}

#[tokio::test]
async fn location_is_appended_to_the_header() {
    let scraper = MockScraper::returning(vec![minimal_row()]);
    let req = SearchRequest {
        location: Some("Denver, CO".into()),
        ..request("python developer", &["indeed"])
    };

    let text = search_text(&scraper, &req).await;

    assert!(text.starts_with("Found 1 jobs for 'python developer' in Denver, CO\n\n1. "));
}

#[tokio::test]
async fn listings_are_numbered_in_scraper_order() {
    let rows: Vec<JobRecord> = (0..5)
        .map(|i| row(json!({ "title": format!("Role {i}"), "site": "google" })))
        .collect();
    let scraper = MockScraper::returning(rows);

    let text = search_text(&scraper, &request("anything", &["google"])).await;

    assert_eq!(listing_count(&text), 5);
    for i in 0..5 {
        assert!(text.contains(&format!("{}. Role {}\n", i + 1, i)));
    }
    assert_eq!(text.matches("\n---\n").count(), 4);
}

#[tokio::test]
async fn no_salary_lines_without_a_complete_range() {
    let scraper = MockScraper::returning(vec![
        row(json!({ "title": "A", "min_amount": 50000.0 })),
        row(json!({ "title": "B", "max_amount": 90000.0 })),
    ]);

    let text = search_text(&scraper, &request("analyst", &["indeed"])).await;

    assert!(!text.contains("Jobs with salary info"));
    assert!(!text.contains("Average salary range"));
    assert!(text.ends_with("Remote jobs: 0"));
}

#[tokio::test]
async fn remote_count_matches_truthy_flags() {
    let scraper = MockScraper::returning(vec![
        row(json!({ "is_remote": true })),
        row(json!({ "is_remote": false })),
        row(json!({ "is_remote": null })),
        row(json!({})),
        row(json!({ "is_remote": 1 })),
    ]);

    let text = search_text(&scraper, &request("support", &["linkedin"])).await;

    assert!(text.contains("Remote jobs: 2"));
    assert_eq!(text.matches("Remote work available").count(), 2);
}

#[tokio::test]
async fn long_descriptions_are_truncated_in_listings() {
    let long = "a".repeat(450);
    let exact = "b".repeat(300);
    let scraper = MockScraper::returning(vec![
        row(json!({ "title": "Long", "description": long })),
        row(json!({ "title": "Exact", "description": exact.clone() })),
    ]);

    let text = search_text(&scraper, &request("writer", &["indeed"])).await;

    let descriptions: Vec<&str> = text
        .lines()
        .filter_map(|l| l.strip_prefix("Description: "))
        .collect();
    assert_eq!(descriptions.len(), 2);
    assert_eq!(descriptions[0].chars().count(), 303);
    assert_eq!(descriptions[0], format!("{}...", "a".repeat(300)));
    assert_eq!(descriptions[1], exact);
}

#[tokio::test]
async fn repeated_searches_render_identically() {
    let scraper = MockScraper::returning(vec![full_row(), minimal_row()]);
    let req = request("python developer", &["indeed", "google"]);

    let first = search_text(&scraper, &req).await;
    let second = search_text(&scraper, &req).await;

    assert_eq!(first, second);
    assert_eq!(scraper.calls(), 2);
}
