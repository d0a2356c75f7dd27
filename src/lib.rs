pub mod config;
pub mod models;
pub mod reference;
pub mod scrapers;
pub mod search;

pub use config::Config;
pub use models::{JobRecord, Site};
pub use scrapers::{JobScraper, JobSpyClient, ScrapeError, ScrapeParams, SearchRequest};
pub use search::{search, search_text, SearchError, SearchSummary, NO_RESULTS_MESSAGE};
