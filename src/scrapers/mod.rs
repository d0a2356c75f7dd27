pub mod jobspy;
pub mod traits;
pub mod types;

pub use jobspy::JobSpyClient;
pub use traits::{JobScraper, ScrapeError};
pub use types::{ScrapeParams, SearchRequest};
