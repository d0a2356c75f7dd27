//! Static lookups offered alongside the search tool.

pub mod countries;
pub mod sites;
pub mod tips;

pub use countries::{lookup as lookup_country, supported_countries, Country, COUNTRIES};
pub use sites::supported_sites;
pub use tips::job_search_tips;
