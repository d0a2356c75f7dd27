use crate::models::Site;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Description rendering requested from the scraping service
pub const DESCRIPTION_FORMAT: &str = "markdown";

/// Search parameters as supplied by a caller.
///
/// Site names stay as plain strings until validated, so an unknown board can be
/// reported back by name instead of failing deserialization. The search term is
/// the only required field and must not be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(deserialize_with = "non_empty_term")]
    pub search_term: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Boards to search; `None` means [`Site::DEFAULTS`]
    #[serde(default)]
    pub site_name: Option<Vec<String>>,
    #[serde(default = "default_results_wanted")]
    pub results_wanted: u32,
    /// fulltime, parttime, internship or contract
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub is_remote: bool,
    /// Only postings newer than this many hours
    #[serde(default)]
    pub hours_old: Option<u32>,
    /// Search radius in miles
    #[serde(default = "default_distance")]
    pub distance: u32,
    #[serde(default)]
    pub easy_apply: bool,
    /// Market used by Indeed and Glassdoor
    #[serde(default = "default_country")]
    pub country_indeed: String,
    #[serde(default)]
    pub linkedin_fetch_description: bool,
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_verbose")]
    pub verbose: u8,
}

fn default_results_wanted() -> u32 {
    15
}

fn default_distance() -> u32 {
    50
}

fn default_country() -> String {
    "usa".to_string()
}

fn default_verbose() -> u8 {
    1
}

fn non_empty_term<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let term = String::deserialize(deserializer)?;
    if term.trim().is_empty() {
        return Err(de::Error::invalid_value(
            de::Unexpected::Str(&term),
            &"a non-empty search term",
        ));
    }
    Ok(term)
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            location: None,
            site_name: None,
            results_wanted: default_results_wanted(),
            job_type: None,
            is_remote: false,
            hours_old: None,
            distance: default_distance(),
            easy_apply: false,
            country_indeed: default_country(),
            linkedin_fetch_description: false,
            offset: 0,
            verbose: default_verbose(),
        }
    }
}

impl SearchRequest {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..Default::default()
        }
    }

    /// Requested site ids in request order, falling back to the defaults
    pub fn site_ids(&self) -> Vec<String> {
        match &self.site_name {
            Some(names) => names.clone(),
            None => Site::DEFAULTS.iter().map(|s| s.as_str().to_string()).collect(),
        }
    }

    /// Resolve site ids, returning every unknown name (in order) on failure
    pub fn resolve_sites(&self) -> Result<Vec<Site>, Vec<String>> {
        let mut sites = Vec::new();
        let mut invalid = Vec::new();

        for id in self.site_ids() {
            match id.parse::<Site>() {
                Ok(site) => sites.push(site),
                Err(name) => invalid.push(name),
            }
        }

        if invalid.is_empty() {
            Ok(sites)
        } else {
            Err(invalid)
        }
    }

    /// Build the parameter set handed to the scraping service
    pub fn to_params(&self, sites: Vec<Site>) -> ScrapeParams {
        ScrapeParams {
            site_name: sites,
            search_term: self.search_term.clone(),
            location: self.location.clone(),
            results_wanted: self.results_wanted,
            job_type: self.job_type.clone(),
            is_remote: self.is_remote,
            hours_old: self.hours_old,
            distance: self.distance,
            easy_apply: self.easy_apply,
            country_indeed: self.country_indeed.clone(),
            linkedin_fetch_description: self.linkedin_fetch_description,
            offset: self.offset,
            verbose: self.verbose,
            description_format: DESCRIPTION_FORMAT.to_string(),
        }
    }
}

/// Validated parameters for a single scraping call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeParams {
    pub site_name: Vec<Site>,
    pub search_term: String,
    pub location: Option<String>,
    pub results_wanted: u32,
    pub job_type: Option<String>,
    pub is_remote: bool,
    pub hours_old: Option<u32>,
    pub distance: u32,
    pub easy_apply: bool,
    pub country_indeed: String,
    pub linkedin_fetch_description: bool,
    pub offset: u32,
    pub verbose: u8,
    pub description_format: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_tool_surface() {
        let request = SearchRequest::new("rust developer");

        assert_eq!(request.results_wanted, 15);
        assert_eq!(request.distance, 50);
        assert_eq!(request.country_indeed, "usa");
        assert_eq!(request.verbose, 1);
        assert_eq!(request.offset, 0);
        assert!(!request.is_remote && !request.easy_apply && !request.linkedin_fetch_description);
        assert_eq!(
            request.site_ids(),
            vec!["indeed", "linkedin", "zip_recruiter", "google"]
        );
    }

    #[test]
    fn resolve_sites_collects_every_unknown_name() {
        let request = SearchRequest {
            site_name: Some(vec!["monster".into(), "indeed".into(), "dice".into(), "monster".into()]),
            ..SearchRequest::new("qa")
        };

        assert_eq!(
            request.resolve_sites(),
            Err(vec!["monster".to_string(), "dice".to_string(), "monster".to_string()])
        );
    }

    #[test]
    fn params_serialize_with_markdown_descriptions() {
        let request = SearchRequest {
            site_name: Some(vec!["zip_recruiter".into()]),
            hours_old: Some(48),
            ..SearchRequest::new("data engineer")
        };
        let sites = request.resolve_sites().unwrap();
        let body = serde_json::to_value(request.to_params(sites)).unwrap();

        assert_eq!(body["site_name"], json!(["zip_recruiter"]));
        assert_eq!(body["search_term"], json!("data engineer"));
        assert_eq!(body["hours_old"], json!(48));
        assert_eq!(body["location"], json!(null));
        assert_eq!(body["description_format"], json!("markdown"));
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let request: SearchRequest =
            serde_json::from_value(json!({ "search_term": "nurse", "site_name": ["indeed"] })).unwrap();

        assert_eq!(request.results_wanted, 15);
        assert_eq!(request.distance, 50);
        assert_eq!(request.country_indeed, "usa");
        assert_eq!(request.verbose, 1);
        assert_eq!(request.site_ids(), vec!["indeed"]);
    }

    #[test]
    fn request_without_search_term_is_rejected() {
        let missing = serde_json::from_value::<SearchRequest>(json!({ "site_name": ["indeed"] }));
        let blank = serde_json::from_value::<SearchRequest>(json!({ "search_term": "  " }));

        assert!(missing.unwrap_err().to_string().contains("search_term"));
        assert!(blank.unwrap_err().to_string().contains("non-empty search term"));
    }
}
