use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Job board searched by the scraping service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    Linkedin,
    Indeed,
    Glassdoor,
    ZipRecruiter,
    Google,
    Bayt,
    Naukri,
    Bdjobs,
}

impl Site {
    pub const ALL: [Site; 8] = [
        Site::Linkedin,
        Site::Indeed,
        Site::Glassdoor,
        Site::ZipRecruiter,
        Site::Google,
        Site::Bayt,
        Site::Naukri,
        Site::Bdjobs,
    ];

    /// Sites searched when the caller does not name any
    pub const DEFAULTS: [Site; 4] = [Site::Indeed, Site::Linkedin, Site::ZipRecruiter, Site::Google];

    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Linkedin => "linkedin",
            Site::Indeed => "indeed",
            Site::Glassdoor => "glassdoor",
            Site::ZipRecruiter => "zip_recruiter",
            Site::Google => "google",
            Site::Bayt => "bayt",
            Site::Naukri => "naukri",
            Site::Bdjobs => "bdjobs",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Site::Linkedin => "Professional networking platform with job listings.",
            Site::Indeed => "Large job search engine with broad coverage.",
            Site::Glassdoor => "Job listings with company reviews and salary data.",
            Site::ZipRecruiter => "Job matching platform focused on US and Canada.",
            Site::Google => "Aggregated job listings surfaced through Google search.",
            Site::Bayt => "Middle East focused job portal.",
            Site::Naukri => "India's leading job portal with detailed listings.",
            Site::Bdjobs => "Primary job portal for Bangladesh.",
        }
    }

    /// Valid site ids in ascending order
    pub fn sorted_ids() -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = Self::ALL.iter().map(Site::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|site| site.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// One row returned by the scraping service.
///
/// Every column is optional: services differ in which fields each board fills in,
/// and a missing column is rendered as absent rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub site: Option<String>,
    pub job_type: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub date_posted: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_number")]
    pub min_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub max_amount: Option<f64>,
    pub currency: Option<String>,
    pub interval: Option<String>,
    /// Kept raw; services send bools, 0/1 or strings here
    pub is_remote: Option<serde_json::Value>,
    pub job_url: Option<String>,
    pub description: Option<String>,
    pub company_industry: Option<String>,
    pub job_level: Option<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub skills: Option<String>,
    pub experience_range: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub company_rating: Option<f64>,
}

impl JobRecord {
    /// Truthiness of the remote column. Absent or null counts as not remote.
    pub fn is_remote(&self) -> bool {
        match &self.is_remote {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(fields)) => !fields.is_empty(),
        }
    }

    /// Both salary bounds, when the row carries a complete range
    pub fn salary_bounds(&self) -> Option<(f64, f64)> {
        Some((self.min_amount?, self.max_amount?))
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;

    let parsed = match &raw {
        Value::Null => return Ok(None),
        Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|ts| ts.date_naive())),
        // Epoch milliseconds, as emitted by dataframe-backed services
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|ts| ts.date_naive()),
        _ => None,
    };

    if parsed.is_none() {
        tracing::debug!(value = %raw, "Dropping unparseable date_posted");
    }
    Ok(parsed)
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;

    let parsed = match &raw {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    };

    if parsed.is_none() {
        tracing::debug!(value = %raw, "Dropping non-numeric column value");
    }
    Ok(parsed)
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::One(s)) => Some(s),
        Some(Raw::Many(items)) => Some(items.join(", ")),
    })
}
