use crate::models::JobRecord;
use crate::search::format::format_amount;

/// Mean salary bounds over the rows that carry a full range
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryStats {
    pub count: usize,
    pub avg_min: f64,
    pub avg_max: f64,
}

/// Aggregate figures reported after the listings
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSummary {
    pub total: usize,
    pub remote: usize,
    pub salary: Option<SalaryStats>,
}

impl SearchSummary {
    pub fn from_jobs(jobs: &[JobRecord]) -> Self {
        let remote = jobs.iter().filter(|job| job.is_remote()).count();

        let ranges: Vec<(f64, f64)> = jobs.iter().filter_map(JobRecord::salary_bounds).collect();
        let salary = if ranges.is_empty() {
            None
        } else {
            let n = ranges.len() as f64;
            Some(SalaryStats {
                count: ranges.len(),
                avg_min: ranges.iter().map(|(min, _)| min).sum::<f64>() / n,
                avg_max: ranges.iter().map(|(_, max)| max).sum::<f64>() / n,
            })
        };

        Self {
            total: jobs.len(),
            remote,
            salary,
        }
    }

    /// Summary section lines, headed by `Search Summary`
    pub fn lines(&self, sites: &[String]) -> Vec<String> {
        let mut lines = vec![
            "Search Summary".to_string(),
            format!("Total jobs found: {}", self.total),
            format!("Sites searched: {}", sites.join(", ")),
            format!("Remote jobs: {}", self.remote),
        ];

        if let Some(stats) = &self.salary {
            lines.push(format!("Jobs with salary info: {}", stats.count));
            lines.push(format!(
                "Average salary range: {} - {}",
                format_amount(stats.avg_min),
                format_amount(stats.avg_max)
            ));
        }

        lines
    }
}
