use crate::models::JobRecord;

/// Longest description rendered in a listing, in characters
pub const DESCRIPTION_LIMIT: usize = 300;

/// Shorten a description to [`DESCRIPTION_LIMIT`] characters plus an ellipsis
pub fn trim_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Round to a whole number and group thousands with commas: `85000.4` -> `85,000`
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}

/// Capitalize the first letter of each alphabetic run: `zip_recruiter` -> `Zip_Recruiter`
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

/// Render `['a', 'b']`
pub fn quoted_list<S: AsRef<str>>(items: &[S]) -> String {
    let inner: Vec<String> = items.iter().map(|s| format!("'{}'", s.as_ref())).collect();
    format!("[{}]", inner.join(", "))
}

/// Lines describing one job, in display order. Absent fields are skipped.
pub fn listing_lines(index: usize, job: &JobRecord) -> Vec<String> {
    let or_na = |field: &Option<String>| field.clone().unwrap_or_else(|| "N/A".to_string());

    let mut lines = vec![
        format!("{}. {}", index, or_na(&job.title)),
        format!("Company: {}", or_na(&job.company)),
        format!("Location: {}", or_na(&job.location)),
        format!("Source: {}", title_case(&or_na(&job.site))),
    ];

    if let Some(job_type) = &job.job_type {
        lines.push(format!("Type: {job_type}"));
    }
    if let Some(posted) = job.date_posted {
        lines.push(format!("Posted: {}", posted.format("%Y-%m-%d")));
    }

    if let Some((min, max)) = job.salary_bounds() {
        lines.push(format!(
            "Salary: {} - {} {} ({})",
            format_amount(min),
            format_amount(max),
            job.currency.as_deref().unwrap_or("USD"),
            job.interval.as_deref().unwrap_or("yearly"),
        ));
    }

    if job.is_remote() {
        lines.push("Remote work available".to_string());
    }
    if let Some(url) = &job.job_url {
        lines.push(format!("Apply: {url}"));
    }
    if let Some(description) = &job.description {
        lines.push(format!("Description: {}", trim_description(description)));
    }

    if let Some(industry) = &job.company_industry {
        lines.push(format!("Industry: {industry}"));
    }
    if let Some(level) = &job.job_level {
        lines.push(format!("Level: {level}"));
    }
    if let Some(skills) = &job.skills {
        lines.push(format!("Skills: {skills}"));
    }
    if let Some(experience) = &job.experience_range {
        lines.push(format!("Experience: {experience}"));
    }
    if let Some(rating) = job.company_rating {
        lines.push(format!("Company Rating: {rating:?}/5"));
    }

    lines
}

/// One rendered listing block
pub fn listing_block(index: usize, job: &JobRecord) -> String {
    listing_lines(index, job).join("\n")
}
