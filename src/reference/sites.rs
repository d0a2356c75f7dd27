use crate::models::Site;

const USAGE_TIPS: [&str; 4] = [
    "- Start with ['indeed', 'zip_recruiter'] for broad US coverage.",
    "- Combine ['indeed', 'linkedin', 'glassdoor', 'google'] for a wide net.",
    "- Include regional sites like 'bayt', 'naukri', or 'bdjobs' for specific markets.",
    "- LinkedIn has the strictest rate limits; Indeed is generally the most reliable.",
];

/// Describe every supported job board, followed by usage tips
pub fn supported_sites() -> String {
    let mut lines = vec!["Supported Job Board Sites".to_string(), String::new()];

    lines.extend(
        Site::ALL
            .iter()
            .map(|site| format!("- {}: {}", site, site.description())),
    );

    lines.push(String::new());
    lines.push("Usage Tips".to_string());
    lines.extend(USAGE_TIPS.iter().map(|tip| tip.to_string()));

    lines.join("\n")
}
