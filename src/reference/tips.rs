/// Guidance for writing effective searches, shown verbatim to the user
pub const JOB_SEARCH_TIPS: &str = r#"JobSpy Job Search Tips and Best Practices

Search Term Optimization
- Be specific: e.g. 'python developer' instead of 'developer'.
- Use quotes for exact phrases such as "machine learning engineer".
- Try variations like 'software engineer' or 'software developer'.
- Include technologies: 'React developer', 'AWS engineer'.
- Consider seniority levels: 'senior', 'junior', 'lead'.

Location Strategies
- Remote jobs: set is_remote=True or location='Remote'.
- Specific cities: e.g. 'San Francisco, CA' or 'New York, NY'.
- State or country searches: 'California', 'Texas', 'United Kingdom'.
- Run separate searches for multiple locations.

Site Selection Guide
- Begin with a couple of reliable sites to validate a search.
- Indeed is reliable with broader coverage.
- LinkedIn offers quality results but strict rate limits.
- ZipRecruiter is strong for US and Canada roles.
- Google rewards very specific search terms.

Performance Tips
- Start with 10-20 results and increase only if needed.
- Use hours_old to focus on recent postings (24, 48, 72).
- Enable linkedin_fetch_description only when you need full text.
- Offset helps paginate through large result sets.

Advanced Filtering
- job_type supports fulltime, parttime, internship, contract.
- easy_apply filters for quick-apply postings.
- distance sets the search radius for location-based queries.
- country_indeed alters the target market for Indeed and Glassdoor.

Common Issues and Fixes
- No results: broaden search terms or choose different sites.
- Rate limiting: reduce results_wanted and add time between runs.
- LinkedIn blocks: lower frequency or rotate proxies.
- Slow searches: disable LinkedIn description fetching.

Sample Searches
Remote work:
  search_term='software engineer'
  location='Remote'
  is_remote=True
  site_name=['indeed', 'zip_recruiter']

Local jobs:
  search_term='marketing manager'
  location='Austin, TX'
  distance=25
  site_name=['indeed', 'glassdoor']

Recent postings:
  search_term='data scientist'
  hours_old=48
  site_name=['linkedin', 'indeed']
  linkedin_fetch_description=True

Entry-level focus:
  search_term='junior developer OR entry level programmer'
  job_type='fulltime'
  easy_apply=True

Iterative Search Process
1. Start broad with a small set of sites.
2. Review the initial results for signal.
3. Adjust keywords or filters based on what you see.
4. Expand to more sites if coverage looks thin.
5. Compare results across job boards for variety.

Happy job hunting!"#;

pub fn job_search_tips() -> &'static str {
    JOB_SEARCH_TIPS
}
