use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use job_scout::reference::{job_search_tips, lookup_country, supported_countries, supported_sites};
use job_scout::{search_text, Config, JobSpyClient, SearchRequest};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "job-scout")]
#[command(about = "Search job boards and print a readable digest")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search job boards for openings
    Search(SearchArgs),

    /// List supported job board sites
    Sites,

    /// List supported countries for --country
    Countries,

    /// Show tips for effective searches
    Tips,
}

#[derive(Args)]
struct SearchArgs {
    /// Keywords to search for, e.g. "python developer"
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    search_term: String,

    /// City, state or country to search in
    #[arg(short, long)]
    location: Option<String>,

    /// Job board to search (repeatable); defaults to indeed, linkedin, zip_recruiter, google
    #[arg(short, long = "site")]
    sites: Vec<String>,

    /// Number of results wanted
    #[arg(short = 'n', long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    results: u32,

    /// fulltime, parttime, internship or contract
    #[arg(long)]
    job_type: Option<String>,

    /// Only remote positions
    #[arg(long)]
    remote: bool,

    /// Only postings from the last N hours
    #[arg(long)]
    hours_old: Option<u32>,

    /// Search radius in miles
    #[arg(long, default_value_t = 50)]
    distance: u32,

    /// Only quick-apply postings
    #[arg(long)]
    easy_apply: bool,

    /// Market for Indeed and Glassdoor
    #[arg(long, default_value = "usa")]
    country: String,

    /// Fetch full LinkedIn descriptions (slower)
    #[arg(long)]
    linkedin_fetch_description: bool,

    /// Skip this many results
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Scraping service verbosity
    #[arg(long, default_value_t = 1)]
    verbose: u8,

    /// Also write the report to this file
    #[arg(long)]
    save: Option<PathBuf>,
}

impl SearchArgs {
    fn to_request(&self) -> SearchRequest {
        SearchRequest {
            search_term: self.search_term.clone(),
            location: self.location.clone(),
            site_name: (!self.sites.is_empty()).then(|| self.sites.clone()),
            results_wanted: self.results,
            job_type: self.job_type.clone(),
            is_remote: self.remote,
            hours_old: self.hours_old,
            distance: self.distance,
            easy_apply: self.easy_apply,
            country_indeed: self.country.clone(),
            linkedin_fetch_description: self.linkedin_fetch_description,
            offset: self.offset,
            verbose: self.verbose,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => run_search(args).await?,
        Commands::Sites => println!("{}", supported_sites()),
        Commands::Countries => println!("{}", supported_countries()),
        Commands::Tips => println!("{}", job_search_tips()),
    }

    Ok(())
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let config = Config::from_env()?;
    let client = JobSpyClient::new(&config)?;

    if lookup_country(&args.country).is_none() {
        warn!(
            "Unrecognized country '{}'; see `job-scout countries` for accepted values",
            args.country
        );
    }

    info!("🔎 Job Scout - searching via {}", config.jobspy_url);

    let request = args.to_request();
    let report = search_text(&client, &request).await;

    println!("{report}");

    if let Some(path) = &args.save {
        tokio::fs::write(path, &report)
            .await
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("💾 Saved report to {}", path.display());
    }

    Ok(())
}
