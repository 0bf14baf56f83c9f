use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use geofinder::api::{DEFAULT_LIMIT, NOMINATIM_URL, NominatimClient, SearchParams, USER_AGENT, join_query};
use geofinder::config::FileConfig;
use geofinder::render::{OutputMode, print_results};

const USAGE: &str = "usage: geofinder [options] <location>";

/// Look up place names and coordinates using OpenStreetMap Nominatim
///
/// Examples:
///   # List up to five matches
///   geofinder Enfield
///
///   # Restrict to Ireland and print only the best match's coordinates
///   geofinder --country ie --concise Enfield
///
///   # Multi-word queries need no quoting
///   geofinder --limit 3 San Francisco
#[derive(Parser, Debug)]
#[command(name = "geofinder")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches geofinder.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of results [default: 5]
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Country code filter (e.g. ie, gb, us)
    #[arg(short = 'c', long)]
    country: Option<String>,

    /// Print only the first result's coordinates
    #[arg(long)]
    concise: bool,

    /// Print request details to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Location to search for; words are joined with spaces.
    /// Everything after the first word is part of the query, flags included.
    #[arg(trailing_var_arg = true)]
    location: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let query = join_query(&args.location);
    if query.trim().is_empty() {
        println!("{}", USAGE);
        return Ok(ExitCode::FAILURE);
    }

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::load_from(config_path)?),
        None => FileConfig::load(),
    };
    let file_config = file_config.unwrap_or_default();

    let limit = args.limit.or(file_config.limit).unwrap_or(DEFAULT_LIMIT);
    let country = args.country.clone().or_else(|| file_config.country.clone());
    let endpoint = file_config.endpoint.as_deref().unwrap_or(NOMINATIM_URL);
    let user_agent = file_config.user_agent.as_deref().unwrap_or(USER_AGENT);
    let verbose = args.verbose || file_config.verbose;
    let mode = OutputMode::from_concise(args.concise);

    let params = SearchParams::new(query)
        .with_limit(limit)
        .with_country(country);

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Query: {}", params.query);
        eprintln!("  Limit: {}", params.limit);
        eprintln!(
            "  Country: {}",
            params.country.as_deref().unwrap_or("(any)")
        );
        eprintln!("  Mode: {:?}", mode);
        eprintln!("  Endpoint: {}", endpoint);
        eprintln!("  User-Agent: {}", user_agent);
        if let Some(timeout) = file_config.timeout() {
            eprintln!("  Timeout: {}s", timeout.as_secs());
        }
        eprintln!();
    }

    let client = match NominatimClient::new(endpoint, user_agent, file_config.timeout()) {
        Ok(client) => client,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::SUCCESS);
        }
    };

    if verbose && let Ok(request) = client.request(&params) {
        eprintln!("GET {}", request.url());
    }

    let spinner = create_spinner("Searching Nominatim...");
    let start = Instant::now();
    let result = client.search(&params);
    spinner.finish_and_clear();

    let locations = match result {
        Ok(locations) => locations,
        Err(e) => {
            // Search failures are reported, not propagated: exit status stays 0
            println!("{}", e);
            return Ok(ExitCode::SUCCESS);
        }
    };

    if verbose {
        eprintln!(
            "Received {} result(s) [{:.1}s]",
            locations.len(),
            start.elapsed().as_secs_f32()
        );
    }

    let stdout = std::io::stdout();
    print_results(&locations, mode, &mut stdout.lock())?;

    Ok(ExitCode::SUCCESS)
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
