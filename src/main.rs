//! paddock - Formula 1 season data fetcher
//!
//! Running with no arguments fetches the 2025 season (falling back to 2024)
//! and writes `public/f1_season_data.json`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paddock::config::{DEFAULT_CACHE_DIR, DEFAULT_MAX_ROUNDS, DEFAULT_OUTPUT_PATH, DEFAULT_YEAR};
use paddock::{FetchConfig, Paddock, ProviderEndpoints};

#[derive(Parser, Debug)]
#[command(name = "paddock")]
#[command(about = "Fetch a Formula 1 season schedule with drivers, teams and circuits into JSON")]
#[command(version)]
struct Cli {
    /// Season to fetch (the previous season is tried if it has no schedule)
    #[arg(long, env = "PADDOCK_YEAR", default_value_t = DEFAULT_YEAR)]
    year: i32,

    /// Output JSON file
    #[arg(short, long, env = "PADDOCK_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Response cache directory
    #[arg(long, env = "PADDOCK_CACHE_DIR", default_value = DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,

    /// Do not read or write the response cache
    #[arg(long, env = "PADDOCK_NO_CACHE")]
    no_cache: bool,

    /// Maximum number of rounds tried for driver data
    #[arg(long, env = "PADDOCK_MAX_ROUNDS", default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    /// Schedule API base URL (Ergast-compatible)
    #[arg(long, env = "PADDOCK_SCHEDULE_URL")]
    schedule_url: Option<String>,

    /// Timing API base URL (OpenF1-compatible)
    #[arg(long, env = "PADDOCK_TIMING_URL")]
    timing_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "PADDOCK_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn to_config(&self) -> FetchConfig {
        let defaults = ProviderEndpoints::default();
        let endpoints = ProviderEndpoints {
            schedule_url: self.schedule_url.clone().unwrap_or(defaults.schedule_url),
            timing_url: self.timing_url.clone().unwrap_or(defaults.timing_url),
        };

        FetchConfig::new(self.year)
            .with_output_path(self.output.clone())
            .with_cache_dir((!self.no_cache).then(|| self.cache_dir.clone()))
            .with_max_rounds(self.max_rounds)
            .with_endpoints(endpoints)
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("paddock={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.to_config();

    let summary = match Paddock::run(&config).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("{}", e);
            for suggestion in e.recovery_suggestions() {
                error!("  - {}", suggestion);
            }
            return Err(e).context("Season fetch failed");
        }
    };

    println!("{}", paddock::writer::format_summary(&config.output_path, &summary));
    println!("\nF1 season data successfully fetched and saved!");
    Ok(())
}
