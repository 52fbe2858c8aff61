//! Fetch configuration
//!
//! [`FetchConfig`] gathers everything a run needs: which season, where the
//! providers live, where to cache responses and where to write the result.
//! Defaults reproduce a plain `paddock` run with no arguments.

use std::path::PathBuf;
use std::time::Duration;

use crate::{Result, SeasonError};

/// Season fetched when none is given
pub const DEFAULT_YEAR: i32 = 2025;

/// Rounds scanned for driver data when none is given
pub const DEFAULT_MAX_ROUNDS: u32 = 4;

/// Output file written when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "public/f1_season_data.json";

/// Response cache directory used when caching is on
pub const DEFAULT_CACHE_DIR: &str = "f1_cache";

/// Base URLs of the HTTP providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    /// Ergast-compatible schedule API
    pub schedule_url: String,
    /// OpenF1 timing API
    pub timing_url: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            schedule_url: "https://api.jolpi.ca/ergast/f1".to_string(),
            timing_url: "https://api.openf1.org/v1".to_string(),
        }
    }
}

impl ProviderEndpoints {
    /// Point both APIs at the same base URL (useful for mock servers)
    pub fn single(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { schedule_url: base.clone(), timing_url: base }
    }
}

/// Configuration for one season fetch
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// Season to fetch first
    pub year: i32,
    /// Upper bound on rounds tried for driver data
    pub max_rounds: u32,
    /// Where the JSON document is written
    pub output_path: PathBuf,
    /// Response cache directory, `None` disables caching
    pub cache_dir: Option<PathBuf>,
    /// Provider base URLs
    pub endpoints: ProviderEndpoints,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            max_rounds: DEFAULT_MAX_ROUNDS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            cache_dir: Some(PathBuf::from(DEFAULT_CACHE_DIR)),
            endpoints: ProviderEndpoints::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl FetchConfig {
    /// Default configuration for a given season
    pub fn new(year: i32) -> Self {
        Self { year, ..Self::default() }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_cache_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.cache_dir = dir;
        self
    }

    pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Year tried when the configured season has no schedule
    pub fn fallback_year(&self) -> i32 {
        self.year - 1
    }

    /// Reject configurations that cannot produce a run
    pub fn validate(&self) -> Result<()> {
        if !(1950..=2100).contains(&self.year) {
            return Err(SeasonError::config(format!("year {} out of range 1950..=2100", self.year)));
        }
        if self.max_rounds == 0 {
            return Err(SeasonError::config("max_rounds must be at least 1"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(SeasonError::config("output path is empty"));
        }
        for url in [&self.endpoints.schedule_url, &self.endpoints.timing_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(SeasonError::config(format!("endpoint '{url}' is not an http(s) URL")));
            }
        }
        if self.request_timeout.is_zero() {
            return Err(SeasonError::config("request timeout must be non-zero"));
        }
        Ok(())
    }
}
