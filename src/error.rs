//! Error types for season data fetching.
//!
//! All errors implement the `std::error::Error` trait and carry enough
//! structured context (URL, year, round, path) to tell which step of the
//! fetch, normalize, write pipeline failed.
//!
//! ## Error Categories
//!
//! - **Transport Errors**: the HTTP request could not be completed
//! - **Status Errors**: the provider answered with a non-success status
//! - **Parse Errors**: a provider payload did not match the expected shape
//! - **Data Errors**: a schedule or session exists but holds nothing usable
//! - **File Errors**: the output file or cache could not be written
//!
//! ## Recovery and Retry
//!
//! ```rust
//! use paddock::SeasonError;
//!
//! let error = SeasonError::no_session_data(2025, 3);
//! if !error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for season operations.
pub type Result<T, E = SeasonError> = std::result::Result<T, E>;

/// Main error type for season operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SeasonError {
    #[error("Request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Provider returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Schedule for {year} contains no events")]
    EmptySchedule { year: i32 },

    #[error("No session data for {year} round {round}")]
    NoSessionData { year: i32, round: u32 },

    #[error("Schedule unavailable for {year} and fallback year {fallback_year}")]
    ScheduleUnavailable {
        year: i32,
        fallback_year: i32,
        /// Why the first attempt failed
        first: Box<SeasonError>,
        #[source]
        source: Box<SeasonError>,
    },

    #[error("File error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {context}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

impl SeasonError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            SeasonError::Http { .. } => true,
            SeasonError::Status { status, .. } => *status == 429 || *status >= 500,
            SeasonError::Parse { .. } => false,
            SeasonError::EmptySchedule { .. } => false,
            SeasonError::NoSessionData { .. } => false,
            SeasonError::ScheduleUnavailable { source, .. } => source.is_retryable(),
            SeasonError::File { .. } => false,
            SeasonError::Json { .. } => false,
            SeasonError::Config { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            SeasonError::Http { .. } => vec![
                "Check network connectivity",
                "Verify the provider base URL",
                "Try again later",
            ],
            SeasonError::Status { .. } => vec![
                "Check the provider status page",
                "Reduce request rate if rate limited",
                "Verify the requested season exists",
            ],
            SeasonError::Parse { .. } => vec![
                "Check provider API version compatibility",
                "Clear the response cache directory",
            ],
            SeasonError::EmptySchedule { .. } => vec![
                "Season may not be published yet",
                "Request an earlier season year",
            ],
            SeasonError::NoSessionData { .. } => vec![
                "Race may not have taken place yet",
                "Timing data is usually published shortly after the session",
            ],
            SeasonError::ScheduleUnavailable { .. } => vec![
                "Check network connectivity",
                "Request a season year with published data",
                "Clear the response cache directory",
            ],
            SeasonError::File { .. } => vec![
                "Check the output directory exists and is writable",
                "Check file permissions",
                "Ensure sufficient disk space",
            ],
            SeasonError::Json { .. } => vec![
                "Verify source data integrity",
                "Clear the response cache directory",
            ],
            SeasonError::Config { .. } => vec![
                "Check command line arguments",
                "Check PADDOCK_* environment variables",
            ],
        }
    }

    /// Helper constructor for transport errors with URL context.
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        SeasonError::Http { url: url.into(), source }
    }

    /// Helper constructor for non-success HTTP statuses.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        SeasonError::Status { url: url.into(), status }
    }

    /// Helper constructor for parse errors.
    pub fn parse(context: impl Into<String>, details: impl Into<String>) -> Self {
        SeasonError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SeasonError::File { path: path.into(), source }
    }

    /// Helper constructor for JSON errors.
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        SeasonError::Json { context: context.into(), source }
    }

    /// Helper constructor for a session with no usable drivers.
    pub fn no_session_data(year: i32, round: u32) -> Self {
        SeasonError::NoSessionData { year, round }
    }

    /// Helper constructor for configuration errors.
    pub fn config(reason: impl Into<String>) -> Self {
        SeasonError::Config { reason: reason.into() }
    }

    /// Helper constructor for a schedule that failed for both years.
    pub fn schedule_unavailable(
        year: i32,
        fallback_year: i32,
        first: SeasonError,
        second: SeasonError,
    ) -> Self {
        SeasonError::ScheduleUnavailable {
            year,
            fallback_year,
            first: Box::new(first),
            source: Box::new(second),
        }
    }
}

impl From<std::io::Error> for SeasonError {
    fn from(err: std::io::Error) -> Self {
        SeasonError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
