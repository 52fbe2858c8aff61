//! Formula 1 season data for front-end consumption.
//!
//! Paddock fetches a season schedule plus driver, team and circuit metadata
//! from public motorsport data providers and writes it as a single JSON
//! document.
//!
//! # Features
//!
//! - **Year fallback**: if the requested season has no schedule yet, the
//!   previous season is used
//! - **Resilient roster**: driver/team data comes from the first race that has
//!   results, with a static team list when none has
//! - **Response cache**: provider responses are kept on disk between runs
//! - **Pluggable sources**: anything implementing [`Provider`] can feed the
//!   pipeline
//!
//! ## Example
//!
//! ```rust,no_run
//! use paddock::{FetchConfig, Paddock};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> paddock::Result<()> {
//!     let config = FetchConfig::new(2025).with_output_path("season.json");
//!     let summary = Paddock::run(&config).await?;
//!     println!("{} races", summary.races);
//!     Ok(())
//! }
//! ```
//!
//! ## Example (custom provider)
//!
//! ```rust
//! use paddock::providers::FixtureProvider;
//! use paddock::season::SeasonFetcher;
//! use paddock::types::ScheduleEvent;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> paddock::Result<()> {
//! let provider = FixtureProvider::new().with_schedule(
//!     2024,
//!     vec![ScheduleEvent { event_name: "Bahrain Grand Prix".into(), ..Default::default() }],
//! );
//!
//! let season = SeasonFetcher::new(provider).fetch(2025).await?;
//! assert_eq!(season.year, 2024);
//! assert_eq!(season.teams.len(), 10);
//! # Ok(())
//! # }
//! ```

// Core types and error handling
pub mod config;
mod error;
pub mod types;

// Data sources
pub mod cache;
pub mod provider;
pub mod providers;
pub mod schema;

// Pipeline and output
pub mod season;
pub mod writer;

// Core exports
pub use config::{FetchConfig, ProviderEndpoints};
pub use error::*;
pub use provider::Provider;
pub use types::{SeasonData, SeasonSummary};

use providers::HttpProvider;
use season::SeasonFetcher;

/// Unified entry point for season fetches.
///
/// Wires the HTTP provider, the season pipeline and the writer together the
/// way the `paddock` binary uses them.
pub struct Paddock;

impl Paddock {
    /// Fetch and normalize a season from the public providers.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - Neither the configured year nor the year before has a schedule
    pub async fn fetch(config: &FetchConfig) -> Result<SeasonData> {
        config.validate()?;

        let provider = HttpProvider::new(config)?;
        SeasonFetcher::new(provider).with_max_rounds(config.max_rounds).fetch(config.year).await
    }

    /// Fetch a season and write it to the configured output path.
    ///
    /// Nothing is written when the fetch fails.
    pub async fn run(config: &FetchConfig) -> Result<SeasonSummary> {
        let season = Self::fetch(config).await?;
        writer::write_season(&season, &config.output_path).await
    }
}
