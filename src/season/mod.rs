//! Season pipeline
//!
//! Turns provider records into a [`SeasonData`] document in four steps:
//!
//! ```text
//! fetch_schedule ──► build_races ──► extract_roster ──► extract_circuits
//! (year, year-1)     (races)         (drivers, teams)   (circuits)
//! ```
//!
//! Every step runs in sequence against a single [`Provider`]. Only a
//! schedule failure for both years aborts the run; roster failures degrade to
//! static team data.

mod circuits;
mod roster;
mod schedule;

pub use circuits::extract_circuits;
pub use roster::{FALLBACK_TEAMS, RosterSource, add_session_driver, extract_roster, fallback_teams};
pub use schedule::{DATE_FORMAT, SESSION_FORMAT, build_races, fetch_schedule};

use tracing::info;

use crate::config::DEFAULT_MAX_ROUNDS;
use crate::provider::Provider;
use crate::types::SeasonData;
use crate::Result;

/// Runs the season pipeline against a provider
pub struct SeasonFetcher<P> {
    provider: P,
    max_rounds: u32,
    last_roster: Option<RosterSource>,
}

impl<P: Provider> SeasonFetcher<P> {
    /// Create a fetcher scanning the default number of rounds
    pub fn new(provider: P) -> Self {
        Self { provider, max_rounds: DEFAULT_MAX_ROUNDS, last_roster: None }
    }

    /// Limit how many rounds are tried for driver data
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Fetch and normalize a season.
    ///
    /// # Errors
    ///
    /// Returns [`SeasonError::ScheduleUnavailable`](crate::SeasonError::ScheduleUnavailable)
    /// if neither `year` nor `year - 1` has a schedule.
    pub async fn fetch(&mut self, year: i32) -> Result<SeasonData> {
        info!("Fetching F1 {} season data from {}...", year, self.provider.name());

        let (year, events) = fetch_schedule(&mut self.provider, year).await?;

        let mut season = SeasonData::new(year);
        season.races = build_races(&events);

        let roster = extract_roster(&mut self.provider, &mut season, self.max_rounds).await;
        self.last_roster = Some(roster);

        season.circuits = extract_circuits(&season.races);

        let summary = season.summary();
        info!(
            year = season.year,
            races = summary.races,
            drivers = summary.drivers,
            teams = summary.teams,
            circuits = summary.circuits,
            "Season assembled"
        );

        Ok(season)
    }

    /// Roster source of the last successful fetch
    pub fn last_roster(&self) -> Option<RosterSource> {
        self.last_roster
    }

    /// Borrow the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Give back the provider
    pub fn into_provider(self) -> P {
        self.provider
    }
}
