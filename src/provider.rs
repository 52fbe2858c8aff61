//! Provider trait for data sources

use crate::Result;
use crate::types::{ScheduleEvent, SessionDriver};

/// Trait for season data sources
///
/// Providers abstract over where schedule and timing data come from (HTTP
/// APIs, fixtures in tests). The season pipeline calls them strictly in
/// sequence, so implementations may keep state between calls.
#[async_trait::async_trait]
pub trait Provider: Send {
    /// Get the event schedule for a season
    ///
    /// Returns:
    /// - `Ok(events)` - Schedule rows in championship order
    /// - `Err(e)` - Schedule could not be fetched or parsed
    ///
    /// An empty vector is a valid answer; the pipeline decides what it means.
    async fn event_schedule(&mut self, year: i32) -> Result<Vec<ScheduleEvent>>;

    /// Load the drivers entered in the race session of a round
    ///
    /// Returns:
    /// - `Ok(drivers)` - Drivers that took part, possibly empty
    /// - `Err(e)` - Session missing or not yet published
    async fn race_session(&mut self, year: i32, round: u32) -> Result<Vec<SessionDriver>>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
