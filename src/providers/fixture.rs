//! In-memory provider for offline runs and tests

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::provider::Provider;
use crate::types::{ScheduleEvent, SessionDriver};
use crate::{Result, SeasonError};

/// Provider serving canned schedules and sessions.
///
/// Years without a schedule answer with a 404-style status error, rounds
/// without drivers answer with [`SeasonError::NoSessionData`]. Every call is
/// recorded so callers can assert on the order of requests.
#[derive(Debug, Default, Clone)]
pub struct FixtureProvider {
    schedules: HashMap<i32, Vec<ScheduleEvent>>,
    sessions: HashMap<(i32, u32), Vec<SessionDriver>>,
    failing_rounds: HashSet<(i32, u32)>,
    calls: Vec<FixtureCall>,
}

/// A request made against a [`FixtureProvider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureCall {
    Schedule { year: i32 },
    Session { year: i32, round: u32 },
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `events` as the schedule of `year`
    pub fn with_schedule(mut self, year: i32, events: Vec<ScheduleEvent>) -> Self {
        self.schedules.insert(year, events);
        self
    }

    /// Serve `drivers` for the race of `round`
    pub fn with_session(mut self, year: i32, round: u32, drivers: Vec<SessionDriver>) -> Self {
        self.sessions.insert((year, round), drivers);
        self
    }

    /// Make the race of `round` fail even if drivers are registered
    pub fn with_failing_round(mut self, year: i32, round: u32) -> Self {
        self.failing_rounds.insert((year, round));
        self
    }

    /// Requests made so far, oldest first
    pub fn calls(&self) -> &[FixtureCall] {
        &self.calls
    }
}

#[async_trait::async_trait]
impl Provider for FixtureProvider {
    async fn event_schedule(&mut self, year: i32) -> Result<Vec<ScheduleEvent>> {
        trace!(year, "Fixture schedule request");
        self.calls.push(FixtureCall::Schedule { year });

        self.schedules
            .get(&year)
            .cloned()
            .ok_or_else(|| SeasonError::status(format!("fixture://schedule/{year}"), 404))
    }

    async fn race_session(&mut self, year: i32, round: u32) -> Result<Vec<SessionDriver>> {
        trace!(year, round, "Fixture session request");
        self.calls.push(FixtureCall::Session { year, round });

        if self.failing_rounds.contains(&(year, round)) {
            return Err(SeasonError::status(format!("fixture://session/{year}/{round}"), 500));
        }

        self.sessions
            .get(&(year, round))
            .cloned()
            .ok_or_else(|| SeasonError::no_session_data(year, round))
    }

    fn name(&self) -> &str {
        "fixture"
    }
}
