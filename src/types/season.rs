//! Season output model
//!
//! This is the document written for the front-end. Field names are camelCase
//! and maps keep insertion order so teams and drivers appear in fetch order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::EventFormat;

/// Complete season document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
pub struct SeasonData {
    /// Season year actually fetched (may be the fallback year)
    pub year: i32,
    /// Races in schedule order
    pub races: Vec<Race>,
    /// Drivers keyed by three letter code
    pub drivers: IndexMap<String, Driver>,
    /// Teams keyed by name
    pub teams: IndexMap<String, Team>,
    /// Circuits keyed by event name
    pub circuits: IndexMap<String, Circuit>,
}

impl SeasonData {
    /// Empty document for a season
    pub fn new(year: i32) -> Self {
        Self { year, ..Default::default() }
    }

    /// Counts of each entity, for summaries and logs
    pub fn summary(&self) -> SeasonSummary {
        SeasonSummary {
            races: self.races.len(),
            drivers: self.drivers.len(),
            teams: self.teams.len(),
            circuits: self.circuits.len(),
        }
    }
}

/// One race weekend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
pub struct Race {
    pub round: u32,
    pub name: String,
    pub country: String,
    pub location: String,
    /// Same as `name`; kept because the front-end reads it
    pub circuit: String,
    /// `YYYY-MM-DD`, `null` when the provider had no event date
    pub date: Option<String>,
    pub format: EventFormat,
    /// Session label to `YYYY-MM-DD HH:MM:SS`, only for scheduled sessions
    pub sessions: IndexMap<String, String>,
}

/// Driver entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub number: u32,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    /// Name of an entry in [`SeasonData::teams`]
    pub team: String,
    pub team_color: String,
}

/// Team entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
pub struct Team {
    pub name: String,
    pub color: String,
    /// Driver codes, no duplicates
    pub drivers: Vec<String>,
}

impl Team {
    /// Team with no drivers yet
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { name: name.into(), color: color.into(), drivers: Vec::new() }
    }

    /// Add a driver code unless already listed. Returns true if added.
    pub fn add_driver(&mut self, code: &str) -> bool {
        if self.drivers.iter().any(|c| c == code) {
            return false;
        }
        self.drivers.push(code.to_string());
        true
    }
}

/// Circuit entry.
///
/// Keyed by event name, not by a real circuit identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
pub struct Circuit {
    pub name: String,
    pub location: String,
    pub country: String,
}

/// Entity counts of a [`SeasonData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeasonSummary {
    pub races: usize,
    pub drivers: usize,
    pub teams: usize,
    pub circuits: usize,
}
