//! Jolpica (Ergast-compatible) schedule payloads
//!
//! Only the fields the season pipeline reads are modelled. Everything else in
//! the response is ignored by serde.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{EventFormat, ScheduleEvent};

/// Top-level schedule response (`{year}.json`)
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleResponse {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

/// Ergast envelope
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct MrData {
    /// Total rows available server side
    #[serde(rename = "total")]
    pub total: Option<String>,
    pub race_table: RaceTable,
}

/// List of races for a season
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RaceTable {
    #[serde(rename = "season")]
    pub season: Option<String>,
    pub races: Vec<RaceEntry>,
}

/// One race weekend
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct RaceEntry {
    /// Round number as a string (e.g. "3")
    pub round: Option<String>,
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: CircuitEntry,
    /// Race day, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Race start, `HH:MM:SSZ`
    pub time: Option<String>,
    #[serde(rename = "FirstPractice")]
    pub first_practice: Option<SessionTime>,
    #[serde(rename = "SecondPractice")]
    pub second_practice: Option<SessionTime>,
    #[serde(rename = "ThirdPractice")]
    pub third_practice: Option<SessionTime>,
    #[serde(rename = "Qualifying")]
    pub qualifying: Option<SessionTime>,
    #[serde(rename = "Sprint")]
    pub sprint: Option<SessionTime>,
    #[serde(rename = "SprintQualifying")]
    pub sprint_qualifying: Option<SessionTime>,
    #[serde(rename = "SprintShootout")]
    pub sprint_shootout: Option<SessionTime>,
}

/// Circuit block of a race
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct CircuitEntry {
    pub circuit_id: Option<String>,
    pub circuit_name: Option<String>,
    #[serde(rename = "Location")]
    pub location: LocationEntry,
}

/// Circuit location
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocationEntry {
    pub locality: String,
    pub country: String,
}

/// Start of a session
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionTime {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM:SSZ`, sometimes absent for older seasons
    pub time: Option<String>,
}

impl SessionTime {
    /// Combined start time in UTC
    pub fn start(&self) -> Option<NaiveDateTime> {
        combine(self.date.as_deref(), self.time.as_deref())
    }
}

impl ScheduleResponse {
    /// Convert every race into a provider record, keeping response order
    pub fn into_events(self) -> Vec<ScheduleEvent> {
        self.mr_data.race_table.races.into_iter().map(RaceEntry::into_event).collect()
    }
}

impl RaceEntry {
    /// Weekend format implied by which sprint sessions are present
    pub fn format(&self) -> EventFormat {
        if self.sprint_qualifying.is_some() {
            EventFormat::SprintQualifying
        } else if self.sprint_shootout.is_some() {
            EventFormat::SprintShootout
        } else if self.sprint.is_some() {
            EventFormat::Sprint
        } else {
            EventFormat::Conventional
        }
    }

    /// Session start times in positional slot order for this format
    pub fn session_dates(&self) -> [Option<NaiveDateTime>; 5] {
        let start = |s: &Option<SessionTime>| s.as_ref().and_then(SessionTime::start);
        let race = combine(self.date.as_deref(), self.time.as_deref());

        match self.format() {
            EventFormat::Conventional | EventFormat::Testing => [
                start(&self.first_practice),
                start(&self.second_practice),
                start(&self.third_practice),
                start(&self.qualifying),
                race,
            ],
            EventFormat::SprintQualifying => [
                start(&self.first_practice),
                start(&self.sprint_qualifying),
                start(&self.sprint),
                start(&self.qualifying),
                race,
            ],
            EventFormat::SprintShootout => [
                start(&self.first_practice),
                start(&self.qualifying),
                start(&self.sprint_shootout),
                start(&self.sprint),
                race,
            ],
            EventFormat::Sprint => [
                start(&self.first_practice),
                start(&self.qualifying),
                start(&self.second_practice),
                start(&self.sprint),
                race,
            ],
        }
    }

    /// Convert into a provider record
    pub fn into_event(self) -> ScheduleEvent {
        let round = self.round.as_deref().and_then(|r| r.trim().parse::<u32>().ok());
        let event_date = self.date.as_deref().and_then(parse_date);
        let format = self.format();
        let session_dates = self.session_dates();

        if round.is_none() {
            debug!(race = %self.race_name, raw = ?self.round, "Race has no usable round number");
        }

        ScheduleEvent {
            round,
            event_name: self.race_name,
            country: self.circuit.location.country,
            location: self.circuit.location.locality,
            event_date,
            format,
            session_dates,
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim().trim_end_matches('Z');
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Date plus optional time; a missing time means midnight
fn combine(date: Option<&str>, time: Option<&str>) -> Option<NaiveDateTime> {
    let date = parse_date(date?)?;
    let time = time.and_then(parse_time).unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}
