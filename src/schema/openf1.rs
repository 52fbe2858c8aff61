//! OpenF1 timing payloads
//!
//! OpenF1 answers with bare JSON arrays and uses `null` freely, so every
//! field is optional and defaults apply.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::types::SessionDriver;

/// Entry of `/sessions`
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionEntry {
    pub session_key: Option<u64>,
    pub session_name: Option<String>,
    pub session_type: Option<String>,
    pub meeting_key: Option<u64>,
    /// RFC 3339 start time
    pub date_start: Option<String>,
    pub location: Option<String>,
    pub country_name: Option<String>,
    pub year: Option<i32>,
}

impl SessionEntry {
    /// Parsed start time
    pub fn start(&self) -> Option<DateTime<FixedOffset>> {
        self.date_start.as_deref().and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

/// Entry of `/drivers`
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DriverEntry {
    pub driver_number: Option<u32>,
    pub name_acronym: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// OpenF1 upper-cases the surname here ("Max VERSTAPPEN")
    pub full_name: Option<String>,
    pub broadcast_name: Option<String>,
    pub team_name: Option<String>,
    pub team_colour: Option<String>,
    pub country_code: Option<String>,
    pub session_key: Option<u64>,
}

/// Race sessions ordered by start time; the Nth entry is round N
pub fn order_race_sessions(mut sessions: Vec<SessionEntry>) -> Vec<SessionEntry> {
    sessions.retain(|s| s.session_key.is_some());
    sessions.sort_by_key(|s| {
        let start = s.start();
        (start.is_none(), start)
    });
    sessions
}

impl DriverEntry {
    /// Convert into a provider record.
    ///
    /// Returns `None` for entries that cannot be keyed (no acronym or number)
    /// or that have no team to attach to.
    pub fn into_session_driver(self) -> Option<SessionDriver> {
        let abbreviation = non_empty(self.name_acronym)?.to_uppercase();
        let number = self.driver_number?;
        let team_name = non_empty(self.team_name)?;

        let first_name = non_empty(self.first_name).unwrap_or_default();
        let last_name = non_empty(self.last_name).unwrap_or_default();
        let full_name = match (first_name.is_empty(), last_name.is_empty()) {
            (false, false) => format!("{first_name} {last_name}"),
            _ => non_empty(self.full_name).unwrap_or_else(|| format!("{first_name}{last_name}")),
        };

        let team_color = self
            .team_colour
            .map(|c| c.trim().trim_start_matches('#').to_uppercase())
            .unwrap_or_default();

        Some(SessionDriver {
            number,
            abbreviation,
            first_name,
            last_name,
            full_name,
            team_name,
            team_color,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
