//! Provider-side records
//!
//! These are the shapes a [`Provider`](crate::provider::Provider) hands to the
//! season pipeline. They are independent of any particular wire format.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekend format of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum EventFormat {
    /// Three practices, qualifying, race
    #[default]
    Conventional,
    /// 2021-2022 sprint weekend (qualifying on Friday)
    Sprint,
    /// 2023 sprint weekend with a sprint shootout
    SprintShootout,
    /// 2024+ sprint weekend with sprint qualifying
    SprintQualifying,
    /// Pre-season testing
    Testing,
}

impl EventFormat {
    /// Wire name as written to the output file
    pub fn as_str(self) -> &'static str {
        match self {
            EventFormat::Conventional => "conventional",
            EventFormat::Sprint => "sprint",
            EventFormat::SprintShootout => "sprint_shootout",
            EventFormat::SprintQualifying => "sprint_qualifying",
            EventFormat::Testing => "testing",
        }
    }

    /// Whether the weekend includes a sprint race
    pub fn is_sprint(self) -> bool {
        matches!(
            self,
            EventFormat::Sprint | EventFormat::SprintShootout | EventFormat::SprintQualifying
        )
    }
}

impl fmt::Display for EventFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positional session column of a schedule row.
///
/// Labels are positional. On sprint weekends `Practice2` and `Practice3`
/// hold the sprint sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionSlot {
    Practice1,
    Practice2,
    Practice3,
    Qualifying,
    Race,
}

impl SessionSlot {
    /// All slots in schedule order
    pub const ALL: [SessionSlot; 5] = [
        SessionSlot::Practice1,
        SessionSlot::Practice2,
        SessionSlot::Practice3,
        SessionSlot::Qualifying,
        SessionSlot::Race,
    ];

    /// Key used in the output `sessions` map
    pub fn label(self) -> &'static str {
        match self {
            SessionSlot::Practice1 => "practice1",
            SessionSlot::Practice2 => "practice2",
            SessionSlot::Practice3 => "practice3",
            SessionSlot::Qualifying => "qualifying",
            SessionSlot::Race => "race",
        }
    }

    /// Zero-based column index
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One row of a season schedule
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScheduleEvent {
    /// Championship round, if the provider supplied one
    pub round: Option<u32>,
    /// Event name (e.g. "Bahrain Grand Prix")
    pub event_name: String,
    /// Host country
    pub country: String,
    /// Town or city
    pub location: String,
    /// Main event day, usually the race date
    pub event_date: Option<NaiveDate>,
    /// Weekend format
    pub format: EventFormat,
    /// Session start times, one per [`SessionSlot`]
    pub session_dates: [Option<NaiveDateTime>; 5],
}

impl ScheduleEvent {
    /// Start time of the given slot, if scheduled
    pub fn session_date(&self, slot: SessionSlot) -> Option<NaiveDateTime> {
        self.session_dates.get(slot.index()).copied().flatten()
    }

    /// Iterate over the slots that have a start time
    pub fn scheduled_sessions(&self) -> impl Iterator<Item = (SessionSlot, NaiveDateTime)> + '_ {
        SessionSlot::ALL
            .into_iter()
            .filter_map(|slot| self.session_date(slot).map(|date| (slot, date)))
    }
}

/// A driver entered in a loaded session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionDriver {
    /// Permanent car number
    pub number: u32,
    /// Three letter abbreviation (e.g. "VER")
    pub abbreviation: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    /// Team name as published for the session
    pub team_name: String,
    /// Team color, hex without leading `#`
    pub team_color: String,
}
