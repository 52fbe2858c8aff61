//! Core types for season data.
//!
//! Two families of types live here:
//! - provider records ([`ScheduleEvent`], [`SessionDriver`]) returned by a
//!   [`Provider`](crate::provider::Provider), independent of wire format
//! - the output model ([`SeasonData`] and its entities) written for the front-end
//!
//! ## Usage Example
//!
//! ```rust
//! use paddock::types::{SeasonData, Team};
//!
//! let mut season = SeasonData::new(2025);
//! season.teams.insert("Ferrari".to_string(), Team::new("Ferrari", "E8002D"));
//!
//! assert_eq!(season.summary().teams, 1);
//! ```

mod schedule;
mod season;

pub use schedule::{EventFormat, ScheduleEvent, SessionDriver, SessionSlot};
pub use season::{Circuit, Driver, Race, SeasonData, SeasonSummary, Team};
