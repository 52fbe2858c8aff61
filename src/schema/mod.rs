//! Provider wire formats
//!
//! Serde models of the HTTP payloads the built-in provider consumes, plus
//! their conversion into provider records ([`ScheduleEvent`],
//! [`SessionDriver`]).
//!
//! # Architecture
//!
//! ```text
//! Jolpica  /{year}.json        ──► ScheduleResponse ──► Vec<ScheduleEvent>
//! OpenF1   /sessions?...        ──► Vec<SessionEntry> ──► session_key of round N
//! OpenF1   /drivers?session_key ──► Vec<DriverEntry>  ──► Vec<SessionDriver>
//! ```
//!
//! [`ScheduleEvent`]: crate::types::ScheduleEvent
//! [`SessionDriver`]: crate::types::SessionDriver

pub mod jolpica;
pub mod openf1;

pub use jolpica::{RaceEntry, ScheduleResponse, SessionTime};
pub use openf1::{DriverEntry, SessionEntry, order_race_sessions};
