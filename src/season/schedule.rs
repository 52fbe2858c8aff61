//! Schedule fetch with year fallback, and race building

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::provider::Provider;
use crate::types::{Race, ScheduleEvent};
use crate::{Result, SeasonError};

/// Output format of race dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Output format of session timestamps
pub const SESSION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fetch the schedule for `year`, retrying once with `year - 1`.
///
/// An empty schedule counts as a failure. Returns the year that succeeded
/// together with its events.
pub async fn fetch_schedule<P>(provider: &mut P, year: i32) -> Result<(i32, Vec<ScheduleEvent>)>
where
    P: Provider + ?Sized,
{
    let first = match fetch_non_empty(provider, year).await {
        Ok(events) => return Ok((year, events)),
        Err(e) => e,
    };

    let fallback_year = year - 1;
    warn!("Error fetching {} schedule: {}", year, first);
    warn!("The {} season data might not be fully available yet. Trying {} data...", year, fallback_year);

    match fetch_non_empty(provider, fallback_year).await {
        Ok(events) => {
            info!("Using {} schedule instead of {}", fallback_year, year);
            Ok((fallback_year, events))
        }
        Err(second) => Err(SeasonError::schedule_unavailable(year, fallback_year, first, second)),
    }
}

async fn fetch_non_empty<P>(provider: &mut P, year: i32) -> Result<Vec<ScheduleEvent>>
where
    P: Provider + ?Sized,
{
    let events = provider.event_schedule(year).await?;
    if events.is_empty() {
        return Err(SeasonError::EmptySchedule { year });
    }
    Ok(events)
}

/// Build one [`Race`] per schedule row, keeping fetch order.
///
/// Rows without a round number get their 1-based position.
pub fn build_races(events: &[ScheduleEvent]) -> Vec<Race> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let fallback_round = u32::try_from(index + 1).unwrap_or(u32::MAX);
            build_race(event, fallback_round)
        })
        .collect()
}

fn build_race(event: &ScheduleEvent, fallback_round: u32) -> Race {
    let sessions: IndexMap<String, String> = event
        .scheduled_sessions()
        .map(|(slot, start)| (slot.label().to_string(), start.format(SESSION_FORMAT).to_string()))
        .collect();

    Race {
        round: event.round.unwrap_or(fallback_round),
        name: event.event_name.clone(),
        country: event.country.clone(),
        location: event.location.clone(),
        circuit: event.event_name.clone(),
        date: event.event_date.map(|d| d.format(DATE_FORMAT).to_string()),
        format: event.format,
        sessions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{FixtureCall, FixtureProvider};
    use crate::types::EventFormat;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn event(name: &str, round: Option<u32>) -> ScheduleEvent {
        ScheduleEvent {
            round,
            event_name: name.to_string(),
            country: "Country".to_string(),
            location: "Town".to_string(),
            event_date: NaiveDate::from_ymd_opt(2025, 3, 16),
            format: EventFormat::Conventional,
            session_dates: [None; 5],
        }
    }

    #[tokio::test]
    async fn uses_target_year_when_available() -> Result<()> {
        let mut provider = FixtureProvider::new().with_schedule(2025, vec![event("A", Some(1))]);

        let (year, events) = fetch_schedule(&mut provider, 2025).await?;
        assert_eq!(year, 2025);
        assert_eq!(events.len(), 1);
        assert_eq!(provider.calls(), [FixtureCall::Schedule { year: 2025 }]);
        Ok(())
    }

    #[tokio::test]
    async fn falls_back_to_previous_year() -> Result<()> {
        let mut provider = FixtureProvider::new().with_schedule(2024, vec![event("B", Some(1))]);

        let (year, events) = fetch_schedule(&mut provider, 2025).await?;
        assert_eq!(year, 2024);
        assert_eq!(events[0].event_name, "B");
        assert_eq!(
            provider.calls(),
            [FixtureCall::Schedule { year: 2025 }, FixtureCall::Schedule { year: 2024 }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn empty_schedule_triggers_fallback() -> Result<()> {
        let mut provider = FixtureProvider::new()
            .with_schedule(2025, vec![])
            .with_schedule(2024, vec![event("C", Some(1))]);

        let (year, _) = fetch_schedule(&mut provider, 2025).await?;
        assert_eq!(year, 2024);
        Ok(())
    }

    #[tokio::test]
    async fn both_years_failing_is_fatal() {
        let mut provider = FixtureProvider::new().with_schedule(2025, vec![]);

        let err = fetch_schedule(&mut provider, 2025).await.unwrap_err();
        match err {
            SeasonError::ScheduleUnavailable { year, fallback_year, first, source } => {
                assert_eq!((year, fallback_year), (2025, 2024));
                assert!(matches!(*first, SeasonError::EmptySchedule { year: 2025 }));
                assert!(matches!(*source, SeasonError::Status { status: 404, .. }));
            }
            other => panic!("Expected ScheduleUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn missing_round_defaults_to_position() {
        let races = build_races(&[event("A", Some(1)), event("B", None), event("C", Some(7))]);
        let rounds: Vec<_> = races.iter().map(|r| r.round).collect();
        assert_eq!(rounds, [1, 2, 7]);
    }

    #[test]
    fn missing_event_date_gives_null_date() {
        let mut row = event("Dateless Grand Prix", Some(3));
        row.event_date = None;

        let races = build_races(&[row]);
        assert_eq!(races[0].date, None);
        assert_eq!(races[0].circuit, "Dateless Grand Prix");
    }

    #[test]
    fn session_timestamps_use_output_format() {
        let mut row = event("A", Some(1));
        row.session_dates[3] = NaiveDate::from_ymd_opt(2025, 3, 15).and_then(|d| d.and_hms_opt(5, 0, 0));

        let races = build_races(&[row]);
        assert_eq!(races[0].date.as_deref(), Some("2025-03-16"));
        assert_eq!(races[0].sessions.get("qualifying").map(String::as_str), Some("2025-03-15 05:00:00"));
        assert_eq!(races[0].sessions.len(), 1);
    }

    fn arb_slot_dates() -> impl Strategy<Value = [Option<chrono::NaiveDateTime>; 5]> {
        let date = (0i64..400, 0u32..86_400).prop_map(|(days, secs)| {
            NaiveDate::from_ymd_opt(2025, 1, 1)
                .and_then(|d| d.checked_add_signed(chrono::Duration::days(days)))
                .and_then(|d| d.and_hms_opt(secs / 3600, (secs / 60) % 60, secs % 60))
        });
        prop::array::uniform5(prop::option::of(date)).prop_map(|slots| slots.map(Option::flatten))
    }

    proptest! {
        #[test]
        fn sessions_only_hold_present_slots(dates in prop::collection::vec(arb_slot_dates(), 1..25)) {
            let events: Vec<_> = dates
                .iter()
                .map(|slots| ScheduleEvent { session_dates: *slots, ..event("E", None) })
                .collect();

            let races = build_races(&events);
            prop_assert_eq!(races.len(), events.len());

            for (race, source) in races.iter().zip(&events) {
                let expected: Vec<&str> = source.scheduled_sessions().map(|(s, _)| s.label()).collect();
                let actual: Vec<&str> = race.sessions.keys().map(String::as_str).collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
