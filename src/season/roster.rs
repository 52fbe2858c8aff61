//! Driver and team extraction from race sessions

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::provider::Provider;
use crate::types::{Driver, SeasonData, SessionDriver, Team};
use crate::SeasonError;

/// Teams used when no session could be loaded (2024 grid)
pub const FALLBACK_TEAMS: [(&str, &str); 10] = [
    ("Red Bull Racing", "3671C6"),
    ("Mercedes", "27F4D2"),
    ("Ferrari", "E8002D"),
    ("McLaren", "FF8000"),
    ("Aston Martin", "229971"),
    ("Alpine", "FF87BC"),
    ("Williams", "64C4FF"),
    ("RB", "6692FF"),
    ("Kick Sauber", "52E252"),
    ("Haas F1 Team", "B6BABD"),
];

/// Where the roster came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSource {
    /// Drivers and teams from the race session of this round
    Session { round: u32 },
    /// Static team list, no drivers
    Fallback,
}

/// The static fallback team map
pub fn fallback_teams() -> IndexMap<String, Team> {
    FALLBACK_TEAMS
        .iter()
        .map(|(name, color)| (name.to_string(), Team::new(*name, *color)))
        .collect()
}

/// Fill `season.drivers` and `season.teams` from the first race session of
/// rounds `1..=min(max_rounds, race count)` that loads with drivers.
///
/// Falls back to [`fallback_teams`] with no drivers when every attempt fails.
pub async fn extract_roster<P>(provider: &mut P, season: &mut SeasonData, max_rounds: u32) -> RosterSource
where
    P: Provider + ?Sized,
{
    info!("Fetching driver and team information...");

    let race_count = u32::try_from(season.races.len()).unwrap_or(u32::MAX);
    let last_round = max_rounds.min(race_count);

    for round in 1..=last_round {
        let loaded = provider.race_session(season.year, round).await.and_then(|drivers| {
            if drivers.is_empty() {
                Err(SeasonError::no_session_data(season.year, round))
            } else {
                Ok(drivers)
            }
        });

        match loaded {
            Ok(drivers) => {
                for driver in &drivers {
                    add_session_driver(season, driver);
                }
                info!("Successfully loaded driver/team data from race {}", round);
                return RosterSource::Session { round };
            }
            Err(e) => warn!("Could not load race {}: {}", round, e),
        }
    }

    warn!("Could not fetch detailed driver/team data after {} attempt(s)", last_round);
    info!("Using static 2024 team data as fallback...");
    season.teams = fallback_teams();
    RosterSource::Fallback
}

/// Register a session driver and their team.
///
/// Drivers already present are left untouched, so the first session seen
/// wins. A new driver creates their team on first sight (color from the
/// driver) and is appended to that team's list.
pub fn add_session_driver(season: &mut SeasonData, driver: &SessionDriver) {
    let code = &driver.abbreviation;
    if season.drivers.contains_key(code) {
        return;
    }

    season.drivers.insert(
        code.clone(),
        Driver {
            number: driver.number,
            code: code.clone(),
            first_name: driver.first_name.clone(),
            last_name: driver.last_name.clone(),
            full_name: driver.full_name.clone(),
            team: driver.team_name.clone(),
            team_color: driver.team_color.clone(),
        },
    );

    season
        .teams
        .entry(driver.team_name.clone())
        .or_insert_with(|| Team::new(driver.team_name.clone(), driver.team_color.clone()))
        .add_driver(code);
}
