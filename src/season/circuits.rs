//! Circuit extraction
//!
//! Circuits are keyed by event name because the schedule gives no stable
//! circuit identifier the front-end can rely on. Two events at the same track
//! produce two entries; one event name used twice produces one.

use indexmap::IndexMap;

use crate::types::{Circuit, Race};

/// One circuit per unique race name, copying location and country from the
/// first race with that name.
pub fn extract_circuits(races: &[Race]) -> IndexMap<String, Circuit> {
    let mut circuits = IndexMap::new();
    for race in races {
        circuits.entry(race.name.clone()).or_insert_with(|| Circuit {
            name: race.name.clone(),
            location: race.location.clone(),
            country: race.country.clone(),
        });
    }
    circuits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventFormat;

    fn race(name: &str, location: &str) -> Race {
        Race {
            round: 1,
            name: name.to_string(),
            country: "Italy".to_string(),
            location: location.to_string(),
            circuit: name.to_string(),
            date: None,
            format: EventFormat::Conventional,
            sessions: IndexMap::new(),
        }
    }

    #[test]
    fn deduplicates_by_event_name() {
        let races = [
            race("Emilia Romagna Grand Prix", "Imola"),
            race("Italian Grand Prix", "Monza"),
            race("Emilia Romagna Grand Prix", "Elsewhere"),
        ];

        let circuits = extract_circuits(&races);
        assert_eq!(circuits.len(), 2);
        assert_eq!(circuits["Emilia Romagna Grand Prix"].location, "Imola");
        assert_eq!(
            circuits.keys().collect::<Vec<_>>(),
            ["Emilia Romagna Grand Prix", "Italian Grand Prix"]
        );
    }
}
