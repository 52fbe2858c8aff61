//! JSON output

use std::path::Path;

use tracing::debug;

use crate::types::{SeasonData, SeasonSummary};
use crate::{Result, SeasonError};

/// Serialize a season as 2-space indented JSON.
///
/// Non-ASCII characters (e.g. "São Paulo") are written verbatim.
pub fn to_json(season: &SeasonData) -> Result<String> {
    serde_json::to_string_pretty(season).map_err(|e| SeasonError::json("season serialization", e))
}

/// Write a season to `path`, creating parent directories as needed.
pub async fn write_season(season: &SeasonData, path: &Path) -> Result<SeasonSummary> {
    let json = to_json(season)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| SeasonError::file_error(parent, e))?;
    }

    tokio::fs::write(path, json.as_bytes())
        .await
        .map_err(|e| SeasonError::file_error(path, e))?;

    debug!(path = %path.display(), bytes = json.len(), "Wrote season JSON");
    Ok(season.summary())
}

/// Read a season back from `path`
pub async fn read_season(path: &Path) -> Result<SeasonData> {
    let json = tokio::fs::read_to_string(path).await.map_err(|e| SeasonError::file_error(path, e))?;
    serde_json::from_str(&json).map_err(|e| SeasonError::json(format!("reading {}", path.display()), e))
}

/// Human-readable summary printed after a run
pub fn format_summary(path: &Path, summary: &SeasonSummary) -> String {
    format!(
        "\nData saved to: {}\nTotal races: {}\nTotal drivers: {}\nTotal teams: {}\nTotal circuits: {}",
        path.display(),
        summary.races,
        summary.drivers,
        summary.teams,
        summary.circuits
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::fallback_teams;
    use crate::types::{Circuit, EventFormat, Race};
    use indexmap::IndexMap;
    use tempfile::TempDir;

    fn sample_season() -> SeasonData {
        let mut sessions = IndexMap::new();
        sessions.insert("race".to_string(), "2025-11-09 17:00:00".to_string());

        let mut season = SeasonData::new(2025);
        season.races.push(Race {
            round: 21,
            name: "São Paulo Grand Prix".into(),
            country: "Brazil".into(),
            location: "São Paulo".into(),
            circuit: "São Paulo Grand Prix".into(),
            date: Some("2025-11-09".into()),
            format: EventFormat::SprintQualifying,
            sessions,
        });
        season.circuits.insert(
            "São Paulo Grand Prix".into(),
            Circuit { name: "São Paulo Grand Prix".into(), location: "São Paulo".into(), country: "Brazil".into() },
        );
        season.teams = fallback_teams();
        season
    }

    #[test]
    fn json_is_indented_and_keeps_non_ascii() -> Result<()> {
        let json = to_json(&sample_season())?;
        assert!(json.starts_with("{\n  \"year\": 2025,"));
        assert!(json.contains("São Paulo"));
        assert!(!json.contains("\\u00e3"));
        Ok(())
    }

    #[tokio::test]
    async fn written_file_round_trips() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("public").join("f1_season_data.json");
        let season = sample_season();

        let summary = write_season(&season, &path).await?;
        assert_eq!(summary, SeasonSummary { races: 1, drivers: 0, teams: 10, circuits: 1 });

        let restored = read_season(&path).await?;
        assert_eq!(restored, season);
        Ok(())
    }

    #[test]
    fn summary_lists_every_count() {
        let text = format_summary(
            Path::new("out.json"),
            &SeasonSummary { races: 24, drivers: 20, teams: 10, circuits: 24 },
        );
        assert!(text.contains("Data saved to: out.json"));
        assert!(text.contains("Total races: 24"));
        assert!(text.contains("Total drivers: 20"));
        assert!(text.contains("Total teams: 10"));
        assert!(text.contains("Total circuits: 24"));
    }
}
