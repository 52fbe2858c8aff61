//! HTTP provider backed by Jolpica (schedule) and OpenF1 (timing)

use std::collections::HashMap;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::cache::ResponseCache;
use crate::config::{FetchConfig, ProviderEndpoints};
use crate::provider::Provider;
use crate::schema::{DriverEntry, ScheduleResponse, SessionEntry, order_race_sessions};
use crate::types::{ScheduleEvent, SessionDriver};
use crate::{Result, SeasonError};

/// Provider that talks to the public F1 data APIs
pub struct HttpProvider {
    /// Shared HTTP client
    client: Client,

    /// Base URLs
    endpoints: ProviderEndpoints,

    /// Optional on-disk response cache
    cache: Option<ResponseCache>,

    /// Race sessions per year, ordered by start time
    race_sessions: HashMap<i32, Vec<SessionEntry>>,
}

impl HttpProvider {
    /// Create a provider from a fetch configuration
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("paddock/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SeasonError::http("<client builder>", e))?;

        let cache = config.cache_dir.clone().map(ResponseCache::new);
        if let Some(cache) = &cache {
            info!("Response cache enabled at {}", cache.dir().display());
        }

        Ok(Self {
            client,
            endpoints: config.endpoints.clone(),
            cache,
            race_sessions: HashMap::new(),
        })
    }

    /// Endpoints in use
    pub fn endpoints(&self) -> &ProviderEndpoints {
        &self.endpoints
    }

    fn schedule_url(&self, year: i32) -> String {
        format!("{}/{}.json?limit=100", self.endpoints.schedule_url.trim_end_matches('/'), year)
    }

    fn race_sessions_url(&self, year: i32) -> String {
        format!(
            "{}/sessions?year={}&session_name=Race",
            self.endpoints.timing_url.trim_end_matches('/'),
            year
        )
    }

    fn drivers_url(&self, session_key: u64) -> String {
        format!(
            "{}/drivers?session_key={}",
            self.endpoints.timing_url.trim_end_matches('/'),
            session_key
        )
    }

    /// GET a URL and return the body, failing on non-success statuses
    async fn fetch_body(&self, url: &str) -> Result<String> {
        debug!(url, "GET");

        let response = self.client.get(url).send().await.map_err(|e| SeasonError::http(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeasonError::status(url, status.as_u16()));
        }

        response.text().await.map_err(|e| SeasonError::http(url, e))
    }

    /// Fetch and decode JSON, going through the cache when enabled.
    ///
    /// Only payloads accepted by `keep` are written to the cache so that
    /// not-yet-published data is fetched again next run.
    async fn get_json<T, F>(&self, url: &str, context: &str, keep: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        if let Some(cache) = &self.cache {
            match cache.get(url).await {
                Ok(Some(body)) => match serde_json::from_str::<T>(&body) {
                    Ok(value) => return Ok(value),
                    Err(e) => warn!(url, "Ignoring unreadable cache entry: {}", e),
                },
                Ok(None) => {}
                Err(e) => warn!(url, "Cache read failed: {}", e),
            }
        }

        let body = self.fetch_body(url).await?;
        let value: T =
            serde_json::from_str(&body).map_err(|e| SeasonError::parse(context, e.to_string()))?;

        if let Some(cache) = &self.cache {
            if keep(&value) {
                if let Err(e) = cache.put(url, &body).await {
                    warn!(url, "Cache write failed: {}", e);
                }
            }
        }

        Ok(value)
    }

    /// OpenF1 session key of the race of `round`
    async fn race_session_key(&mut self, year: i32, round: u32) -> Result<u64> {
        if !self.race_sessions.contains_key(&year) {
            let url = self.race_sessions_url(year);
            let sessions: Vec<SessionEntry> =
                self.get_json(&url, "OpenF1 sessions", |s: &Vec<SessionEntry>| !s.is_empty()).await?;
            let ordered = order_race_sessions(sessions);
            debug!(year, count = ordered.len(), "Loaded race sessions");
            self.race_sessions.insert(year, ordered);
        }

        let index = usize::try_from(round).ok().and_then(|r| r.checked_sub(1));
        self.race_sessions
            .get(&year)
            .zip(index)
            .and_then(|(sessions, i)| sessions.get(i))
            .and_then(|session| session.session_key)
            .ok_or_else(|| SeasonError::no_session_data(year, round))
    }
}

#[async_trait::async_trait]
impl Provider for HttpProvider {
    async fn event_schedule(&mut self, year: i32) -> Result<Vec<ScheduleEvent>> {
        let url = self.schedule_url(year);
        let response: ScheduleResponse = self
            .get_json(&url, "Jolpica schedule", |r: &ScheduleResponse| {
                !r.mr_data.race_table.races.is_empty()
            })
            .await?;

        let events = response.into_events();
        info!("Fetched {} scheduled events for {}", events.len(), year);
        Ok(events)
    }

    async fn race_session(&mut self, year: i32, round: u32) -> Result<Vec<SessionDriver>> {
        let session_key = self.race_session_key(year, round).await?;

        let url = self.drivers_url(session_key);
        let entries: Vec<DriverEntry> =
            self.get_json(&url, "OpenF1 drivers", |d: &Vec<DriverEntry>| !d.is_empty()).await?;

        let total = entries.len();
        let drivers: Vec<SessionDriver> =
            entries.into_iter().filter_map(DriverEntry::into_session_driver).collect();

        if drivers.len() < total {
            debug!(year, round, skipped = total - drivers.len(), "Skipped incomplete driver entries");
        }

        Ok(drivers)
    }

    fn name(&self) -> &str {
        "jolpica+openf1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn schedule_body() -> serde_json::Value {
        json!({
            "MRData": {
                "total": "1",
                "RaceTable": {
                    "season": "2025",
                    "Races": [{
                        "round": "1",
                        "raceName": "Australian Grand Prix",
                        "Circuit": { "Location": { "locality": "Melbourne", "country": "Australia" } },
                        "date": "2025-03-16",
                        "time": "04:00:00Z",
                        "FirstPractice": { "date": "2025-03-14", "time": "01:30:00Z" }
                    }]
                }
            }
        })
    }

    fn provider_for(server: &MockServer, cache_dir: Option<std::path::PathBuf>) -> Result<HttpProvider> {
        let config = FetchConfig::default()
            .with_endpoints(ProviderEndpoints::single(server.uri()))
            .with_cache_dir(cache_dir);
        HttpProvider::new(&config)
    }

    #[tokio::test]
    async fn fetches_schedule() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2025.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(schedule_body()))
            .mount(&server)
            .await;

        let mut provider = provider_for(&server, None)?;
        let events = provider.event_schedule(2025).await?;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name, "Australian Grand Prix");
        assert_eq!(events[0].round, Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_reported() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2025.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let mut provider = provider_for(&server, None)?;
        let err = provider.event_schedule(2025).await.unwrap_err();

        assert!(matches!(err, SeasonError::Status { status: 503, .. }));
        assert!(err.is_retryable());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_payload_is_a_parse_error() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2025.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let mut provider = provider_for(&server, None)?;
        let err = provider.event_schedule(2025).await.unwrap_err();

        assert!(matches!(err, SeasonError::Parse { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn resolves_round_to_session_drivers() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sessions"))
            .and(query_param("year", "2025"))
            .and(query_param("session_name", "Race"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "session_key": 9700, "session_name": "Race", "date_start": "2025-03-23T07:00:00+00:00" },
                { "session_key": 9693, "session_name": "Race", "date_start": "2025-03-16T04:00:00+00:00" }
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/drivers"))
            .and(query_param("session_key", "9700"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "driver_number": 4, "name_acronym": "NOR", "first_name": "Lando",
                  "last_name": "Norris", "team_name": "McLaren", "team_colour": "FF8000" },
                { "driver_number": 99, "first_name": "Test" }
            ])))
            .mount(&server)
            .await;

        let mut provider = provider_for(&server, None)?;
        let drivers = provider.race_session(2025, 2).await?;

        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].abbreviation, "NOR");
        assert_eq!(drivers[0].team_color, "FF8000");

        let missing = provider.race_session(2025, 7).await.unwrap_err();
        assert!(matches!(missing, SeasonError::NoSessionData { year: 2025, round: 7 }));
        Ok(())
    }

    #[tokio::test]
    async fn cached_responses_skip_the_network() -> Result<()> {
        let temp = TempDir::new()?;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2025.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(schedule_body()))
            .expect(1)
            .mount(&server)
            .await;

        let mut first = provider_for(&server, Some(temp.path().to_path_buf()))?;
        first.event_schedule(2025).await?;

        let mut second = provider_for(&server, Some(temp.path().to_path_buf()))?;
        let events = second.event_schedule(2025).await?;
        assert_eq!(events.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_payloads_are_not_cached() -> Result<()> {
        let temp = TempDir::new()?;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        for _ in 0..2 {
            let mut provider = provider_for(&server, Some(temp.path().to_path_buf()))?;
            assert!(provider.race_session(2026, 1).await.is_err());
        }
        Ok(())
    }
}
