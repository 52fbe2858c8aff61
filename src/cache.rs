//! On-disk response cache
//!
//! Stores raw provider response bodies keyed by request URL so repeated runs
//! do not hit the network. There is no expiry: delete the directory to
//! refresh.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Result, SeasonError};

/// Directory-backed cache of provider responses
#[derive(Debug, Clone)]
pub struct ResponseCache {
    /// Cache root
    dir: PathBuf,
}

impl ResponseCache {
    /// Create a cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the body for `url`
    pub fn entry_path(&self, url: &str) -> PathBuf {
        self.dir.join(cache_key(url))
    }

    /// Cached body for `url`, if present
    pub async fn get(&self, url: &str) -> Result<Option<String>> {
        let path = self.entry_path(url);
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => {
                debug!(url, path = %path.display(), "Cache hit");
                Ok(Some(body))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SeasonError::file_error(path, e)),
        }
    }

    /// Store the body for `url`, replacing any previous entry
    pub async fn put(&self, url: &str, body: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SeasonError::file_error(&self.dir, e))?;

        let path = self.entry_path(url);
        tokio::fs::write(&path, body).await.map_err(|e| SeasonError::file_error(&path, e))?;

        debug!(url, path = %path.display(), bytes = body.len(), "Cached response");
        Ok(())
    }

    /// Remove every cached entry
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_dir_all(&self.dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SeasonError::file_error(&self.dir, e)),
        }
    }
}

/// Filesystem-safe file name for a URL
fn cache_key(url: &str) -> String {
    let trimmed = url.split_once("://").map_or(url, |(_, rest)| rest);
    let mut key: String = trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();
    key.push_str(".json");
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cache_key_is_filesystem_safe() {
        let key = cache_key("https://api.openf1.org/v1/drivers?session_key=9158");
        assert_eq!(key, "api.openf1.org_v1_drivers_session_key_9158.json");
        assert!(!key.contains('/'));
    }

    #[test]
    fn distinct_queries_get_distinct_keys() {
        assert_ne!(
            cache_key("http://h/sessions?year=2024"),
            cache_key("http://h/sessions?year=2025")
        );
    }

    #[tokio::test]
    async fn put_then_get_returns_body() -> Result<()> {
        let temp = TempDir::new()?;
        let cache = ResponseCache::new(temp.path().join("nested"));
        let url = "https://api.jolpi.ca/ergast/f1/2024.json";

        assert_eq!(cache.get(url).await?, None);
        cache.put(url, "{\"MRData\":{}}").await?;
        assert_eq!(cache.get(url).await?.as_deref(), Some("{\"MRData\":{}}"));

        cache.clear().await?;
        assert_eq!(cache.get(url).await?, None);
        Ok(())
    }
}
