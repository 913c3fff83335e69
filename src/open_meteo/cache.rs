//! File-backed cache of raw API response bodies.
//!
//! Each response is stored as a bincode-encoded [`CachedResponse`] in a file named after a hash
//! of its request URL. The URL itself is stored alongside the body, so a hash collision reads
//! as a miss. Freshness is decided per request by a [`CachePolicy`].

use crate::open_meteo::error::SourceError;
use bincode::config::{Configuration, Fixint, LittleEndian};
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::{Path, PathBuf};

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();
const CACHE_FILE_EXTENSION: &str = "bin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CachedResponse {
    url: String,
    created_at_millis: i64,
    body: String,
}

/// A response body read back from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// How long a cached response may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// `None` means the entry never expires.
    pub expire_after: Option<Duration>,
    /// How long past expiry an entry may still be served when the network request fails.
    pub stale_if_error: Option<Duration>,
}

impl CachePolicy {
    /// Forecast and air-quality responses: fresh for an hour, usable for a day on error.
    pub fn forecast() -> Self {
        Self {
            expire_after: Some(Duration::hours(1)),
            stale_if_error: Some(Duration::hours(24)),
        }
    }

    /// Geocoding responses never change for a ZIP code.
    pub fn geocoding() -> Self {
        Self {
            expire_after: None,
            stale_if_error: None,
        }
    }

    pub fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        match self.expire_after {
            None => true,
            Some(expire_after) => now - entry.created_at < expire_after,
        }
    }

    /// Whether an expired `entry` may stand in for a failed request.
    pub fn allows_stale(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        match (self.expire_after, self.stale_if_error) {
            (None, _) => true,
            (Some(expire_after), Some(stale)) => now - entry.created_at < expire_after + stale,
            (Some(_), None) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        self.dir
            .join(format!("{:016x}.{}", hasher.finish(), CACHE_FILE_EXTENSION))
    }

    /// Reads the entry for `key`. A missing file is `Ok(None)`.
    pub async fn read(&self, key: &str) -> Result<Option<CacheEntry>, SourceError> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Cache miss for {}", key);
                return Ok(None);
            }
            Err(e) => return Err(SourceError::CacheRead(path, e)),
        };

        let (cached, _) =
            bincode::serde::decode_from_slice::<CachedResponse, _>(&bytes, BINCODE_CONFIG)
                .map_err(|e| SourceError::CacheDecode(path.clone(), Box::new(e)))?;
        if cached.url != key {
            debug!(
                "Cache file {} belongs to {}, not {}",
                path.display(),
                cached.url,
                key
            );
            return Ok(None);
        }
        let Some(created_at) = DateTime::from_timestamp_millis(cached.created_at_millis) else {
            warn!(
                "Ignoring cache file {} with invalid timestamp",
                path.display()
            );
            return Ok(None);
        };
        Ok(Some(CacheEntry {
            body: cached.body,
            created_at,
        }))
    }

    pub async fn write(
        &self,
        key: &str,
        body: &str,
        created_at: DateTime<Utc>,
    ) -> Result<(), SourceError> {
        let path = self.path_for(key);
        let cached = CachedResponse {
            url: key.to_string(),
            created_at_millis: created_at.timestamp_millis(),
            body: body.to_string(),
        };
        let bytes = bincode::serde::encode_to_vec(&cached, BINCODE_CONFIG)
            .map_err(|e| SourceError::CacheEncode(Box::new(e)))?;
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| SourceError::CacheWrite(path.clone(), e))?;
        debug!("Wrote {} bytes to cache file {}", bytes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, minute, 0).unwrap()
    }

    fn entry(created_at: DateTime<Utc>) -> CacheEntry {
        CacheEntry {
            body: "{}".to_string(),
            created_at,
        }
    }

    #[test]
    fn test_forecast_policy_windows() {
        let policy = CachePolicy::forecast();
        let cached = entry(at(0, 0));
        assert!(policy.is_fresh(&cached, at(0, 59)));
        assert!(!policy.is_fresh(&cached, at(1, 0)));
        assert!(policy.allows_stale(&cached, at(23, 0)));
        assert!(!policy.allows_stale(
            &cached,
            at(0, 0) + Duration::hours(25)
        ));
    }

    #[test]
    fn test_geocoding_policy_never_expires() {
        let cached = entry(at(0, 0));
        let much_later = at(0, 0) + Duration::days(3650);
        assert!(CachePolicy::geocoding().is_fresh(&cached, much_later));
        assert!(CachePolicy::geocoding().allows_stale(&cached, much_later));
    }

    #[tokio::test]
    async fn test_write_then_read() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let cache = ResponseCache::new(dir.path().to_path_buf());
        let key = "https://api.open-meteo.com/v1/forecast?latitude=40&longitude=-105";

        assert_eq!(cache.read(key).await?, None);
        cache.write(key, r#"{"ok":true}"#, at(12, 30)).await?;

        let cached = cache.read(key).await?.ok_or("entry")?;
        assert_eq!(cached.body, r#"{"ok":true}"#);
        assert_eq!(cached.created_at, at(12, 30));
        assert_eq!(cache.read("https://other").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_entry_for_another_url_is_a_miss() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let cache = ResponseCache::new(dir.path().to_path_buf());
        let stored = "https://geocoding-api.open-meteo.com/v1/search?name=80302";
        let requested = "https://geocoding-api.open-meteo.com/v1/search?name=10001";
        cache.write(stored, r#"{"results":[]}"#, at(8, 0)).await?;

        // Same file name, different request.
        tokio::fs::copy(cache.path_for(stored), cache.path_for(requested)).await?;
        assert_eq!(cache.read(requested).await?, None);
        assert!(cache.read(stored).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_decode_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let cache = ResponseCache::new(dir.path().to_path_buf());
        tokio::fs::write(cache.path_for("key"), [1u8, 2, 3]).await?;

        assert!(matches!(
            cache.read("key").await,
            Err(SourceError::CacheDecode(..))
        ));
        Ok(())
    }
}
