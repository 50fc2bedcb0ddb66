//! Local cache for resolved prayer times.
//!
//! Avoids redundant network round-trips for identical (location, day)
//! lookups. Absence is a normal, frequent outcome: every failure mode on the
//! read path (missing key, expired entry, unreadable store, stale entry
//! shape) is a cache miss, never an error.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use mawaqit_types::{Coordinate, ResolvedResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default freshness window for cached entries.
pub const DEFAULT_TTL_MINUTES: i64 = 30;

/// Storage backend for the cache: a flat string key-value store.
///
/// Implementations must be infallible from the caller's perspective; a
/// backend that cannot read or persist simply behaves as empty.
pub trait CacheStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// In-memory backend. The default for tests and short-lived processes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }
}

/// Durable backend: a single JSON object file, loaded at open and rewritten
/// on every write. Survives process restarts the way browser local storage
/// survives page reloads.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store, loading any existing file. An unreadable or
    /// corrupted file is discarded and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                debug!(path = %path.display(), error = %e, "discarding unreadable cache file");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        match serde_json::to_string(entries) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    debug!(path = %self.path.display(), error = %e, "cache flush failed");
                }
            }
            Err(e) => debug!(error = %e, "cache serialization failed"),
        }
    }
}

impl CacheStore for JsonFileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
            self.flush(&entries);
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    result: ResolvedResult,
    fetched_at: DateTime<Utc>,
}

/// TTL cache mapping rounded coordinates to previously resolved results.
///
/// Keys round coordinates to two decimal places (~1.1 km): coordinates that
/// round identically share an entry. That is a documented approximation, fine
/// at city granularity.
pub struct PrayerTimesCache {
    store: Box<dyn CacheStore>,
    ttl: Duration,
}

impl PrayerTimesCache {
    /// Creates a cache with the default TTL of [`DEFAULT_TTL_MINUTES`].
    pub fn new(store: impl CacheStore + 'static) -> Self {
        Self::with_ttl(store, Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    pub fn with_ttl(store: impl CacheStore + 'static, ttl: Duration) -> Self {
        Self {
            store: Box::new(store),
            ttl,
        }
    }

    /// Returns the cached result for this location, or `None` on miss or
    /// expiry. Never errors.
    pub fn get(&self, coords: Coordinate) -> Option<ResolvedResult> {
        self.lookup(coords, Utc::now())
    }

    /// Stores a freshly resolved result, overwriting any prior entry for the
    /// same rounded location.
    pub fn set(&self, coords: Coordinate, result: &ResolvedResult) {
        self.insert(coords, result, Utc::now());
    }

    fn lookup(&self, coords: Coordinate, now: DateTime<Utc>) -> Option<ResolvedResult> {
        let key = Self::key(coords);
        let raw = self.store.read(&key)?;
        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(%key, error = %e, "discarding cache entry with stale shape");
                return None;
            }
        };
        if now.signed_duration_since(entry.fetched_at) >= self.ttl {
            debug!(%key, "cache entry expired");
            return None;
        }
        // Timings are day-specific; an entry fetched yesterday is never
        // valid today, whatever the TTL says.
        if entry.fetched_at.date_naive() != now.date_naive() {
            return None;
        }
        Some(entry.result)
    }

    fn insert(&self, coords: Coordinate, result: &ResolvedResult, now: DateTime<Utc>) {
        let entry = CacheEntry {
            result: result.clone(),
            fetched_at: now,
        };
        match serde_json::to_string(&entry) {
            Ok(raw) => self.store.write(&Self::key(coords), &raw),
            Err(e) => debug!(error = %e, "cache entry serialization failed"),
        }
    }

    fn key(coords: Coordinate) -> String {
        format!("timings:{:.2}:{:.2}", coords.lat, coords.lng)
    }
}
