//! In-memory version cache with TTL
//!
//! Caches per-host WordPress version detections so the marker file is not
//! re-read on every request.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Cache entry with its detection time
#[derive(Clone)]
struct CacheEntry {
    version: String,
    observed_at: Instant,
}

impl CacheEntry {
    fn new(version: String) -> Self {
        Self {
            version,
            observed_at: Instant::now(),
        }
    }

    /// Freshness is inclusive at the boundary: an entry aged exactly `ttl`
    /// is still served.
    fn is_fresh_at(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.observed_at) <= ttl
    }
}

/// Thread-safe in-memory host -> version cache.
///
/// Entries are never removed: a stale entry is ignored on read and sits in
/// the map until the next successful detection overwrites it, so the map
/// grows with the number of distinct hosts ever seen.
pub struct VersionCache {
    cache: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl VersionCache {
    /// Create a cache that serves entries up to `ttl` old.
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Get the cached version for a host, if present and fresh.
    ///
    /// A stale entry is treated as absent, not evicted.
    pub fn get(&self, host: &str) -> Option<String> {
        let cache = self.cache.read().ok()?;
        let entry = cache.get(host)?;
        if entry.is_fresh_at(Instant::now(), self.ttl) {
            Some(entry.version.clone())
        } else {
            None
        }
    }

    /// Store a detected version for a host, replacing any previous entry.
    ///
    /// Callers only store non-empty versions; failed detections are never
    /// written, so an unresolvable host stays absent from the map.
    pub fn insert(&self, host: &str, version: String) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(host.to_string(), CacheEntry::new(version));
        }
    }

    /// Number of hosts ever cached, fresh and stale alike.
    pub fn len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
