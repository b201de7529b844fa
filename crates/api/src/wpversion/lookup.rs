//! Host version lookup
//!
//! Fresh-hit fast path under the read lock; detection runs outside any lock
//! on the calling request's task. Concurrent misses for one host may each
//! run detection and each store their result (last writer wins). A failed
//! detection stores nothing, so the next request tries again.

use std::sync::Arc;

use super::cache::VersionCache;
use super::detector::DetectVersion;

/// Version lookup with caching
pub struct VersionLookup {
    cache: VersionCache,
    detector: Arc<dyn DetectVersion>,
}

impl VersionLookup {
    pub fn new(cache: VersionCache, detector: Arc<dyn DetectVersion>) -> Self {
        Self { cache, detector }
    }

    /// Resolve the version for a host.
    ///
    /// The host value is used verbatim as the cache key (and downstream as
    /// the path segment): no case folding, no port stripping.
    pub async fn lookup(&self, host: &str) -> Option<String> {
        if let Some(version) = self.cache.get(host) {
            return Some(version);
        }

        let version = self
            .detector
            .detect(host)
            .await
            .filter(|version| !version.is_empty())?;
        self.cache.insert(host, version.clone());
        Some(version)
    }

    /// Number of hosts in the cache, for the health surface.
    pub fn cached_hosts(&self) -> usize {
        self.cache.len()
    }
}
