//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::vhost::DirGate;
use crate::wpversion::{FsDetector, VersionCache, VersionLookup};

/// Shared application state, cheap to clone into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub versions: Arc<VersionLookup>,
    pub gate: Arc<DirGate>,
}

impl AppState {
    /// Build the state from configuration.
    pub fn new(config: Config) -> Self {
        let cache = VersionCache::new(config.version_cache_expiry);
        let detector = Arc::new(FsDetector::new(config.version_base_path.clone()));
        let versions = Arc::new(VersionLookup::new(cache, detector));
        let gate = Arc::new(DirGate::new(config.gate_base_path.clone()));

        Self {
            config: Arc::new(config),
            versions,
            gate,
        }
    }
}
