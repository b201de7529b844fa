//! WordPress version detection
//!
//! Reads the version marker file for a host out of the vhost tree. Every
//! I/O or parse failure collapses to `None`; nothing louder than that
//! crosses this boundary.

use std::path::PathBuf;

use async_trait::async_trait;
use wpgate_shared::{extract_version, version_file_path};

/// Detects the WordPress version installed for a host.
#[async_trait]
pub trait DetectVersion: Send + Sync {
    /// Best-effort detection. `None` means the version could not be
    /// determined; a returned version is non-empty.
    async fn detect(&self, host: &str) -> Option<String>;
}

/// Detector backed by the vhost filesystem tree.
pub struct FsDetector {
    base_path: PathBuf,
}

impl FsDetector {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }
}

#[async_trait]
impl DetectVersion for FsDetector {
    async fn detect(&self, host: &str) -> Option<String> {
        let path = version_file_path(&self.base_path, host);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(host, path = %path.display(), %err, "version marker not readable");
                return None;
            }
        };

        // Lossy decode: a marker file with stray invalid bytes still gets a
        // best-effort scan.
        let content = String::from_utf8_lossy(&bytes);
        extract_version(&content).filter(|version| !version.is_empty())
    }
}
