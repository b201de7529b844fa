//! Common types used across WPGate

use serde::{Deserialize, Serialize};

/// A detected WordPress core version.
///
/// Placed into request extensions by the enrichment middleware and
/// serialized transparently in API responses. Never empty once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WpVersion(pub String);

impl WpVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WpVersion {
    fn from(version: String) -> Self {
        Self(version)
    }
}
