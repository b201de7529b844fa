//! Directory existence gate
//!
//! Stateless check that a vhost directory exists before a request is
//! allowed through. One filesystem query per request, no caching.

use std::path::PathBuf;

use wpgate_shared::{domain_dir, strip_www};

/// Outcome of a gate check, mapped to an HTTP status by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// No usable domain was supplied with the request.
    MissingDomain,
    /// No path exists for the domain under the base directory.
    NotFound,
    /// The domain's directory exists.
    Exists,
}

/// Gate over a vhost base directory.
pub struct DirGate {
    base_path: PathBuf,
}

impl DirGate {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Check whether the directory for `domain` exists.
    ///
    /// A literal `www.` prefix is stripped before the join. Any successful
    /// stat counts as existing (no file/directory distinction); every stat
    /// error counts as not found.
    pub async fn check(&self, domain: &str) -> GateOutcome {
        if domain.is_empty() {
            return GateOutcome::MissingDomain;
        }

        let dir = domain_dir(&self.base_path, strip_www(domain));
        match tokio::fs::metadata(&dir).await {
            Ok(_) => GateOutcome::Exists,
            Err(err) => {
                tracing::debug!(domain, path = %dir.display(), %err, "vhost directory missing");
                GateOutcome::NotFound
            }
        }
    }
}
