//! Per-host WordPress version lookup
//!
//! Serves a version string per host with bounded staleness: a read-locked
//! map hit when fresh, otherwise a marker-file read on the request path
//! whose result is written back for later requests. Wired into the HTTP
//! surface by the enrichment middleware.

mod cache;
mod detector;
mod lookup;
mod middleware;

pub use cache::VersionCache;
pub use detector::{DetectVersion, FsDetector};
pub use lookup::VersionLookup;
pub use middleware::{wp_version_middleware, VERSION_HEADER};
