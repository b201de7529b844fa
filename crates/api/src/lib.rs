//! WPGate API Library
//!
//! This crate contains the HTTP service components for WPGate: the per-host
//! WordPress version lookup (cache, detector, enrichment middleware), the
//! vhost directory existence gate, and the axum glue around them.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod vhost;
pub mod wpversion;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use vhost::{DirGate, GateOutcome};
pub use wpversion::{DetectVersion, FsDetector, VersionCache, VersionLookup};
