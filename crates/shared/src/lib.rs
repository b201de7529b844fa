//! WPGate Shared Types and Utilities
//!
//! This crate contains the framework-free pieces shared across WPGate
//! components: the WordPress version scraper, the vhost path conventions,
//! and common types.

pub mod paths;
pub mod types;
pub mod version;

pub use paths::{domain_dir, strip_www, version_file_path};
pub use types::WpVersion;
pub use version::extract_version;
