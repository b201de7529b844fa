//! Vhost filesystem layout
//!
//! WPGate serves Plesk-style trees: `<base>/<host>/httpdocs` is the document
//! root for a host, and WordPress keeps its version marker at
//! `wp-includes/version.php` underneath it.

use std::path::{Path, PathBuf};

/// Document root directory name under each vhost.
pub const DOCROOT_DIR: &str = "httpdocs";

/// Relative path of the WordPress version marker under a document root.
pub const VERSION_FILE_RELATIVE: &str = "wp-includes/version.php";

/// Path of the WordPress version marker for `host` under `base`.
///
/// The host value is used verbatim as a path segment: no case folding, no
/// port stripping. Callers pass the Host header exactly as received.
pub fn version_file_path(base: &Path, host: &str) -> PathBuf {
    base.join(host).join(DOCROOT_DIR).join(VERSION_FILE_RELATIVE)
}

/// Directory that must exist for `domain` under `base`.
pub fn domain_dir(base: &Path, domain: &str) -> PathBuf {
    base.join(domain)
}

/// Strip one literal `www.` prefix, if present.
///
/// Exact prefix match only; `WWW.example.com` is returned unchanged.
pub fn strip_www(domain: &str) -> &str {
    domain.strip_prefix("www.").unwrap_or(domain)
}
