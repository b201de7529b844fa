//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variables recognized by WPGate. Anything else under the
/// `WPGATE_` prefix is a configuration mistake and refuses to load.
const KNOWN_VARS: &[&str] = &[
    "WPGATE_BIND_ADDRESS",
    "WPGATE_VERSION_BASE_PATH",
    "WPGATE_GATE_BASE_PATH",
    "WPGATE_VERSION_CACHE_EXPIRY_HOURS",
];

const DEFAULT_CACHE_EXPIRY_HOURS: u64 = 1;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Version lookup
    pub version_base_path: PathBuf,
    pub version_cache_expiry: Duration,

    // Directory gate
    pub gate_base_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Unknown keys are rejected at load time, not silently ignored.
        for (key, _) in env::vars() {
            if key.starts_with("WPGATE_") && !KNOWN_VARS.contains(&key.as_str()) {
                return Err(ConfigError::UnknownVariable(key));
            }
        }

        let version_base_path = require_path("WPGATE_VERSION_BASE_PATH")?;
        let gate_base_path = require_path("WPGATE_GATE_BASE_PATH")?;

        let expiry_hours = match env::var("WPGATE_VERSION_CACHE_EXPIRY_HOURS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidExpiryHours(raw))?,
            Err(_) => DEFAULT_CACHE_EXPIRY_HOURS,
        };

        Ok(Self {
            bind_address: env::var("WPGATE_BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            version_base_path,
            version_cache_expiry: Duration::from_secs(expiry_hours.saturating_mul(3600)),
            gate_base_path,
        })
    }
}

fn require_path(key: &'static str) -> Result<PathBuf, ConfigError> {
    let value = env::var(key).map_err(|_| ConfigError::Missing(key))?;
    if value.is_empty() {
        return Err(ConfigError::EmptyPath(key));
    }
    Ok(PathBuf::from(value))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("{0} cannot be empty")]
    EmptyPath(&'static str),
    #[error("invalid value for WPGATE_VERSION_CACHE_EXPIRY_HOURS: {0}")]
    InvalidExpiryHours(String),
    #[error("Unknown configuration variable: {0}")]
    UnknownVariable(String),
}
