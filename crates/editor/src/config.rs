//! Editor configuration loaded from environment variables.
//!
//! Every variable has a default, so `EditorConfig::from_env()` succeeds in
//! an empty environment.
//!
//! # Environment Variables
//!
//! - `PROFILE_ASSET_BASE_URL` - Base URL stored photo paths are rendered
//!   against (default: `http://localhost:8000/storage`)
//! - `PROFILE_FETCH_LATENCY_MS` - Simulated account-fetch latency (default: 600)
//! - `PROFILE_SAVE_LATENCY_MS` - Simulated save latency (default: 800)
//! - `PROFILE_LATENCY_JITTER_MS` - Random jitter added to simulated latency
//!   (default: 200)
//! - `PROFILE_MAX_PHOTO_BYTES` - Photo upload size ceiling (default: 2097152)
//! - `PROFILE_STATUS_TTL_SECS` - Lifetime of transient status messages
//!   (default: 3)

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:8000/storage";
const DEFAULT_FETCH_LATENCY_MS: u64 = 600;
const DEFAULT_SAVE_LATENCY_MS: u64 = 800;
const DEFAULT_LATENCY_JITTER_MS: u64 = 200;
const DEFAULT_MAX_PHOTO_BYTES: usize = 2_097_152;
const DEFAULT_STATUS_TTL_SECS: u64 = 3;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Editor configuration.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Base URL stored photo paths are rendered against.
    pub asset_base_url: Url,
    /// Simulated latency for account fetches.
    pub fetch_latency: Duration,
    /// Simulated latency for saves.
    pub save_latency: Duration,
    /// Upper bound of the random jitter added to simulated latency.
    pub latency_jitter: Duration,
    /// Photo upload size ceiling in bytes.
    pub max_photo_bytes: usize,
    /// Lifetime of transient status messages.
    pub status_ttl: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            // The default is a compile-time constant and always parses
            asset_base_url: Url::parse(DEFAULT_ASSET_BASE_URL)
                .expect("default asset base URL is valid"),
            fetch_latency: Duration::from_millis(DEFAULT_FETCH_LATENCY_MS),
            save_latency: Duration::from_millis(DEFAULT_SAVE_LATENCY_MS),
            latency_jitter: Duration::from_millis(DEFAULT_LATENCY_JITTER_MS),
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
            status_ttl: Duration::from_secs(DEFAULT_STATUS_TTL_SECS),
        }
    }
}

impl EditorConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        Ok(Self {
            asset_base_url: parse_url(
                "PROFILE_ASSET_BASE_URL",
                get_optional_env("PROFILE_ASSET_BASE_URL"),
                defaults.asset_base_url,
            )?,
            fetch_latency: parse_millis(
                "PROFILE_FETCH_LATENCY_MS",
                get_optional_env("PROFILE_FETCH_LATENCY_MS"),
                defaults.fetch_latency,
            )?,
            save_latency: parse_millis(
                "PROFILE_SAVE_LATENCY_MS",
                get_optional_env("PROFILE_SAVE_LATENCY_MS"),
                defaults.save_latency,
            )?,
            latency_jitter: parse_millis(
                "PROFILE_LATENCY_JITTER_MS",
                get_optional_env("PROFILE_LATENCY_JITTER_MS"),
                defaults.latency_jitter,
            )?,
            max_photo_bytes: parse_usize(
                "PROFILE_MAX_PHOTO_BYTES",
                get_optional_env("PROFILE_MAX_PHOTO_BYTES"),
                defaults.max_photo_bytes,
            )?,
            status_ttl: parse_secs(
                "PROFILE_STATUS_TTL_SECS",
                get_optional_env("PROFILE_STATUS_TTL_SECS"),
                defaults.status_ttl,
            )?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse an optional millisecond value, falling back to a default.
fn parse_millis(
    key: &str,
    value: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}

/// Parse an optional second value, falling back to a default.
fn parse_secs(key: &str, value: Option<String>, default: Duration) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}

/// Parse an optional byte count, falling back to a default.
fn parse_usize(key: &str, value: Option<String>, default: usize) -> Result<usize, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}

/// Parse an optional URL, falling back to a default.
fn parse_url(key: &str, value: Option<String>, default: Url) -> Result<Url, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}
