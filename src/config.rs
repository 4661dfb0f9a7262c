//! Application configuration loaded from environment variables.
//!
//! Only the backend base URL is required; everything else has a default
//! or is optional (the bearer token can also arrive via the refresh hook).

use std::env;
use std::path::PathBuf;

/// Default HTTP timeout for backend requests, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the TrainMate REST backend
    pub api_url: String,
    /// Bearer token for backend requests (optional if a refresh hook is set)
    pub auth_token: Option<String>,
    /// Identity-provider endpoint that exchanges a refresh credential for a token
    pub refresh_url: Option<String>,
    /// Refresh credential posted to `refresh_url`
    pub refresh_token: Option<String>,
    /// Directory holding the local collection cache
    pub cache_dir: PathBuf,
    /// Timeout for backend requests (seconds)
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_url: env::var("TRAINMATE_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("TRAINMATE_API_URL"))?,
            auth_token: env::var("TRAINMATE_AUTH_TOKEN").ok(),
            refresh_url: env::var("TRAINMATE_REFRESH_URL").ok(),
            refresh_token: env::var("TRAINMATE_REFRESH_TOKEN").ok(),
            cache_dir: env::var("TRAINMATE_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".trainmate-cache")),
            http_timeout_secs: env::var("TRAINMATE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            auth_token: Some("test_token".to_string()),
            refresh_url: None,
            refresh_token: None,
            cache_dir: PathBuf::from(".trainmate-cache"),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
