/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_BURST, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_non_empty, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the session client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Where tokens are kept between runs
    pub storage: StorageConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the authentication API
    pub base_url: String,
    /// Timeout in seconds for REST API requests, 0 for none
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Token persistence configuration
pub struct StorageConfig {
    /// JSON file holding the tokens; tokens stay in memory when unset
    pub token_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECS,
            burst_size: DEFAULT_RATE_LIMIT_BURST,
        }
    }
}

impl Config {
    /// Creates a configuration from the environment (and a `.env` file if present)
    ///
    /// Recognised variables: `AUTH_API_BASE_URL`, `AUTH_API_TIMEOUT`,
    /// `AUTH_RATE_LIMIT_MAX_REQUESTS`, `AUTH_RATE_LIMIT_PERIOD`,
    /// `AUTH_RATE_LIMIT_BURST` and `AUTH_TOKEN_FILE`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("AUTH_API_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("AUTH_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "AUTH_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "AUTH_RATE_LIMIT_PERIOD",
                    DEFAULT_RATE_LIMIT_PERIOD_SECS,
                ),
                burst_size: get_env_or_default("AUTH_RATE_LIMIT_BURST", DEFAULT_RATE_LIMIT_BURST),
            },
            storage: StorageConfig {
                token_file: get_env_non_empty("AUTH_TOKEN_FILE").map(PathBuf::from),
            },
        }
    }

    /// Creates a configuration pointing at `base_url` with every other value
    /// at its default, ignoring the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                ..RestApiConfig::default()
            },
            rate_limiter: RateLimiterConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    /// Base URL without trailing slashes
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.rest_api.base_url.trim_end_matches('/')
    }
}
