//! Configuration Module
//!
//! Handles loading the cache and client settings from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Application configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entry lifetime and sweep period in seconds
    pub cache_interval: u64,
    /// Base URL of the remote API, without a trailing slash
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_SECS` - Cache entry lifetime (default: 60)
    /// - `POKEAPI_BASE_URL` - Remote API base URL (default: https://pokeapi.co/api/v2)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_interval: env::var("CACHE_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Returns the cache interval as a `Duration`.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// Returns the HTTP timeout as a `Duration`.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: 60,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_interval, 60);
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.cache_interval(), Duration::from_secs(60));
    }

    // Both env cases share one test so they never race on the same variables
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_INTERVAL_SECS");
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("HTTP_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.cache_interval, 60);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http_timeout, 10);

        env::set_var("CACHE_INTERVAL_SECS", "5");
        env::set_var("POKEAPI_BASE_URL", "http://localhost:8080/api/");
        env::set_var("HTTP_TIMEOUT_SECS", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.cache_interval(), Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.http_timeout, 10);

        env::remove_var("CACHE_INTERVAL_SECS");
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("HTTP_TIMEOUT_SECS");
    }
}
