//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

use anyhow::Context;

/// Service configuration parameters.
///
/// Credentials and the database URL are required; everything else has a
/// sensible default and can be overridden via environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the metadata provider
    pub tmdb_api_token: String,
    /// Base URL of the metadata provider API
    pub tmdb_base_url: String,
    /// Postgres connection string for the local store
    pub database_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of entries the cache store can hold
    pub cache_max_entries: usize,
    /// TTL in seconds for cached payloads; None caches until evicted
    pub cache_ttl: Option<u64>,
    /// Timeout in seconds applied to every upstream call
    pub upstream_timeout: u64,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TMDB_API_TOKEN` - provider bearer token (required)
    /// - `DATABASE_URL` - Postgres connection string (required)
    /// - `TMDB_BASE_URL` - provider base URL (default: https://api.themoviedb.org/3)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_MAX_ENTRIES` - cache capacity (default: 1000)
    /// - `CACHE_TTL_SECS` - cache entry TTL; unset caches indefinitely
    /// - `UPSTREAM_TIMEOUT_SECS` - upstream call timeout (default: 10)
    /// - `CLEANUP_INTERVAL_SECS` - expiry sweep frequency (default: 60)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            tmdb_api_token: env::var("TMDB_API_TOKEN")
                .context("TMDB_API_TOKEN must be set")?,
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            tmdb_base_url: env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            cache_ttl: env::var("CACHE_TTL_SECS").ok().and_then(|v| v.parse().ok()),
            upstream_timeout: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            cleanup_interval: env::var("CLEANUP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_token: String::new(),
            tmdb_base_url: "https://api.themoviedb.org/3".to_string(),
            database_url: String::new(),
            server_port: 3000,
            cache_max_entries: 1000,
            cache_ttl: None,
            upstream_timeout: 10,
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.tmdb_base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_max_entries, 1000);
        assert_eq!(config.cache_ttl, None);
        assert_eq!(config.upstream_timeout, 10);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env_requires_token() {
        env::remove_var("TMDB_API_TOKEN");
        env::remove_var("DATABASE_URL");

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_env_defaults() {
        env::set_var("TMDB_API_TOKEN", "test-token");
        env::set_var("DATABASE_URL", "postgres://localhost/cinescope_test");
        env::remove_var("TMDB_BASE_URL");
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("UPSTREAM_TIMEOUT_SECS");
        env::remove_var("CLEANUP_INTERVAL_SECS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.tmdb_api_token, "test-token");
        assert_eq!(config.tmdb_base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_ttl, None);
    }
}
