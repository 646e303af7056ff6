//! Application configuration.

use crate::error::{AppError, AppResult};
use fleetmap_dashboard::DashboardConfig;
use serde::{Deserialize, Serialize};

/// Position backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Backend root URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Poll cadence (ms). Default: 5,000 (5 seconds).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Per-request timeout (ms). Default: 10,000 (10 seconds).
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_poll_interval_ms() -> u64 {
    5_000
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> AppResult<()> {
        if self.feed.base_url.is_empty() {
            return Err(AppError::Config("feed.base_url must be set".to_string()));
        }
        if self.feed.poll_interval_ms == 0 {
            return Err(AppError::Config(
                "feed.poll_interval_ms must be positive".to_string(),
            ));
        }
        if self.feed.request_timeout_ms == 0 {
            return Err(AppError::Config(
                "feed.request_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.feed.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.feed.poll_interval_ms, 5_000);
        assert_eq!(config.dashboard.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_overrides() {
        let config: AppConfig = toml::from_str(
            r#"
            [feed]
            base_url = "http://tracker.internal:9000"
            poll_interval_ms = 2500

            [dashboard]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.feed.base_url, "http://tracker.internal:9000");
        assert_eq!(config.feed.poll_interval_ms, 2_500);
        assert_eq!(config.feed.request_timeout_ms, 10_000);
        assert!(!config.dashboard.enabled);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [feed]
            poll_interval_ms = 0
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
