//! Dashboard configuration: a TOML document where every field is optional.
//!
//! The browser adapter fetches `/dashboard.toml`; when it is missing the
//! defaults below apply.

use std::time::Duration;

use serde::Deserialize;

/// Longest delay a browser timer honours (`i32::MAX`); `setTimeout` treats
/// larger values as zero.
pub const MAX_TIMER_MS: u64 = 2_147_483_647;

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix prepended to every API path. Empty means same origin.
    pub api_base: String,
    /// Interval between device polls, in milliseconds.
    pub poll_interval_ms: u64,
    /// Lifetime of a notification, in milliseconds.
    pub notification_timeout_ms: u64,
    /// Maximum number of visible notifications; `0` disables the cap.
    pub max_notifications: usize,
    /// Log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval_ms: 5_000,
            notification_timeout_ms: 5_000,
            max_notifications: 5,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] when an interval is zero or beyond
    /// [`MAX_TIMER_MS`], or the log level is unknown.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_interval("poll_interval_ms", self.poll_interval_ms)?;
        check_interval("notification_timeout_ms", self.notification_timeout_ms)?;
        if self.log_filter().is_none() {
            return Err(ConfigError::Validation(format!(
                "unknown log_level {:?}",
                self.log_level
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    /// The configured level as a `tracing` filter, `None` if unrecognised.
    #[must_use]
    pub fn log_filter(&self) -> Option<tracing::level_filters::LevelFilter> {
        self.log_level.trim().parse().ok()
    }

    /// Resolve an API path against `api_base`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim_end_matches('/'))
    }
}

fn check_interval(name: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation(format!("{name} must be non-zero")));
    }
    if value > MAX_TIMER_MS {
        return Err(ConfigError::Validation(format!(
            "{name} must not exceed {MAX_TIMER_MS}"
        )));
    }
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
