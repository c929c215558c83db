//! Loads `/dashboard.toml` from the hosting origin.

use espdash_app::config::DashboardConfig;
use gloo_net::http::Request;

const CONFIG_PATH: &str = "/dashboard.toml";

/// Fetch and parse the dashboard configuration.
///
/// A missing file means defaults; an unreadable or invalid one is logged and
/// also falls back to defaults.
pub async fn load() -> DashboardConfig {
    let content = match fetch().await {
        Ok(Some(content)) => content,
        Ok(None) => {
            tracing::debug!(path = CONFIG_PATH, "no config file, using defaults");
            return DashboardConfig::default();
        }
        Err(err) => {
            tracing::warn!(path = CONFIG_PATH, error = %err, "failed to fetch config, using defaults");
            return DashboardConfig::default();
        }
    };
    match DashboardConfig::from_toml_str(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = CONFIG_PATH, error = %err, "invalid config, using defaults");
            DashboardConfig::default()
        }
    }
}

async fn fetch() -> Result<Option<String>, gloo_net::Error> {
    let resp = Request::get(CONFIG_PATH).send().await?;
    if !resp.ok() {
        return Ok(None);
    }
    resp.text().await.map(Some)
}
