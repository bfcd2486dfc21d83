use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `server_url`.
pub const URL_ENV: &str = "NOTIFYPIPE_URL";

/// Console settings. Every field is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Base URL of the NotifyPipe server, without the API prefix.
    pub server_url: String,
    /// Path prefix of the REST API.
    pub api_base: String,
    pub refresh_interval_secs: u64,
    pub toast_duration_secs: u64,
    /// No timeout when unset.
    pub request_timeout_secs: Option<u64>,
    /// Events shown on the overview tab.
    pub recent_events: usize,
    pub tick_rate_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            api_base: "/api".to_string(),
            refresh_interval_secs: 30,
            toast_duration_secs: 3,
            request_timeout_secs: None,
            recent_events: 5,
            tick_rate_ms: 250,
        }
    }
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file as YAML: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Layers, lowest to highest: defaults, `~/.notifypipe-console/config.yaml`
    /// (only when no explicit file is given), the explicit file,
    /// `NOTIFYPIPE_URL`, then command-line flags.
    pub fn resolve(
        config_path: Option<&Path>,
        url: Option<&str>,
        refresh_secs: Option<u64>,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = paths::default_config_path()?;
                if default_path.is_file() {
                    Self::load(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(env_url) = std::env::var(URL_ENV) {
            let env_url = env_url.trim();
            if !env_url.is_empty() {
                config.server_url = env_url.to_string();
            }
        }
        if let Some(url) = url {
            config.server_url = url.trim().to_string();
        }
        if let Some(secs) = refresh_secs {
            config.refresh_interval_secs = secs;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            anyhow::bail!(
                "server_url must start with http:// or https://, got '{}'",
                self.server_url
            );
        }
        if self.refresh_interval_secs == 0 {
            anyhow::bail!("refresh_interval_secs must be greater than zero");
        }
        if self.toast_duration_secs == 0 {
            anyhow::bail!("toast_duration_secs must be greater than zero");
        }
        if self.tick_rate_ms == 0 {
            anyhow::bail!("tick_rate_ms must be greater than zero");
        }
        if self.request_timeout_secs == Some(0) {
            anyhow::bail!("request_timeout_secs must be greater than zero when set");
        }
        Ok(())
    }

    /// `server_url` joined with `api_base`, e.g. `http://localhost:8080/api`.
    pub fn api_root(&self) -> String {
        let base = self.api_base.trim_matches('/');
        let server = self.server_url.trim_end_matches('/');
        if base.is_empty() {
            server.to_string()
        } else {
            format!("{}/{}", server, base)
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
