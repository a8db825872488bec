/*
[INPUT]:  YAML configuration file and command line overrides
[OUTPUT]: Validated console configuration and adapter client settings
[POS]:    Configuration layer - queue endpoint and logging setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use taskdist_adapter::{ClientConfig, DEFAULT_BASE_URL};
use url::Url;

/// Top-level configuration for the console
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Root of the queue service API, e.g. `http://localhost:5000` or `https://host/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request deadline; unset means requests may stay in flight indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// tracing filter directive, e.g. "info" or "taskdist_console=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ConsoleConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// `{config_dir}/taskdist/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskdist").join("config.yaml"))
    }

    /// Explicit path if given, else the default path when it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize config")
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        std::fs::write(path, self.to_yaml()?)
            .with_context(|| format!("write config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(self.base_url.trim())
            .with_context(|| format!("invalid base_url '{}'", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("base_url must use http or https, got '{}'", url.scheme());
        }
        if self.request_timeout_secs == Some(0) {
            bail!("request_timeout_secs must be greater than zero when set");
        }
        if self.log_level.trim().is_empty() {
            bail!("log_level must not be empty");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            connect_timeout: match self.connect_timeout_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: ConsoleConfig = serde_yaml::from_str("base_url: http://queue:8080/api\n")
            .expect("parse config");
        assert_eq!(config.base_url, "http://queue:8080/api");
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.log_level, "info");
        config.validate().expect("valid config");
    }

    #[test]
    fn test_client_config_mapping() {
        let config = ConsoleConfig {
            request_timeout_secs: Some(30),
            connect_timeout_secs: 0,
            ..ConsoleConfig::default()
        };
        let client = config.client_config();
        assert_eq!(client.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(client.connect_timeout, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_url = ConsoleConfig {
            base_url: "queue-without-scheme".to_string(),
            ..ConsoleConfig::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_scheme = ConsoleConfig {
            base_url: "ws://queue".to_string(),
            ..ConsoleConfig::default()
        };
        assert!(bad_scheme.validate().is_err());

        let zero_timeout = ConsoleConfig {
            request_timeout_secs: Some(0),
            ..ConsoleConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_write_and_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.yaml");
        let config = ConsoleConfig {
            base_url: "https://queue.example/api".to_string(),
            request_timeout_secs: Some(15),
            ..ConsoleConfig::default()
        };

        config.write_to(&path).expect("write config");
        let loaded = ConsoleConfig::load(Some(&path)).expect("load config");
        assert_eq!(loaded, config);
    }
}
