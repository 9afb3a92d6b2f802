use anyhow::{Context, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{Error, Result, units::Units};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything a [`crate::Client`] needs besides its transport.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Fails with [`Error::EmptyApiKey`] when `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::EmptyApiKey);
        }

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Optional settings stored on disk. The API key is never kept here.
///
/// Example TOML:
/// ```toml
/// units = "metric"
/// base_url = "https://api.openweathermap.org"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: Option<String>,
    pub units: Option<Units>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from the platform config directory, or defaults if there is no file yet.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicitly chosen `path`, which must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> anyhow::Result<PathBuf> {
        let dirs = ProjectDirs::from("org", "openweathermap", "weathercli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn units(&self) -> Units {
        self.units.unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs.map_or(DEFAULT_TIMEOUT, Duration::from_secs)
    }

    /// Combine these settings with an API key into a [`ClientConfig`].
    pub fn client_config(&self, api_key: impl Into<String>) -> Result<ClientConfig> {
        let mut cfg = ClientConfig::new(api_key)?.with_timeout(self.timeout());
        if let Some(base_url) = &self.base_url {
            cfg = cfg.with_base_url(base_url.as_str());
        }

        Ok(cfg)
    }
}
