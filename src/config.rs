//! Top-level application configuration.
//!
//! Configuration is read from the first of:
//! - the path given with `--config`
//! - `.ticketboard.yaml` in the current directory
//! - `config.yaml` in the platform config directory
//!
//! and defaults otherwise. `TICKETBOARD_URL` and `TICKETBOARD_TOKEN` override
//! the file; command-line flags override both.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::columns::ColumnKey;
use crate::error::{BoardError, Result};

pub const LOCAL_CONFIG_FILE: &str = ".ticketboard.yaml";
pub const URL_ENV: &str = "TICKETBOARD_URL";
pub const TOKEN_ENV: &str = "TICKETBOARD_TOKEN";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where tickets are fetched from
    #[serde(default)]
    pub source: SourceConfig,

    /// Columns filtered by whole-value equality instead of substring
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exact_match_columns: Vec<ColumnKey>,
}

/// Ticket source configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the ticket API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Path of the "all tickets" endpoint, relative to the base URL
    #[serde(default = "default_tickets_path")]
    pub path: String,

    /// JSON file to read tickets from instead of the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Bearer token sent to the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_tickets_path() -> String {
    "/tickets".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: default_tickets_path(),
            file: None,
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("url", &self.url)
            .field("path", &self.path)
            .field("file", &self.file)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Platform config file path, if a home directory is known
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ticketboard").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from the explicit path or the search locations,
    /// then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => Self::discover()?,
        };
        config.apply_env();
        Ok(config)
    }

    fn discover() -> Result<Self> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local);
        }
        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            return Self::load_from(&path);
        }
        tracing::debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Parse one configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BoardError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Apply `TICKETBOARD_URL` and `TICKETBOARD_TOKEN` when set and non-empty.
    /// An env URL replaces a configured file source.
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var(URL_ENV)
            && !url.is_empty()
        {
            self.source.url = Some(url);
            self.source.file = None;
        }
        if let Ok(token) = env::var(TOKEN_ENV)
            && !token.is_empty()
        {
            self.source.token = Some(token);
        }
    }

    /// Apply command-line overrides. A `--url` clears a configured file and
    /// a `--file` wins over any URL.
    pub fn with_overrides(mut self, url: Option<String>, file: Option<PathBuf>) -> Self {
        if let Some(url) = url {
            self.source.url = Some(url);
            self.source.file = None;
        }
        if let Some(file) = file {
            self.source.file = Some(file);
        }
        self
    }
}
