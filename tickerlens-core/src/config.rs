//! Startup configuration.
//!
//! The only required value is the API key. It is read once, before the UI
//! starts, and never changes afterwards. A missing key is a startup failure,
//! not a view-state error.
//!
//! Precedence, highest first:
//! 1. `TICKERLENS_API_KEY` / `TICKERLENS_ENDPOINT` environment variables
//!    (`ALPHAVANTAGE_API_KEY` is accepted as a fallback for the key)
//! 2. TOML config file
//! 3. Built-in defaults (endpoint, timeout)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::data::DEFAULT_ENDPOINT;

pub const ENV_API_KEY: &str = "TICKERLENS_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "ALPHAVANTAGE_API_KEY";
pub const ENV_ENDPOINT: &str = "TICKERLENS_ENDPOINT";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key configured: set TICKERLENS_API_KEY or api_key in {hint}")]
    MissingApiKey { hint: String },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Where to look for the TOML file.
#[derive(Debug, Clone, Copy)]
pub enum ConfigFile<'a> {
    /// Environment only.
    None,
    /// Use the file if it exists (the per-user default location).
    Optional(&'a Path),
    /// The file must exist (passed explicitly with `--config`).
    Required(&'a Path),
}

/// On-disk shape. Every key is optional so env vars can fill the gaps.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_key: Option<String>,
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    full_history: Option<bool>,
}

/// Resolved process-wide configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Ask for the full history (`outputsize=full`) instead of ~100 days.
    pub full_history: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("full_history", &self.full_history)
            .finish()
    }
}

impl AppConfig {
    /// Load from the process environment and `file`.
    pub fn load(file: ConfigFile<'_>) -> Result<Self, ConfigError> {
        Self::load_with(file, |key| std::env::var(key).ok())
    }

    /// Same as `load`, with an injectable environment lookup.
    pub fn load_with(
        file: ConfigFile<'_>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let (from_file, hint) = match file {
            ConfigFile::None => (FileConfig::default(), "a config file".to_string()),
            ConfigFile::Optional(path) if !path.exists() => {
                (FileConfig::default(), path.display().to_string())
            }
            ConfigFile::Optional(path) | ConfigFile::Required(path) => {
                (read_file(path)?, path.display().to_string())
            }
        };

        let non_empty =
            |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        let api_key = non_empty(env(ENV_API_KEY))
            .or_else(|| non_empty(env(ENV_API_KEY_FALLBACK)))
            .or_else(|| non_empty(from_file.api_key))
            .ok_or(ConfigError::MissingApiKey { hint })?;

        let endpoint = non_empty(env(ENV_ENDPOINT))
            .or_else(|| non_empty(from_file.endpoint))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = from_file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            api_key,
            endpoint,
            timeout_secs,
            full_history: from_file.full_history.unwrap_or(false),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
