//! Configuration loading with precedence handling.
//!
//! Defaults < config file. The config file lives at
//! `~/.config/contree/config.toml` unless an explicit path is supplied.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, unexpected IO).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unspecified fields use hardcoded defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Content document endpoint.
    #[serde(default)]
    pub source_url: Option<String>,

    /// Offline cache file path.
    #[serde(default)]
    pub cache_path: Option<PathBuf>,

    /// Maximum connectivity retry attempts per load.
    #[serde(default)]
    pub max_retries: Option<u32>,

    /// Base retry delay in milliseconds (doubled per attempt).
    #[serde(default)]
    pub base_delay_ms: Option<u64>,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Exponential backoff policy for connectivity-class fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum retry attempts before falling back to cached content.
    pub max_retries: u32,
    /// Base delay; attempt `n` (1-based) waits `base_delay * 2^n`.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Delay before the given 1-based retry attempt.
    ///
    /// With the 1s default base this yields the 2s, 4s, 8s ladder.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(1u32 << attempt.min(16))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Content document endpoint.
    pub source_url: String,
    /// Offline cache file path.
    pub cache_path: PathBuf,
    /// Retry policy for connectivity failures.
    pub retry: RetryPolicy,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            cache_path: default_cache_path(),
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(10),
            log_file_path: default_log_path(),
        }
    }
}

impl SessionConfig {
    /// Apply config-file overrides on top of defaults.
    pub fn with_overrides(mut self, file: ConfigFile) -> Self {
        if let Some(url) = file.source_url {
            self.source_url = url;
        }
        if let Some(path) = file.cache_path {
            self.cache_path = path;
        }
        if let Some(max_retries) = file.max_retries {
            self.retry.max_retries = max_retries;
        }
        if let Some(ms) = file.base_delay_ms {
            self.retry.base_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(path) = file.log_file_path {
            self.log_file_path = path;
        }
        self
    }
}

/// Default offline cache location, `~/.cache/contree/content.json`.
///
/// Falls back to the current directory when the platform cache directory
/// cannot be determined.
pub fn default_cache_path() -> PathBuf {
    if let Some(cache_dir) = dirs::cache_dir() {
        cache_dir.join("contree").join("content.json")
    } else {
        PathBuf::from("contree_content.json")
    }
}

/// Default log file location, `~/.local/state/contree/contree.log`.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("contree").join("contree.log")
    } else {
        PathBuf::from("contree.log")
    }
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error; defaults
/// apply). Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve the effective configuration.
///
/// Reads the explicit path when given, otherwise
/// `~/.config/contree/config.toml`; missing files fall back to defaults.
pub fn load_config(explicit_path: Option<&std::path::Path>) -> Result<SessionConfig, ConfigError> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => match dirs::config_dir() {
            Some(dir) => dir.join("contree").join("config.toml"),
            None => return Ok(SessionConfig::default()),
        },
    };

    let file = load_config_file(path)?.unwrap_or_default();
    Ok(SessionConfig::default().with_overrides(file))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
