//! Configuration management and validation.
//!
//! Provides the engine configuration: where the sightings come from, which
//! years are retained, how the query cache is sized, and the opaque map
//! token forwarded to rendering. Values are layered defaults → optional JSON
//! file → environment (including a `.env` file) → CLI overrides.

use crate::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS, DEFAULT_DATA_PATH, LOG_LEVELS,
    MAX_SIGHTING_YEAR, MIN_SIGHTING_YEAR, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Global configuration for the sightings engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// CSV source with the BFRO report locations
    pub data_path: PathBuf,

    /// Earliest retained year (inclusive)
    pub min_year: i32,

    /// Latest retained year (inclusive)
    pub max_year: i32,

    /// Maximum number of cached filter results (0 disables caching)
    pub cache_capacity: usize,

    /// Seconds a cached filter result stays valid (0 = until evicted)
    pub cache_ttl_secs: u64,

    /// Map display credential, passed through to the map figure untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_token: Option<String>,

    /// Log level used when no `RUST_LOG` filter is set
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            min_year: MIN_SIGHTING_YEAR,
            max_year: MAX_SIGHTING_YEAR,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            map_token: None,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Read a JSON configuration file; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read config {}", path.display()), e))?;
        serde_json::from_str(&text).map_err(|e| {
            Error::configuration(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// Overlay environment values onto this configuration
    ///
    /// Unset or blank variables leave the current value untouched. The map
    /// token is stored exactly as given; other values are trimmed.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = get(env_vars::DATA_PATH) {
            self.data_path = PathBuf::from(path.trim());
        }
        if let Some(token) = get(env_vars::MAP_TOKEN) {
            self.map_token = Some(token);
        }
        if let Some(capacity) = get(env_vars::CACHE_CAPACITY) {
            self.cache_capacity = parse_env_value(env_vars::CACHE_CAPACITY, capacity.trim())?;
        }
        if let Some(ttl) = get(env_vars::CACHE_TTL_SECS) {
            self.cache_ttl_secs = parse_env_value(env_vars::CACHE_TTL_SECS, ttl.trim())?;
        }
        if let Some(level) = get(env_vars::LOG_LEVEL) {
            self.log_level = level.trim().to_lowercase();
        }

        debug!("Configuration after environment overlay: {:?}", self);
        Ok(())
    }

    /// Cache entry lifetime, `None` when entries never expire
    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_secs > 0).then(|| Duration::from_secs(self.cache_ttl_secs))
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(Error::configuration(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if self.data_path.as_os_str().is_empty() {
            return Err(Error::configuration("data_path must not be empty"));
        }

        Ok(())
    }
}

fn parse_env_value<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| {
        Error::configuration(format!("invalid value '{}' for {}: {}", value, key, e))
    })
}
