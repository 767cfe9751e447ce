//! Backend Configuration
//!
//! JSON file with every field optional, plus environment overrides:
//! `KANBAN_LATENCY_MIN_MS`, `KANBAN_LATENCY_MAX_MS`, `KANBAN_SEED`.

use std::path::Path;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },
}

fn default_latency_min_ms() -> u64 {
    200
}

fn default_latency_max_ms() -> u64 {
    500
}

fn default_seed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Lower bound of the simulated latency per call
    #[serde(default = "default_latency_min_ms")]
    pub latency_min_ms: u64,
    #[serde(default = "default_latency_max_ms")]
    pub latency_max_ms: u64,
    /// Start from the sample board instead of an empty one
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            latency_min_ms: default_latency_min_ms(),
            latency_max_ms: default_latency_max_ms(),
            seed: default_seed(),
        }
    }
}

impl BackendConfig {
    /// No latency, seeded board
    pub fn instant() -> Self {
        Self {
            latency_min_ms: 0,
            latency_max_ms: 0,
            seed: true,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(value) = env_value::<u64>("KANBAN_LATENCY_MIN_MS")? {
            self.latency_min_ms = value;
        }
        if let Some(value) = env_value::<u64>("KANBAN_LATENCY_MAX_MS")? {
            self.latency_max_ms = value;
        }
        if let Some(value) = env_value::<bool>("KANBAN_SEED")? {
            self.seed = value;
        }
        Ok(self)
    }

    /// Pick a delay in `[min, max]`. A reversed range is read as `[max, min]`.
    pub fn sample_latency(&self) -> Duration {
        let low = self.latency_min_ms.min(self.latency_max_ms);
        let high = self.latency_min_ms.max(self.latency_max_ms);
        if high == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(low..=high))
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                key: key.to_string(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}
