//! Configuration types for land-feasibility

use crate::feasibility::PolicyConfig;
use crate::parcel::ServiceArea;
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Batch evaluation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Worker threads for parallel evaluation (0 = rayon default)
    #[serde(default)]
    pub max_threads: usize,

    /// Below this many deals, evaluate sequentially
    #[serde(default = "default_min_parallel_jobs")]
    pub min_parallel_jobs: usize,

    /// Bounds that cached parcel lookups must fall inside
    #[serde(default)]
    pub service_area: ServiceArea,
}

fn default_min_parallel_jobs() -> usize {
    8
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            min_parallel_jobs: default_min_parallel_jobs(),
            service_area: ServiceArea::default(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.policy.validate()?;
        Ok(config)
    }
}
