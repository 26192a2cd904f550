//! Telemetry module
//!
//! Structured logging and evaluation metrics

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{install_recorder, record_error, record_evaluation};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)
}
