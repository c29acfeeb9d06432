//! Logging and tracing subscriber setup
//!
//! Installs a `tracing-subscriber` registry with an environment filter and a
//! plain or JSON formatting layer.

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "application=debug,integration_directions=debug")
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,

    /// Include the event target (module path)
    #[serde(default = "default_true")]
    pub with_target: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            with_target: true,
        }
    }
}

/// Initialize the global tracing subscriber
///
/// # Example
///
/// ```ignore
/// use infrastructure::telemetry::{TelemetryConfig, init_telemetry};
///
/// init_telemetry(&TelemetryConfig::default())?;
/// ```
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| TelemetryError::Filter(e.to_string()))?;

    let (plain, json) = if config.json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(config.with_target);
        (None, Some(layer))
    } else {
        let layer = tracing_subscriber::fmt::layer().with_target(config.with_target);
        (Some(layer), None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(plain)
        .with(json)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(json = config.json, "Telemetry initialized");
    Ok(())
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// Log filter could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),
}
