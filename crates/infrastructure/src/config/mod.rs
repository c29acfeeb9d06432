//! Application configuration
//!
//! Aggregates the directions, resolver and telemetry settings. Values come
//! from built-in defaults, an optional `config.toml`, and `TRANSIT_ROUTER_*`
//! environment variables, in increasing precedence.

mod resolver;

use integration_directions::DirectionsConfig;
use serde::{Deserialize, Serialize};

pub use resolver::ResolverSettings;

use crate::telemetry::TelemetryConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "TRANSIT_ROUTER";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directions provider configuration
    #[serde(default)]
    pub directions: DirectionsConfig,

    /// Route resolver settings
    #[serde(default)]
    pub resolver: ResolverSettings,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Nested keys use `__`, e.g. `TRANSIT_ROUTER_DIRECTIONS__API_KEY`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("directions.transit_modes")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Load configuration from TOML text only
    pub fn from_toml(contents: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Directions settings with the language following the resolver locale
    ///
    /// An explicitly configured language is kept.
    #[must_use]
    pub fn effective_directions(&self) -> DirectionsConfig {
        let mut directions = self.directions.clone();
        if directions.language.is_none() {
            directions.language = Some(self.resolver.locale.language_code().to_string());
        }
        directions
    }

    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns the first section error, prefixed with the section name.
    pub fn validate(&self) -> Result<(), String> {
        self.directions
            .validate()
            .map_err(|e| format!("directions: {e}"))?;
        self.resolver
            .validate()
            .map_err(|e| format!("resolver: {e}"))?;
        Ok(())
    }
}
