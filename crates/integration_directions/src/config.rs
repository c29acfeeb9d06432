//! Directions service configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the transit directions service (Google Directions API)
#[derive(Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Base URL for the directions API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language of instructions and labels; unset follows the caller's locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Region bias (ccTLD code)
    #[serde(default = "default_region")]
    pub region: String,

    /// Transit vehicle kinds to consider
    #[serde(default = "default_transit_modes")]
    pub transit_modes: Vec<String>,

    /// Prefer routes with fewer transfers
    #[serde(default = "default_true")]
    pub fewer_transfers: bool,

    /// Ask for alternative routes
    #[serde(default = "default_true")]
    pub alternatives: bool,

    /// Probe the service before reporting ready
    #[serde(default)]
    pub probe_on_startup: bool,
}

impl std::fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .field("region", &self.region)
            .field("transit_modes", &self.transit_modes)
            .field("fewer_transfers", &self.fewer_transfers)
            .field("alternatives", &self.alternatives)
            .field("probe_on_startup", &self.probe_on_startup)
            .finish()
    }
}

/// Language used when none is configured
pub const DEFAULT_LANGUAGE: &str = "pl";

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_region() -> String {
    "at".to_string()
}

fn default_transit_modes() -> Vec<String> {
    ["bus", "tram", "subway", "rail"]
        .into_iter()
        .map(String::from)
        .collect()
}

const fn default_true() -> bool {
    true
}

/// Transit modes the API accepts
const KNOWN_TRANSIT_MODES: [&str; 5] = ["bus", "tram", "subway", "rail", "train"];

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            language: None,
            region: default_region(),
            transit_modes: default_transit_modes(),
            fewer_transfers: true,
            alternatives: true,
            probe_on_startup: false,
        }
    }
}

impl DirectionsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some(SecretString::from("test-key")),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Configured language, or [`DEFAULT_LANGUAGE`]
    #[must_use]
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("base_url is not a valid URL: {}", self.base_url));
        }

        if self.api_key_str().is_none_or(|key| key.trim().is_empty()) {
            return Err("api_key must be set".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.language.as_deref().is_some_and(|lang| lang.trim().is_empty()) {
            return Err("language must not be empty".to_string());
        }

        if let Some(mode) = self
            .transit_modes
            .iter()
            .find(|mode| !KNOWN_TRANSIT_MODES.contains(&mode.as_str()))
        {
            return Err(format!("unknown transit mode: {mode}"));
        }

        Ok(())
    }
}
