//! Route resolution settings

use std::time::Duration;

use application::services::ResolverConfig;
use domain::value_objects::Locale;
use serde::{Deserialize, Serialize};

/// Timeouts and locale of the route resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Seconds to wait for the provider to become ready
    #[serde(default = "default_readiness_timeout_secs")]
    pub readiness_timeout_secs: u64,

    /// Seconds to wait for a provider answer
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Language of labels and estimate texts
    #[serde(default)]
    pub locale: Locale,
}

const fn default_readiness_timeout_secs() -> u64 {
    10
}

const fn default_query_timeout_secs() -> u64 {
    15
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            readiness_timeout_secs: default_readiness_timeout_secs(),
            query_timeout_secs: default_query_timeout_secs(),
            locale: Locale::default(),
        }
    }
}

impl ResolverSettings {
    /// Resolver configuration for these settings
    #[must_use]
    pub const fn to_resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            readiness_timeout: Duration::from_secs(self.readiness_timeout_secs),
            query_timeout: Duration::from_secs(self.query_timeout_secs),
            locale: self.locale,
        }
    }

    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.readiness_timeout_secs == 0 {
            return Err("readiness_timeout_secs must be greater than 0".to_string());
        }

        if self.query_timeout_secs == 0 {
            return Err("query_timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
