//! Display locale for human-readable route labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language used for vehicle labels, estimate texts and provider instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Polish (default)
    #[default]
    Polish,
    /// English
    English,
}

impl Locale {
    /// Language code passed to the directions provider
    #[must_use]
    pub const fn language_code(&self) -> &'static str {
        match self {
            Self::Polish => "pl",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language_code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pl" | "polish" => Ok(Self::Polish),
            "en" | "english" => Ok(Self::English),
            _ => Err(format!("Unsupported locale: {s}. Use 'pl' or 'en'")),
        }
    }
}
