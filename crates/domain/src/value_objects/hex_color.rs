//! Hex RGB color value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `#RRGGBB` or `#RGB` color string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a provider color, tolerating a missing leading `#`
    ///
    /// Returns `None` for empty or non-hex input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.trim().trim_start_matches('#');
        let valid_len = digits.len() == 6 || digits.len() == 3;
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    /// Wrap an already-normalized `#rrggbb` literal
    pub(crate) fn from_trusted(value: &str) -> Self {
        Self(value.to_string())
    }

    /// The normalized color string including the leading `#`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("Invalid hex color: {value}"))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
