//! Transit vehicle classification

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{HexColor, Locale};

/// Vehicle classification of a transit step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    /// Bus, trolleybus, intercity bus
    Bus,
    /// Tram / Straßenbahn
    Tram,
    /// Subway / U-Bahn / metro
    Subway,
    /// Any heavy, commuter or long-distance rail
    Rail,
    /// Ferry
    Ferry,
    /// Cable car
    CableCar,
    /// Gondola lift
    GondolaLift,
    /// Funicular
    Funicular,
    /// Missing or unrecognized classification
    #[default]
    Other,
}

impl VehicleType {
    /// Every classification, in declaration order
    pub const ALL: [Self; 9] = [
        Self::Bus,
        Self::Tram,
        Self::Subway,
        Self::Rail,
        Self::Ferry,
        Self::CableCar,
        Self::GondolaLift,
        Self::Funicular,
        Self::Other,
    ];

    /// Map a provider vehicle type string to a classification
    ///
    /// Provider subtypes are folded into the nearest classification.
    #[must_use]
    pub fn from_provider(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "BUS" | "INTERCITY_BUS" | "TROLLEYBUS" | "SHARE_TAXI" => Self::Bus,
            "TRAM" => Self::Tram,
            "SUBWAY" | "METRO_RAIL" => Self::Subway,
            "RAIL" | "HEAVY_RAIL" | "COMMUTER_TRAIN" | "HIGH_SPEED_TRAIN"
            | "LONG_DISTANCE_TRAIN" | "MONORAIL" => Self::Rail,
            "FERRY" => Self::Ferry,
            "CABLE_CAR" => Self::CableCar,
            "GONDOLA_LIFT" => Self::GondolaLift,
            "FUNICULAR" => Self::Funicular,
            _ => Self::Other,
        }
    }

    /// Canonical upper-case tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bus => "BUS",
            Self::Tram => "TRAM",
            Self::Subway => "SUBWAY",
            Self::Rail => "RAIL",
            Self::Ferry => "FERRY",
            Self::CableCar => "CABLE_CAR",
            Self::GondolaLift => "GONDOLA_LIFT",
            Self::Funicular => "FUNICULAR",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable label in the given locale
    #[must_use]
    pub const fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Polish => match self {
                Self::Bus => "Autobus",
                Self::Tram => "Tramwaj",
                Self::Subway => "Metro",
                Self::Rail => "Pociąg",
                Self::Ferry => "Prom",
                Self::CableCar => "Kolejka linowa",
                Self::GondolaLift => "Gondola",
                Self::Funicular => "Kolej linowo-terenowa",
                Self::Other => "Transport publiczny",
            },
            Locale::English => match self {
                Self::Bus => "Bus",
                Self::Tram => "Tram",
                Self::Subway => "Subway",
                Self::Rail => "Train",
                Self::Ferry => "Ferry",
                Self::CableCar => "Cable car",
                Self::GondolaLift => "Gondola lift",
                Self::Funicular => "Funicular",
                Self::Other => "Public transport",
            },
        }
    }

    /// Line color used when the provider does not supply one
    #[must_use]
    pub const fn default_color_hex(&self) -> &'static str {
        match self {
            Self::Bus => "#f59e0b",
            Self::Tram => "#10b981",
            Self::Subway => "#3b82f6",
            Self::Rail => "#8b5cf6",
            Self::Ferry => "#06b6d4",
            Self::CableCar => "#f97316",
            Self::GondolaLift => "#ef4444",
            Self::Funicular => "#84cc16",
            Self::Other => "#6b7280",
        }
    }

    /// [`Self::default_color_hex`] as a [`HexColor`]
    #[must_use]
    pub fn default_color(&self) -> HexColor {
        HexColor::from_trusted(self.default_color_hex())
    }

    /// Emoji representation for compact summaries
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Bus | Self::Other => "🚌",
            Self::Tram => "🚋",
            Self::Subway => "🚇",
            Self::Rail => "🚆",
            Self::Ferry => "⛴️",
            Self::CableCar => "🚠",
            Self::GondolaLift => "🚡",
            Self::Funicular => "🚞",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
