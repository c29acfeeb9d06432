//! Directions provider port
//!
//! Defines the contract the route engine requires from an external
//! transit-directions provider. Adapters in the infrastructure layer
//! implement this port and translate provider payloads into the raw
//! records below; normalization happens in the application services.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;
use crate::readiness::ReadinessGate;

/// Transit sub-record of a provider step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderTransit {
    /// Full line name
    pub line_name: Option<String>,
    /// Abbreviated line name
    pub line_short_name: Option<String>,
    /// Vehicle type tag (e.g. "BUS", "SUBWAY")
    pub vehicle_type: Option<String>,
    /// Operating agencies, most relevant first
    #[serde(default)]
    pub agencies: Vec<String>,
    /// Human-readable departure time
    pub departure_label: Option<String>,
    /// Human-readable arrival time
    pub arrival_label: Option<String>,
    /// Departure timestamp
    pub departure_time: Option<DateTime<Utc>>,
    /// Arrival timestamp
    pub arrival_time: Option<DateTime<Utc>>,
    /// Number of stops
    pub num_stops: Option<u32>,
    /// Line color, usually without a leading `#`
    pub color: Option<String>,
    /// Line text color
    pub text_color: Option<String>,
    /// Direction shown on the vehicle
    pub headsign: Option<String>,
    /// Boarding stop name
    pub departure_stop: Option<String>,
    /// Alighting stop name
    pub arrival_stop: Option<String>,
}

/// One step of a provider leg
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStep {
    /// Instruction text
    pub instructions: String,
    /// Duration label
    pub duration: String,
    /// Distance label
    pub distance: String,
    /// Provider travel-mode tag
    pub travel_mode: String,
    /// Transit data, if the provider attached any
    pub transit: Option<ProviderTransit>,
}

/// One leg of a provider route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderLeg {
    /// Duration label
    pub duration: String,
    /// Distance label
    pub distance: String,
    /// Duration in seconds, when reported
    pub duration_seconds: Option<u64>,
    /// Leg departure timestamp
    pub departure_time: Option<DateTime<Utc>>,
    /// Leg arrival timestamp
    pub arrival_time: Option<DateTime<Utc>>,
    /// Steps in travel order
    #[serde(default)]
    pub steps: Vec<ProviderStep>,
}

/// One candidate route as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRoute {
    /// Encoded overview geometry
    pub overview_polyline: String,
    /// Provider summary text
    pub summary: Option<String>,
    /// Provider warnings
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Legs in travel order
    #[serde(default)]
    pub legs: Vec<ProviderLeg>,
}

/// Result of a single provider query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    /// One or more routes, most preferred first
    Routes(Vec<ProviderRoute>),
    /// Provider could not be reached or never became ready
    Unavailable {
        /// Why the provider is unavailable
        reason: String,
    },
    /// Provider answered with an error status
    Failed {
        /// Provider status or error message
        reason: String,
    },
    /// Provider answered successfully with no routes
    Empty,
}

impl ProviderOutcome {
    /// Wrap provider routes, mapping an empty list to [`Self::Empty`]
    #[must_use]
    pub fn from_routes(routes: Vec<ProviderRoute>) -> Self {
        if routes.is_empty() {
            Self::Empty
        } else {
            Self::Routes(routes)
        }
    }

    /// The error this outcome represents, if any
    #[must_use]
    pub fn error(&self) -> Option<ApplicationError> {
        match self {
            Self::Routes(_) => None,
            Self::Unavailable { reason } => {
                Some(ApplicationError::ProviderUnavailable(reason.clone()))
            },
            Self::Failed { reason } => Some(ApplicationError::ProviderQueryFailed(reason.clone())),
            Self::Empty => Some(ApplicationError::EmptyResult),
        }
    }
}

/// Port for transit directions queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Readiness signal completed by the provider's initialization
    fn readiness(&self) -> ReadinessGate;

    /// Query transit routes between two points
    ///
    /// Implementations report every failure through the outcome.
    async fn query(&self, origin: Coordinate, destination: Coordinate) -> ProviderOutcome;

    /// Check if the provider is reachable
    async fn is_available(&self) -> bool;
}
