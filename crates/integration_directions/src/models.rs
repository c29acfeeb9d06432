//! Directions data models
//!
//! Typed representations of the Google Directions API JSON response,
//! restricted to the fields used for transit routing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level directions response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectionsResponse {
    /// API status code (`OK`, `ZERO_RESULTS`, ...)
    pub status: String,
    /// Detail message accompanying a non-`OK` status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Candidate routes, most preferred first
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    /// Whether the API reported success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// One candidate route
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    /// Short description, usually the main lines or roads
    #[serde(default)]
    pub summary: String,
    /// Encoded overview path
    #[serde(default)]
    pub overview_polyline: EncodedPolyline,
    /// Warnings to display with the route
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Legs between origin, waypoints and destination
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// Encoded polyline wrapper
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncodedPolyline {
    /// Encoded point string
    #[serde(default)]
    pub points: String,
}

/// A measured quantity with display text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextValue {
    /// Localized display text (e.g. "25 min")
    #[serde(default)]
    pub text: String,
    /// Value in seconds or meters
    #[serde(default)]
    pub value: u64,
}

/// A point in time with display text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeValue {
    /// Localized display text (e.g. "08:02")
    #[serde(default)]
    pub text: String,
    /// Seconds since the Unix epoch
    pub value: i64,
    /// IANA time zone of the stop
    #[serde(default)]
    pub time_zone: String,
}

impl TimeValue {
    /// The instant as a UTC timestamp
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.value, 0)
    }
}

/// One leg of a route
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Leg {
    /// Leg duration
    #[serde(default)]
    pub duration: TextValue,
    /// Leg distance
    #[serde(default)]
    pub distance: TextValue,
    /// Departure time (transit only)
    #[serde(default)]
    pub departure_time: Option<TimeValue>,
    /// Arrival time (transit only)
    #[serde(default)]
    pub arrival_time: Option<TimeValue>,
    /// Geocoded start address
    #[serde(default)]
    pub start_address: String,
    /// Geocoded end address
    #[serde(default)]
    pub end_address: String,
    /// Steps in travel order
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One step of a leg
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Instruction, may contain HTML markup
    #[serde(default)]
    pub html_instructions: String,
    /// Step duration
    #[serde(default)]
    pub duration: TextValue,
    /// Step distance
    #[serde(default)]
    pub distance: TextValue,
    /// Travel mode (`WALKING`, `TRANSIT`, ...)
    #[serde(default)]
    pub travel_mode: String,
    /// Transit details for `TRANSIT` steps
    #[serde(default)]
    pub transit_details: Option<TransitDetails>,
}

/// Transit-specific data of a step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransitDetails {
    /// Line ridden
    #[serde(default)]
    pub line: Line,
    /// Boarding stop
    #[serde(default)]
    pub departure_stop: Option<Stop>,
    /// Alighting stop
    #[serde(default)]
    pub arrival_stop: Option<Stop>,
    /// Departure time
    #[serde(default)]
    pub departure_time: Option<TimeValue>,
    /// Arrival time
    #[serde(default)]
    pub arrival_time: Option<TimeValue>,
    /// Direction shown on the vehicle
    #[serde(default)]
    pub headsign: Option<String>,
    /// Number of stops ridden
    #[serde(default)]
    pub num_stops: Option<u32>,
}

/// Transit line
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Line {
    /// Full line name
    #[serde(default)]
    pub name: Option<String>,
    /// Abbreviated line name
    #[serde(default)]
    pub short_name: Option<String>,
    /// Line color as hex without `#`
    #[serde(default)]
    pub color: Option<String>,
    /// Text color as hex without `#`
    #[serde(default)]
    pub text_color: Option<String>,
    /// Vehicle used on the line
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    /// Operating agencies
    #[serde(default)]
    pub agencies: Vec<Agency>,
}

/// Transit vehicle
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    /// Localized vehicle name
    #[serde(default)]
    pub name: Option<String>,
    /// Vehicle type (`BUS`, `SUBWAY`, ...)
    #[serde(default, rename = "type")]
    pub vehicle_type: Option<String>,
}

/// Transit agency
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agency {
    /// Agency name
    #[serde(default)]
    pub name: String,
}

/// Transit stop
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stop {
    /// Stop name
    #[serde(default)]
    pub name: String,
}
