//! Normalized route model
//!
//! Provider-neutral representation of a resolved public transport route:
//! an ordered itinerary of steps, decoded geometry and timing, plus the
//! provider's alternative candidates.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::polyline;
use crate::value_objects::{Coordinate, HexColor, VehicleType};

/// Travel mode of a single step
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "raw", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    /// Walking segment
    Walking,
    /// Ride on a public transport line
    Transit,
    /// Any other provider mode, preserved verbatim; rendered as non-transit
    Other(String),
}

impl TravelMode {
    /// Classify a provider travel-mode tag
    #[must_use]
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "WALKING" => Self::Walking,
            "TRANSIT" => Self::Transit,
            other => Self::Other(other.to_string()),
        }
    }

    /// The tag as the provider spells it
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Walking => "WALKING",
            Self::Transit => "TRANSIT",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line and timing details of a transit step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitDetails {
    /// Short line identifier (e.g. "U1", "13A")
    pub line: String,
    /// Full line name
    pub line_name: String,
    /// Vehicle classification
    pub vehicle_type: VehicleType,
    /// Localized vehicle label
    pub vehicle_label: String,
    /// Human-readable departure time
    pub departure_label: String,
    /// Human-readable arrival time
    pub arrival_label: String,
    /// Departure timestamp
    pub departure_time: DateTime<Utc>,
    /// Arrival timestamp
    pub arrival_time: DateTime<Utc>,
    /// Set when the timestamps were substituted rather than reported
    #[serde(default)]
    pub times_estimated: bool,
    /// Number of stops ridden
    pub stops: u32,
    /// Operating agency
    pub agency: String,
    /// Line color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
    /// Text color to use on top of the line color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<HexColor>,
    /// Direction shown on the vehicle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headsign: Option<String>,
    /// Boarding stop
    #[serde(default)]
    pub departure_stop: String,
    /// Alighting stop
    #[serde(default)]
    pub arrival_stop: String,
}

impl TransitDetails {
    /// Line color, or the vehicle default when the provider sent none
    #[must_use]
    pub fn display_color(&self) -> HexColor {
        self.color
            .clone()
            .unwrap_or_else(|| self.vehicle_type.default_color())
    }
}

/// One instruction of a route itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Instruction text, may contain simple markup
    pub instructions: String,
    /// Duration label
    pub duration: String,
    /// Distance label
    pub distance: String,
    /// Travel mode
    pub travel_mode: TravelMode,
    /// Transit details, present iff `travel_mode` is transit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit: Option<TransitDetails>,
}

impl RouteStep {
    /// Create a walking step
    #[must_use]
    pub fn walking(
        instructions: impl Into<String>,
        duration: impl Into<String>,
        distance: impl Into<String>,
    ) -> Self {
        Self {
            instructions: instructions.into(),
            duration: duration.into(),
            distance: distance.into(),
            travel_mode: TravelMode::Walking,
            transit: None,
        }
    }

    /// Create a transit step
    #[must_use]
    pub fn transit(
        instructions: impl Into<String>,
        duration: impl Into<String>,
        distance: impl Into<String>,
        details: TransitDetails,
    ) -> Self {
        Self {
            instructions: instructions.into(),
            duration: duration.into(),
            distance: distance.into(),
            travel_mode: TravelMode::Transit,
            transit: Some(details),
        }
    }

    /// Whether this step rides a transit line
    #[must_use]
    pub fn is_transit(&self) -> bool {
        self.travel_mode == TravelMode::Transit && self.transit.is_some()
    }
}

/// Where a route came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// Returned by the directions provider
    #[default]
    Provider,
    /// Synthesized locally; timing and geometry are approximations
    Estimated,
}

/// A resolved route with its alternatives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Total duration label
    pub duration: String,
    /// Total distance label
    pub distance: String,
    /// Itinerary in travel order
    pub steps: Vec<RouteStep>,
    /// Decoded path geometry
    pub geometry: Vec<Coordinate>,
    /// Departure timestamp
    pub departure_time: DateTime<Utc>,
    /// Arrival timestamp
    pub arrival_time: DateTime<Utc>,
    /// Provider or local estimate
    #[serde(default)]
    pub source: RouteSource,
    /// Provider's short description (usually the main roads or lines)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Provider warnings to show alongside the route
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Further candidates in provider preference order; never nested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<RouteResult>,
}

impl RouteResult {
    /// Attach alternatives, flattening any they carry themselves
    #[must_use]
    pub fn with_alternatives(mut self, alternatives: Vec<Self>) -> Self {
        let mut flat = Vec::with_capacity(alternatives.len());
        for mut alternative in alternatives {
            let nested = std::mem::take(&mut alternative.alternatives);
            flat.push(alternative);
            flat.extend(nested);
        }
        self.alternatives = flat;
        self
    }

    /// Primary route followed by its alternatives
    pub fn candidates(&self) -> impl Iterator<Item = &Self> {
        std::iter::once(self).chain(self.alternatives.iter())
    }

    /// Number of selectable candidates, primary included
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        1 + self.alternatives.len()
    }

    /// Candidate by index (0 = primary)
    #[must_use]
    pub fn candidate(&self, index: usize) -> Option<&Self> {
        match index {
            0 => Some(self),
            n => self.alternatives.get(n - 1),
        }
    }

    /// Whether the route is a local approximation
    #[must_use]
    pub fn is_estimated(&self) -> bool {
        self.source == RouteSource::Estimated
    }

    /// Steps that ride a transit line
    pub fn transit_steps(&self) -> impl Iterator<Item = &RouteStep> {
        self.steps.iter().filter(|step| step.is_transit())
    }

    /// Number of changes between transit lines
    #[must_use]
    pub fn transfers(&self) -> usize {
        self.transit_steps().count().saturating_sub(1)
    }

    /// Travel time between departure and arrival in whole minutes
    ///
    /// Zero when arrival precedes departure.
    #[must_use]
    pub fn duration_minutes(&self) -> u64 {
        u64::try_from((self.arrival_time - self.departure_time).num_minutes()).unwrap_or(0)
    }

    /// Geometry re-encoded as a polyline string
    #[must_use]
    pub fn encoded_geometry(&self) -> String {
        polyline::encode(&self.geometry)
    }

    /// Compact one-line summary, e.g. `08:00 → 08:25 (25 min) 🚇 U1 → 🚌 13A`
    #[must_use]
    pub fn format_summary(&self) -> String {
        let dep = self.departure_time.format("%H:%M");
        let arr = self.arrival_time.format("%H:%M");
        let lines: Vec<String> = self
            .transit_steps()
            .filter_map(|step| step.transit.as_ref())
            .map(|t| format!("{} {}", t.vehicle_type.emoji(), t.line))
            .collect();
        let marker = if self.is_estimated() { "~" } else { "" };

        format!(
            "{dep} → {arr} ({marker}{}) {}",
            self.duration,
            lines.join(" → ")
        )
        .trim_end()
        .to_string()
    }
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_summary())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, hour, minute, 0).unwrap()
    }

    fn sample_details(line: &str, vehicle_type: VehicleType) -> TransitDetails {
        TransitDetails {
            line: line.to_string(),
            line_name: format!("Linie {line}"),
            vehicle_type,
            vehicle_label: vehicle_type.as_str().to_string(),
            departure_label: "08:02".to_string(),
            arrival_label: "08:14".to_string(),
            departure_time: at(8, 2),
            arrival_time: at(8, 14),
            times_estimated: false,
            stops: 5,
            agency: "Wiener Linien".to_string(),
            color: None,
            text_color: None,
            headsign: Some("Oberlaa".to_string()),
            departure_stop: "Stephansplatz".to_string(),
            arrival_stop: "Reumannplatz".to_string(),
        }
    }

    fn sample_route(duration: &str) -> RouteResult {
        RouteResult {
            duration: duration.to_string(),
            distance: "6.5 km".to_string(),
            steps: vec![
                RouteStep::walking("Walk to Stephansplatz", "2 min", "150 m"),
                RouteStep::transit(
                    "Subway towards Oberlaa",
                    "12 min",
                    "4.1 km",
                    sample_details("U1", VehicleType::Subway),
                ),
                RouteStep::transit(
                    "Bus towards Schönbrunn",
                    "9 min",
                    "2.2 km",
                    sample_details("10A", VehicleType::Bus),
                ),
            ],
            geometry: vec![
                Coordinate::new_unchecked(48.2082, 16.3738),
                Coordinate::new_unchecked(48.1845, 16.3122),
            ],
            departure_time: at(8, 0),
            arrival_time: at(8, 25),
            source: RouteSource::Provider,
            summary: None,
            warnings: Vec::new(),
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn travel_mode_from_provider() {
        assert_eq!(TravelMode::from_provider("WALKING"), TravelMode::Walking);
        assert_eq!(TravelMode::from_provider("TRANSIT"), TravelMode::Transit);
        assert_eq!(
            TravelMode::from_provider("BICYCLING"),
            TravelMode::Other("BICYCLING".to_string())
        );
        assert_eq!(TravelMode::from_provider("BICYCLING").as_str(), "BICYCLING");
    }

    #[test]
    fn transit_step_detection() {
        let route = sample_route("25 min");
        assert!(!route.steps[0].is_transit());
        assert!(route.steps[1].is_transit());

        let other = RouteStep {
            travel_mode: TravelMode::Other("DRIVING".to_string()),
            ..route.steps[0].clone()
        };
        assert!(!other.is_transit());
    }

    #[test]
    fn transfers_count_transit_steps() {
        let route = sample_route("25 min");
        assert_eq!(route.transit_steps().count(), 2);
        assert_eq!(route.transfers(), 1);
    }

    #[test]
    fn candidates_primary_first() {
        let route = sample_route("25 min")
            .with_alternatives(vec![sample_route("28 min"), sample_route("31 min")]);

        assert_eq!(route.candidate_count(), 3);
        let durations: Vec<&str> = route.candidates().map(|c| c.duration.as_str()).collect();
        assert_eq!(durations, ["25 min", "28 min", "31 min"]);
        assert_eq!(route.candidate(2).map(|c| c.duration.as_str()), Some("31 min"));
        assert!(route.candidate(3).is_none());
    }

    #[test]
    fn with_alternatives_keeps_depth_one() {
        let nested = sample_route("28 min").with_alternatives(vec![sample_route("40 min")]);
        let route = sample_route("25 min").with_alternatives(vec![nested]);

        assert_eq!(route.alternatives.len(), 2);
        assert!(route.alternatives.iter().all(|a| a.alternatives.is_empty()));
        assert_eq!(route.alternatives[1].duration, "40 min");
    }

    #[test]
    fn display_color_falls_back_to_vehicle_default() {
        let mut details = sample_details("U1", VehicleType::Subway);
        assert_eq!(details.display_color().as_str(), "#3b82f6");

        details.color = HexColor::parse("e20613");
        assert_eq!(details.display_color().as_str(), "#e20613");
    }

    #[test]
    fn duration_minutes_from_timestamps() {
        assert_eq!(sample_route("25 min").duration_minutes(), 25);
    }

    #[test]
    fn reversed_timestamps_give_zero_minutes() {
        let mut route = sample_route("25 min");
        route.arrival_time = at(7, 30);
        assert_eq!(route.duration_minutes(), 0);
    }

    #[test]
    fn encoded_geometry_round_trips() {
        let route = sample_route("25 min");
        let decoded = polyline::decode(&route.encoded_geometry()).unwrap();
        assert_eq!(decoded, route.geometry);
    }

    #[test]
    fn summary_lists_lines() {
        let summary = sample_route("25 min").format_summary();
        assert!(summary.contains("08:00"));
        assert!(summary.contains("08:25"));
        assert!(summary.contains("🚇 U1 → 🚌 10A"), "got {summary}");
    }

    #[test]
    fn summary_marks_estimates() {
        let mut route = sample_route("20-30 min");
        route.source = RouteSource::Estimated;
        assert!(route.is_estimated());
        assert!(route.to_string().contains("~20-30 min"));
    }

    #[test]
    fn serialization_skips_empty_collections() {
        let json = serde_json::to_string(&sample_route("25 min")).unwrap();
        assert!(!json.contains("alternatives"));
        assert!(!json.contains("warnings"));
        assert!(json.contains("\"source\":\"provider\""));

        let back: RouteResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_route("25 min"));
    }
}
