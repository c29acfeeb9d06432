//! Estimated fallback route
//!
//! When the provider cannot produce a route, a fixed three-step estimate is
//! synthesized so the caller always has something to display. The geometry
//! is the straight line between the endpoints.

use chrono::{DateTime, TimeDelta, Utc};
use domain::entities::{RouteResult, RouteSource, RouteStep, TransitDetails};
use domain::value_objects::{Coordinate, Locale, VehicleType};

/// Minutes from departure to estimated arrival
const ESTIMATED_TRIP_MINUTES: i64 = 25;

/// Minutes from departure to the end of the estimated ride
const ESTIMATED_RIDE_MINUTES: i64 = 20;

/// Stop count shown for the estimated ride
const ESTIMATED_STOPS: u32 = 8;

/// Localized texts of the fallback itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackTexts {
    /// Total duration label
    pub duration: &'static str,
    /// Total distance label
    pub distance: &'static str,
    /// Prefix of the opening walk, followed by the origin name
    pub start_prefix: &'static str,
    /// Instruction of the estimated ride
    pub ride: &'static str,
    /// Prefix of the closing walk, followed by the destination name
    pub finish_prefix: &'static str,
    /// Line and agency placeholder
    pub lines: &'static str,
    /// Vehicle label of the estimated ride
    pub vehicle: &'static str,
}

impl FallbackTexts {
    /// Texts for `locale`
    #[must_use]
    pub const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Polish => Self {
                duration: "Szacowany czas: 20-30 min",
                distance: "Szacowany dystans: 5-10 km",
                start_prefix: "Rozpocznij podróż z lokalizacji",
                ride: "Skorzystaj z komunikacji publicznej (autobus lub tramwaj)",
                finish_prefix: "Dojdź do celu",
                lines: "Różne linie",
                vehicle: "Autobus/Tramwaj",
            },
            Locale::English => Self {
                duration: "Estimated time: 20-30 min",
                distance: "Estimated distance: 5-10 km",
                start_prefix: "Start your journey at",
                ride: "Take public transport (bus or tram)",
                finish_prefix: "Walk to your destination",
                lines: "Various lines",
                vehicle: "Bus/Tram",
            },
        }
    }
}

/// Synthesizes estimated routes
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackRouteSynthesizer {
    locale: Locale,
}

impl FallbackRouteSynthesizer {
    /// Create a synthesizer producing texts in `locale`
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Estimate a route departing now
    ///
    /// Endpoint names default to the coordinate display.
    #[must_use]
    pub fn synthesize(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        origin_name: Option<&str>,
        destination_name: Option<&str>,
    ) -> RouteResult {
        self.synthesize_at(origin, destination, origin_name, destination_name, Utc::now())
    }

    /// Estimate a route departing at `now`
    #[must_use]
    pub fn synthesize_at(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        origin_name: Option<&str>,
        destination_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> RouteResult {
        let texts = FallbackTexts::for_locale(self.locale);
        let origin_label = origin_name.map_or_else(|| origin.to_string(), str::to_string);
        let destination_label =
            destination_name.map_or_else(|| destination.to_string(), str::to_string);

        let vehicle_type = VehicleType::Bus;
        let ride = TransitDetails {
            line: texts.lines.to_string(),
            line_name: texts.vehicle.to_string(),
            vehicle_type,
            vehicle_label: texts.vehicle.to_string(),
            departure_label: now.format("%H:%M").to_string(),
            arrival_label: (now + TimeDelta::minutes(ESTIMATED_RIDE_MINUTES))
                .format("%H:%M")
                .to_string(),
            departure_time: now,
            arrival_time: now + TimeDelta::minutes(ESTIMATED_RIDE_MINUTES),
            times_estimated: true,
            stops: ESTIMATED_STOPS,
            agency: texts.lines.to_string(),
            color: Some(vehicle_type.default_color()),
            text_color: None,
            headsign: None,
            departure_stop: String::new(),
            arrival_stop: String::new(),
        };

        RouteResult {
            duration: texts.duration.to_string(),
            distance: texts.distance.to_string(),
            steps: vec![
                RouteStep::walking(
                    format!("{}: {origin_label}", texts.start_prefix),
                    "2 min",
                    "200 m",
                ),
                RouteStep::transit(texts.ride, "15-25 min", "4-9 km", ride),
                RouteStep::walking(
                    format!("{}: {destination_label}", texts.finish_prefix),
                    "3 min",
                    "300 m",
                ),
            ],
            geometry: vec![origin, destination],
            departure_time: now,
            arrival_time: now + TimeDelta::minutes(ESTIMATED_TRIP_MINUTES),
            source: RouteSource::Estimated,
            summary: None,
            warnings: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}
