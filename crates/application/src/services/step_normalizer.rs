//! Transit step normalization
//!
//! Maps provider step records to [`RouteStep`], filling defaults for any
//! absent fields.

use chrono::{DateTime, Utc};
use domain::entities::{RouteStep, TransitDetails, TravelMode};
use domain::value_objects::{HexColor, Locale, VehicleType};
use tracing::debug;

use crate::ports::{ProviderStep, ProviderTransit};

/// Converts provider steps into normalized route steps
#[derive(Debug, Clone, Copy, Default)]
pub struct StepNormalizer {
    locale: Locale,
}

impl StepNormalizer {
    /// Create a normalizer producing labels in `locale`
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Normalize a step, using the current time for missing timestamps
    #[must_use]
    pub fn normalize(&self, raw: &ProviderStep) -> RouteStep {
        self.normalize_at(raw, Utc::now())
    }

    /// Normalize a step against a fixed `now`
    #[must_use]
    pub fn normalize_at(&self, raw: &ProviderStep, now: DateTime<Utc>) -> RouteStep {
        let travel_mode = TravelMode::from_provider(&raw.travel_mode);
        let transit = match (&travel_mode, &raw.transit) {
            (TravelMode::Transit, Some(transit)) => Some(self.transit_details(transit, now)),
            _ => None,
        };

        RouteStep {
            instructions: raw.instructions.clone(),
            duration: raw.duration.clone(),
            distance: raw.distance.clone(),
            travel_mode,
            transit,
        }
    }

    fn transit_details(&self, raw: &ProviderTransit, now: DateTime<Utc>) -> TransitDetails {
        let vehicle_type = raw
            .vehicle_type
            .as_deref()
            .map(VehicleType::from_provider)
            .unwrap_or_default();

        let short_name = raw.line_short_name.as_deref();
        let name = raw.line_name.as_deref();
        let line = first_present(short_name, name);
        let line_name = first_present(name, short_name);
        let (departure_time, arrival_time, times_estimated) =
            resolve_times(raw.departure_time, raw.arrival_time, now);

        if times_estimated {
            debug!(line = %line, "Transit step times substituted");
        }

        TransitDetails {
            line,
            line_name,
            vehicle_type,
            vehicle_label: vehicle_type.label(self.locale).to_string(),
            departure_label: raw.departure_label.clone().unwrap_or_default(),
            arrival_label: raw.arrival_label.clone().unwrap_or_default(),
            departure_time,
            arrival_time,
            times_estimated,
            stops: raw.num_stops.unwrap_or(0),
            agency: raw.agencies.first().cloned().unwrap_or_default(),
            color: raw.color.as_deref().and_then(HexColor::parse),
            text_color: raw.text_color.as_deref().and_then(HexColor::parse),
            headsign: raw.headsign.clone().filter(|h| !h.is_empty()),
            departure_stop: raw.departure_stop.clone().unwrap_or_default(),
            arrival_stop: raw.arrival_stop.clone().unwrap_or_default(),
        }
    }
}

/// First non-empty value of the two, or an empty string
fn first_present(preferred: Option<&str>, fallback: Option<&str>) -> String {
    [preferred, fallback]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Departure, arrival and whether either was substituted
fn resolve_times(
    departure: Option<DateTime<Utc>>,
    arrival: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>, bool) {
    match (departure, arrival) {
        (Some(dep), Some(arr)) if arr < dep => (dep, dep, true),
        (Some(dep), Some(arr)) => (dep, arr, false),
        (dep, arr) => (dep.unwrap_or(now), arr.unwrap_or(now), true),
    }
}
