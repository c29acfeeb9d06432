//! Route candidate assembly
//!
//! Turns provider route records into [`RouteResult`] values: decodes the
//! overview geometry, flattens the legs into one itinerary and attaches
//! the remaining candidates as alternatives.

use chrono::{DateTime, TimeDelta, Utc};
use domain::entities::{RouteResult, RouteSource};
use domain::polyline::{self, PolylineError};
use thiserror::Error;
use tracing::warn;

use super::step_normalizer::StepNormalizer;
use crate::ports::{ProviderLeg, ProviderRoute};

/// Why a provider route could not become a candidate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CandidateError {
    /// Overview geometry could not be decoded
    #[error("Invalid route geometry: {0}")]
    Geometry(#[from] PolylineError),

    /// Route has no legs
    #[error("Route has no legs")]
    NoLegs,
}

/// Builds route results from provider candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateBuilder {
    normalizer: StepNormalizer,
}

impl CandidateBuilder {
    /// Create a builder using `normalizer` for steps
    #[must_use]
    pub const fn new(normalizer: StepNormalizer) -> Self {
        Self { normalizer }
    }

    /// Build one candidate, using the current time for missing timestamps
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is malformed or the route has no legs.
    pub fn build_candidate(&self, route: &ProviderRoute) -> Result<RouteResult, CandidateError> {
        self.build_candidate_at(route, Utc::now())
    }

    /// Build one candidate against a fixed `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is malformed or the route has no legs.
    pub fn build_candidate_at(
        &self,
        route: &ProviderRoute,
        now: DateTime<Utc>,
    ) -> Result<RouteResult, CandidateError> {
        let (Some(first), Some(last)) = (route.legs.first(), route.legs.last()) else {
            return Err(CandidateError::NoLegs);
        };
        let geometry = polyline::decode(&route.overview_polyline)?;

        let steps = route
            .legs
            .iter()
            .flat_map(|leg| leg.steps.iter())
            .map(|step| self.normalizer.normalize_at(step, now))
            .collect();

        let departure_time = first.departure_time.unwrap_or(now);
        let arrival_time = last
            .arrival_time
            .unwrap_or_else(|| departure_time + total_duration(&route.legs));

        Ok(RouteResult {
            duration: join_labels(&route.legs, |leg| leg.duration.as_str()),
            distance: join_labels(&route.legs, |leg| leg.distance.as_str()),
            steps,
            geometry,
            departure_time,
            arrival_time,
            source: RouteSource::Provider,
            summary: route.summary.clone().filter(|s| !s.is_empty()),
            warnings: route.warnings.clone(),
            alternatives: Vec::new(),
        })
    }

    /// Build primary route plus alternatives, failing on any malformed route
    ///
    /// # Errors
    ///
    /// Returns the first candidate error encountered.
    pub fn build(&self, routes: &[ProviderRoute]) -> Result<Option<RouteResult>, CandidateError> {
        let now = Utc::now();
        let candidates = routes
            .iter()
            .map(|route| self.build_candidate_at(route, now))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::assemble(candidates))
    }

    /// Build primary route plus alternatives, skipping malformed routes
    #[must_use]
    pub fn build_skipping_invalid(&self, routes: &[ProviderRoute]) -> Option<RouteResult> {
        let now = Utc::now();
        let candidates = routes
            .iter()
            .enumerate()
            .filter_map(|(index, route)| match self.build_candidate_at(route, now) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed route candidate");
                    None
                },
            })
            .collect();
        Self::assemble(candidates)
    }

    /// First candidate as primary, the rest as its alternatives
    #[must_use]
    pub fn assemble(candidates: Vec<RouteResult>) -> Option<RouteResult> {
        let mut candidates = candidates.into_iter();
        let primary = candidates.next()?;
        Some(primary.with_alternatives(candidates.collect()))
    }
}

/// Per-leg labels joined in travel order
fn join_labels(legs: &[ProviderLeg], label: impl Fn(&ProviderLeg) -> &str) -> String {
    legs.iter().map(label).collect::<Vec<_>>().join(" + ")
}

fn total_duration(legs: &[ProviderLeg]) -> TimeDelta {
    let seconds: u64 = legs.iter().filter_map(|leg| leg.duration_seconds).sum();
    i64::try_from(seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or_default()
}
