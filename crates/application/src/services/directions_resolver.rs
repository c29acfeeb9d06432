//! Route resolution service
//!
//! Waits for the directions provider to become ready, queries it, and turns
//! the outcome into a [`RouteResult`]. Every failure path ends in an
//! estimated route, so `resolve` never fails.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::entities::RouteResult;
use domain::value_objects::{Coordinate, Locale};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use super::candidate_builder::CandidateBuilder;
use super::fallback_route::FallbackRouteSynthesizer;
use super::step_normalizer::StepNormalizer;
use crate::ports::{DirectionsPort, ProviderOutcome};

/// Default time to wait for provider readiness in seconds
const DEFAULT_READINESS_TIMEOUT_SECS: u64 = 10;

/// Default time to wait for a provider answer in seconds
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 15;

/// A route request between two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Start point
    pub origin: Coordinate,
    /// End point
    pub destination: Coordinate,
    /// Display name of the start point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_name: Option<String>,
    /// Display name of the end point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
}

impl RouteRequest {
    /// Request between two unnamed points
    #[must_use]
    pub const fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
            origin_name: None,
            destination_name: None,
        }
    }

    /// Attach display names for the endpoints
    #[must_use]
    pub fn with_names(
        mut self,
        origin_name: impl Into<String>,
        destination_name: impl Into<String>,
    ) -> Self {
        self.origin_name = Some(origin_name.into());
        self.destination_name = Some(destination_name.into());
        self
    }
}

/// Resolver timing and language settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// How long to wait for the provider to become ready
    pub readiness_timeout: Duration,
    /// How long to wait for a provider answer
    pub query_timeout: Duration,
    /// Language of labels and estimate texts
    pub locale: Locale,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            readiness_timeout: Duration::from_secs(DEFAULT_READINESS_TIMEOUT_SECS),
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            locale: Locale::default(),
        }
    }
}

/// Resolves transit routes with an estimated fallback
pub struct DirectionsResolver {
    provider: Arc<dyn DirectionsPort>,
    builder: CandidateBuilder,
    fallback: FallbackRouteSynthesizer,
    config: ResolverConfig,
}

impl fmt::Debug for DirectionsResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsResolver")
            .field("config", &self.config)
            .field("provider_ready", &self.provider.readiness().is_ready())
            .finish_non_exhaustive()
    }
}

impl DirectionsResolver {
    /// Create a resolver with default settings
    #[must_use]
    pub fn new(provider: Arc<dyn DirectionsPort>) -> Self {
        Self::with_config(provider, ResolverConfig::default())
    }

    /// Create a resolver with custom settings
    #[must_use]
    pub fn with_config(provider: Arc<dyn DirectionsPort>, config: ResolverConfig) -> Self {
        Self {
            provider,
            builder: CandidateBuilder::new(StepNormalizer::new(config.locale)),
            fallback: FallbackRouteSynthesizer::new(config.locale),
            config,
        }
    }

    /// Current settings
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a route between two unnamed points
    pub async fn resolve_between(&self, origin: Coordinate, destination: Coordinate) -> RouteResult {
        self.resolve(&RouteRequest::new(origin, destination)).await
    }

    /// Resolve a route, falling back to an estimate on any provider failure
    #[instrument(skip(self, request), fields(origin = %request.origin, destination = %request.destination))]
    pub async fn resolve(&self, request: &RouteRequest) -> RouteResult {
        let outcome = self.fetch(request).await;
        self.dispatch(request, outcome)
    }

    async fn fetch(&self, request: &RouteRequest) -> ProviderOutcome {
        let readiness = self.provider.readiness();
        if timeout(self.config.readiness_timeout, readiness.wait())
            .await
            .is_err()
        {
            return ProviderOutcome::Unavailable {
                reason: format!(
                    "not ready after {}s",
                    self.config.readiness_timeout.as_secs_f32()
                ),
            };
        }

        match timeout(
            self.config.query_timeout,
            self.provider.query(request.origin, request.destination),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => ProviderOutcome::Failed {
                reason: format!(
                    "no answer after {}s",
                    self.config.query_timeout.as_secs_f32()
                ),
            },
        }
    }

    fn dispatch(&self, request: &RouteRequest, outcome: ProviderOutcome) -> RouteResult {
        match outcome {
            ProviderOutcome::Routes(routes) => {
                debug!(candidates = routes.len(), "Provider returned routes");
                if let Some(route) = self.builder.build_skipping_invalid(&routes) {
                    return route;
                }
                warn!("No usable route candidate, using estimate");
            },
            ProviderOutcome::Empty => info!("Provider found no routes, using estimate"),
            other => {
                if let Some(e) = other.error() {
                    warn!(error = %e, "Provider failed, using estimate");
                }
            },
        }
        self.estimate(request)
    }

    fn estimate(&self, request: &RouteRequest) -> RouteResult {
        self.fallback.synthesize(
            request.origin,
            request.destination,
            request.origin_name.as_deref(),
            request.destination_name.as_deref(),
        )
    }
}
