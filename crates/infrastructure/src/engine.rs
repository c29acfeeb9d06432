//! Route engine wiring
//!
//! Builds the directions adapter and resolver from [`AppConfig`] and exposes
//! the resolve entry points.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::DirectionsPort;
use application::services::{DirectionsResolver, RouteRequest};
use domain::entities::RouteResult;
use domain::value_objects::Coordinate;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::adapters::DirectionsAdapter;
use crate::config::AppConfig;

/// Fully wired route resolution engine
#[derive(Debug)]
pub struct RouteEngine {
    adapter: Arc<DirectionsAdapter>,
    resolver: DirectionsResolver,
}

impl RouteEngine {
    /// Build the engine from configuration
    ///
    /// The provider is not initialized yet; call [`Self::initialize`] or
    /// [`Self::spawn_initialization`]. Requests issued before that wait for
    /// readiness up to the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;

        let adapter = Arc::new(DirectionsAdapter::from_config(&config.effective_directions())?);
        let provider: Arc<dyn DirectionsPort> = adapter.clone();
        let resolver =
            DirectionsResolver::with_config(provider, config.resolver.to_resolver_config());

        info!(
            locale = %config.resolver.locale,
            readiness_timeout_secs = config.resolver.readiness_timeout_secs,
            "Route engine configured"
        );

        Ok(Self { adapter, resolver })
    }

    /// Initialize the provider in place
    ///
    /// # Errors
    ///
    /// Returns an error if the provider startup probe fails.
    pub async fn initialize(&self) -> Result<(), ApplicationError> {
        self.adapter.initialize().await
    }

    /// Initialize the provider on a background task
    pub fn spawn_initialization(&self) -> JoinHandle<()> {
        let adapter = Arc::clone(&self.adapter);
        tokio::spawn(async move {
            if let Err(e) = adapter.initialize().await {
                warn!(error = %e, "Directions provider initialization failed");
            }
        })
    }

    /// Whether the provider has finished initialization
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.adapter.readiness().is_ready()
    }

    /// The underlying resolver
    #[must_use]
    pub const fn resolver(&self) -> &DirectionsResolver {
        &self.resolver
    }

    /// Resolve a route; never fails, falling back to an estimate
    pub async fn resolve(&self, request: &RouteRequest) -> RouteResult {
        self.resolver.resolve(request).await
    }

    /// Resolve a route between two unnamed points
    pub async fn resolve_between(&self, origin: Coordinate, destination: Coordinate) -> RouteResult {
        self.resolver.resolve_between(origin, destination).await
    }
}
