//! Directions adapter - Implements DirectionsPort using integration_directions

use application::error::ApplicationError;
use application::ports::{
    DirectionsPort, ProviderLeg, ProviderOutcome, ProviderRoute, ProviderStep, ProviderTransit,
};
use application::readiness::ReadinessGate;
use async_trait::async_trait;
use domain::value_objects::Coordinate;
use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, GoogleDirectionsClient, Leg, Route, Step,
    TransitDetails,
};
use tracing::{debug, info, instrument, warn};

/// Adapter for transit directions using the Google Directions API
pub struct DirectionsAdapter {
    client: GoogleDirectionsClient,
    readiness: ReadinessGate,
    probe_on_startup: bool,
}

impl std::fmt::Debug for DirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsAdapter")
            .field("client", &"GoogleDirectionsClient")
            .field("ready", &self.readiness.is_ready())
            .field("probe_on_startup", &self.probe_on_startup)
            .finish()
    }
}

impl DirectionsAdapter {
    /// Create a new adapter around an existing client
    ///
    /// The adapter is not ready until [`Self::initialize`] succeeds.
    pub fn new(client: GoogleDirectionsClient) -> Self {
        let probe_on_startup = client.config().probe_on_startup;
        Self {
            client,
            readiness: ReadinessGate::new(),
            probe_on_startup,
        }
    }

    /// Validate the configuration and build the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the client
    /// cannot be built.
    pub fn from_config(config: &DirectionsConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        let client = GoogleDirectionsClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Complete initialization and open the readiness gate
    ///
    /// With `probe_on_startup` the service must answer a health check first.
    ///
    /// # Errors
    ///
    /// Returns an error if the startup probe fails; the gate stays closed.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<(), ApplicationError> {
        if self.probe_on_startup && !self.is_available().await {
            warn!("Directions service probe failed");
            return Err(ApplicationError::ProviderUnavailable(
                "startup probe failed".to_string(),
            ));
        }

        if self.readiness.mark_ready() {
            info!("Directions provider ready");
        }
        Ok(())
    }

    /// Map a client error to a query outcome
    fn outcome_for_error(error: &DirectionsError) -> ProviderOutcome {
        match error {
            DirectionsError::NoRoutesFound { .. } => ProviderOutcome::Empty,
            DirectionsError::ConnectionFailed(_)
            | DirectionsError::Timeout { .. }
            | DirectionsError::ServiceUnavailable(_) => ProviderOutcome::Unavailable {
                reason: error.to_string(),
            },
            _ => ProviderOutcome::Failed {
                reason: error.to_string(),
            },
        }
    }

    fn convert_route(route: Route) -> ProviderRoute {
        ProviderRoute {
            overview_polyline: route.overview_polyline.points,
            summary: Some(route.summary).filter(|s| !s.is_empty()),
            warnings: route.warnings,
            legs: route.legs.into_iter().map(Self::convert_leg).collect(),
        }
    }

    fn convert_leg(leg: Leg) -> ProviderLeg {
        ProviderLeg {
            duration: leg.duration.text,
            distance: leg.distance.text,
            // The API omits the duration rather than sending zero
            duration_seconds: Some(leg.duration.value).filter(|&secs| secs > 0),
            departure_time: leg.departure_time.as_ref().and_then(|t| t.timestamp()),
            arrival_time: leg.arrival_time.as_ref().and_then(|t| t.timestamp()),
            steps: leg.steps.into_iter().map(Self::convert_step).collect(),
        }
    }

    fn convert_step(step: Step) -> ProviderStep {
        ProviderStep {
            instructions: step.html_instructions,
            duration: step.duration.text,
            distance: step.distance.text,
            travel_mode: step.travel_mode,
            transit: step.transit_details.map(Self::convert_transit),
        }
    }

    fn convert_transit(details: TransitDetails) -> ProviderTransit {
        let line = details.line;
        ProviderTransit {
            line_name: line.name,
            line_short_name: line.short_name,
            vehicle_type: line.vehicle.and_then(|v| v.vehicle_type),
            agencies: line.agencies.into_iter().map(|a| a.name).collect(),
            departure_label: details.departure_time.as_ref().map(|t| t.text.clone()),
            arrival_label: details.arrival_time.as_ref().map(|t| t.text.clone()),
            departure_time: details.departure_time.as_ref().and_then(|t| t.timestamp()),
            arrival_time: details.arrival_time.as_ref().and_then(|t| t.timestamp()),
            num_stops: details.num_stops,
            color: line.color,
            text_color: line.text_color,
            headsign: details.headsign,
            departure_stop: details.departure_stop.map(|s| s.name),
            arrival_stop: details.arrival_stop.map(|s| s.name),
        }
    }
}

#[async_trait]
impl DirectionsPort for DirectionsAdapter {
    fn readiness(&self) -> ReadinessGate {
        self.readiness.clone()
    }

    #[instrument(skip(self))]
    async fn query(&self, origin: Coordinate, destination: Coordinate) -> ProviderOutcome {
        match self.client.directions(origin, destination).await {
            Ok(response) => {
                debug!(routes = response.routes.len(), "Directions received");
                ProviderOutcome::from_routes(
                    response.routes.into_iter().map(Self::convert_route).collect(),
                )
            },
            Err(e) => {
                debug!(error = %e, retryable = e.is_retryable(), "Directions query failed");
                Self::outcome_for_error(&e)
            },
        }
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
