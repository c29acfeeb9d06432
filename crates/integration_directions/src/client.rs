//! Google Directions API client
//!
//! Queries public transit routes from the
//! [Directions API](https://developers.google.com/maps/documentation/directions)
//! and maps API status codes to [`DirectionsError`].

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinate;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::models::DirectionsResponse;

/// Path of the JSON directions endpoint
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Trait for directions service clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Query transit routes between two points
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsResponse, DirectionsError>;

    /// Check if the directions service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Directions client backed by the Google Directions API
#[derive(Debug)]
pub struct GoogleDirectionsClient {
    client: Client,
    config: DirectionsConfig,
}

impl GoogleDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DirectionsConfig) -> Result<Self, DirectionsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("TransitRouter/1.0")
            .build()
            .map_err(|e| DirectionsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Client configuration
    #[must_use]
    pub const fn config(&self) -> &DirectionsConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{DIRECTIONS_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the query parameters for a transit request
    fn query_params(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        key: &str,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origin", origin.to_query_param()),
            ("destination", destination.to_query_param()),
            ("mode", "transit".to_string()),
            ("alternatives", self.config.alternatives.to_string()),
            ("language", self.config.language().to_string()),
            ("region", self.config.region.clone()),
        ];

        if !self.config.transit_modes.is_empty() {
            params.push(("transit_mode", self.config.transit_modes.join("|")));
        }

        if self.config.fewer_transfers {
            params.push(("transit_routing_preference", "fewer_transfers".to_string()));
        }

        params.push(("key", key.to_string()));
        params
    }

    /// Parse the response body and map the API status
    fn parse_response(
        body: &str,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let response: DirectionsResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        if response.is_ok() {
            return Ok(response);
        }

        Err(DirectionsError::from_status(
            &response.status,
            response.error_message.as_deref(),
            &origin.to_query_param(),
            &destination.to_query_param(),
        ))
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let key = self
            .config
            .api_key_str()
            .ok_or_else(|| DirectionsError::ConfigurationError("api_key is not set".to_string()))?;

        let url = self.endpoint();
        let params = self.query_params(origin, destination, key);

        debug!(?url, "Querying transit directions");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DirectionsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    DirectionsError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(DirectionsError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        let result = Self::parse_response(&body, origin, destination)?;

        if result.routes.is_empty() {
            warn!("Directions status OK without routes");
        }

        debug!(count = result.routes.len(), "Routes found");
        Ok(result)
    }

    async fn is_healthy(&self) -> bool {
        match self.client.get(self.endpoint()).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Directions health check failed");
                false
            },
        }
    }
}
