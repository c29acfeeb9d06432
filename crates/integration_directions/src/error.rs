//! Directions error types

use thiserror::Error;

/// Errors that can occur during directions queries
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Connection to the directions service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the directions service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the directions service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit or query quota exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// No routes found between origin and destination
    #[error("No routes found from {from} to {to}")]
    NoRoutesFound {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// API key missing, invalid or not enabled for directions
    #[error("Request denied: {0}")]
    RequestDenied(String),

    /// Request parameters were rejected
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl DirectionsError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }

    /// Map a non-`OK` API status to an error
    #[must_use]
    pub fn from_status(status: &str, message: Option<&str>, from: &str, to: &str) -> Self {
        let detail = message.map_or_else(|| status.to_string(), |m| format!("{status}: {m}"));
        match status {
            "ZERO_RESULTS" | "NOT_FOUND" => Self::NoRoutesFound {
                from: from.to_string(),
                to: to.to_string(),
            },
            "OVER_QUERY_LIMIT" => Self::RateLimitExceeded {
                retry_after_secs: None,
            },
            "REQUEST_DENIED" => Self::RequestDenied(detail),
            "INVALID_REQUEST" | "MAX_ROUTE_LENGTH_EXCEEDED" => Self::InvalidRequest(detail),
            _ => Self::ServiceUnavailable(detail),
        }
    }
}
