//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Provider did not become ready in time
    #[error("Directions provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider answered with a non-success status
    #[error("Directions query failed: {0}")]
    ProviderQueryFailed(String),

    /// Provider succeeded but found no routes
    #[error("Directions provider returned no routes")]
    EmptyResult,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}
