//! Domain-level errors

use thiserror::Error;

use crate::polyline::PolylineError;
use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the WGS84 range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Malformed encoded geometry
    #[error("Malformed geometry: {0}")]
    Polyline(#[from] PolylineError),
}
