//! Domain layer for the transit route engine
//!
//! Contains the normalized route model, coordinate value objects, the
//! polyline codec, and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod polyline;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use polyline::PolylineError;
pub use value_objects::*;
