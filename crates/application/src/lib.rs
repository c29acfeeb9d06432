//! Application layer - Use cases and orchestration
//!
//! Contains the route resolution use case, its normalization services, and
//! the port through which directions providers are reached.

pub mod error;
pub mod ports;
pub mod readiness;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use readiness::ReadinessGate;
pub use services::*;
