//! Infrastructure layer - Adapters for external systems
//!
//! Implements the directions port on top of `integration_directions`,
//! loads configuration, sets up logging, and wires the route engine.

pub mod adapters;
pub mod config;
pub mod engine;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ResolverSettings};
pub use engine::RouteEngine;
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
