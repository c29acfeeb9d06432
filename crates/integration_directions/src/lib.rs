//! Transit directions integration for the route engine
//!
//! Provides public transit routing via the
//! [Google Directions API](https://developers.google.com/maps/documentation/directions)
//! in `transit` mode.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`DirectionsClient`] defines the interface for route queries, implemented by
//! [`GoogleDirectionsClient`]. Non-`OK` API statuses surface as [`DirectionsError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Coordinate;
//! use integration_directions::{DirectionsClient, DirectionsConfig, GoogleDirectionsClient};
//!
//! let config = DirectionsConfig::for_testing();
//! let client = GoogleDirectionsClient::new(&config)?;
//!
//! let response = client.directions(
//!     Coordinate::new(48.2082, 16.3738)?, // Stephansplatz
//!     Coordinate::new(48.1845, 16.3122)?, // Schönbrunn
//! ).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DirectionsClient, GoogleDirectionsClient};
pub use config::DirectionsConfig;
pub use error::DirectionsError;
pub use models::{
    Agency, DirectionsResponse, EncodedPolyline, Leg, Line, Route, Step, Stop, TextValue,
    TimeValue, TransitDetails, Vehicle,
};
