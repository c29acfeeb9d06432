//! Domain entities

mod route;

pub use route::{RouteResult, RouteSource, RouteStep, TransitDetails, TravelMode};
