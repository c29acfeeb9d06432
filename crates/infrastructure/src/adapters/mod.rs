//! Adapters implementing application ports

mod directions_adapter;

pub use directions_adapter::DirectionsAdapter;
