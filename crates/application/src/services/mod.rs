//! Application services - Use case implementations

mod candidate_builder;
mod directions_resolver;
mod fallback_route;
mod request_sequencer;
mod step_normalizer;

pub use candidate_builder::{CandidateBuilder, CandidateError};
pub use directions_resolver::{DirectionsResolver, ResolverConfig, RouteRequest};
pub use fallback_route::{FallbackRouteSynthesizer, FallbackTexts};
pub use request_sequencer::{RequestSequencer, RequestTicket};
pub use step_normalizer::StepNormalizer;
