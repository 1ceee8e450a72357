// ============================================================================
// Engine Module
// Contains the core aggregation business logic
// ============================================================================

mod aggregator;

pub mod factory;

pub use aggregator::{round_half_up, AggregationError, Aggregator, MAX_REPORTED_ERRORS};
pub use factory::{create_from_config, AggregatorBuilder};
