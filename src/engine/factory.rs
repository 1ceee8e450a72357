// ============================================================================
// Aggregator Factory
// Creates aggregators with validated configuration
// ============================================================================

use crate::domain::config::{AggregatorConfig, ConfigError};
use crate::engine::Aggregator;
use crate::interfaces::{NoOpSink, ResultSink};
use std::time::Duration;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an aggregator from configuration
///
/// # Arguments
/// * `config` - Aggregator configuration
/// * `sink` - Receiver for every produced result
///
/// # Returns
/// * `Result<Aggregator, ConfigError>` - Configured aggregator or error
///
/// # Example
/// ```
/// use addition_service::prelude::*;
///
/// let aggregator = create_from_config(AggregatorConfig::currency(), Box::new(NoOpSink)).unwrap();
/// assert_eq!(aggregator.config().precision, 2);
/// ```
pub fn create_from_config(
    config: AggregatorConfig,
    sink: Box<dyn ResultSink>,
) -> Result<Aggregator, ConfigError> {
    config.validate()?;
    Ok(Aggregator::new(config, sink))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating aggregators with a fluent API
///
/// # Example
/// ```
/// use addition_service::prelude::*;
///
/// let mut aggregator = AggregatorBuilder::new()
///     .precision(0)
///     .timeout_secs(5.0)
///     .build()
///     .unwrap();
///
/// let result = aggregator.add_numbers(vec!["1.4", "1.2"]);
/// assert_eq!(result.result().unwrap().to_string(), "3");
/// ```
pub struct AggregatorBuilder {
    config: AggregatorConfig,
    sink: Box<dyn ResultSink>,
}

impl AggregatorBuilder {
    /// Start from the default configuration and a no-op sink
    pub fn new() -> Self {
        Self {
            config: AggregatorConfig::default(),
            sink: Box::new(NoOpSink),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: AggregatorConfig) -> Self {
        Self {
            config,
            sink: Box::new(NoOpSink),
        }
    }

    /// Set rounding precision
    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set timeout in (fractional) seconds
    pub fn timeout_secs(mut self, secs: f64) -> Self {
        self.config = self.config.with_timeout_secs(secs);
        self
    }

    /// Set validation cache capacity
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Set the result sink
    pub fn sink(mut self, sink: Box<dyn ResultSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Build the aggregator
    pub fn build(self) -> Result<Aggregator, ConfigError> {
        create_from_config(self.config, self.sink)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &AggregatorConfig {
        &self.config
    }
}

impl Default for AggregatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
