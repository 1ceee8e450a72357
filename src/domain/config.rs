// ============================================================================
// Aggregator Configuration
// Rounding precision, timeout and validation cache sizing
// ============================================================================

use std::time::Duration;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale `rust_decimal` can represent
pub const MAX_PRECISION: u32 = 28;

/// Default number of fractional digits (currency-style rounding)
pub const DEFAULT_PRECISION: u32 = 2;

/// Default wall-clock budget for one aggregation call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of entries the validation cache holds before it is cleared
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Errors reported by [`AggregatorConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("precision {0} exceeds the maximum of 28 fractional digits")]
    PrecisionTooLarge(u32),

    #[error("timeout must be positive")]
    ZeroTimeout,

    #[error("cache capacity must be positive")]
    ZeroCacheCapacity,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for an aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregatorConfig {
    /// Number of fractional digits the final sum is rounded to
    pub precision: u32,

    /// Maximum wall-clock time allowed for one aggregation call.
    /// Checked once per token, so a single slow read can overrun it.
    pub timeout: Duration,

    /// Maximum entries kept by the validation cache before a full clear
    pub cache_capacity: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            timeout: DEFAULT_TIMEOUT,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl AggregatorConfig {
    /// Create a configuration with the given precision and timeout
    pub fn new(precision: u32, timeout: Duration) -> Self {
        Self {
            precision,
            timeout,
            ..Self::default()
        }
    }

    /// Builder method: Set rounding precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method: Set timeout in (fractional) seconds.
    /// Negative or non-finite values become a zero timeout, rejected by `validate`.
    pub fn with_timeout_secs(self, secs: f64) -> Self {
        self.with_timeout(Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO))
    }

    /// Builder method: Set validation cache capacity
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge(self.precision));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        if self.cache_capacity == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl AggregatorConfig {
    /// Two fractional digits, default timeout
    pub fn currency() -> Self {
        Self::default()
    }

    /// Sums rounded to whole units
    pub fn whole_units() -> Self {
        Self::default().with_precision(0)
    }
}
