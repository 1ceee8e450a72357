// ============================================================================
// Domain Models Module
// Contains all core value objects and configuration
// ============================================================================

pub mod config;
pub mod number_type;
pub mod result;

pub use config::{AggregatorConfig, ConfigError};
pub use number_type::NumberType;
pub use result::{OperationResult, OperationStatus};
