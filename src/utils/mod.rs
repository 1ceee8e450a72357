// ============================================================================
// Utilities Module
// Helpers for applications embedding the library
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, LogConfig, LogGuard, LoggingError, DEFAULT_LOG_FILE};
