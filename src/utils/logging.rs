// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries and demos
// ============================================================================
//
// The library only emits `tracing` events. Applications that want them
// written somewhere call `init_logging` once at startup:
//
// ```ignore
// use addition_service::utils::{init_logging, LogConfig};
//
// let _guard = init_logging(&LogConfig::default())?;
// ```
//
// Keep the returned guard alive for the lifetime of the program, otherwise
// buffered file output is lost.
// ============================================================================

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default log file, written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "addition_service.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid log file path: {0}")]
    InvalidPath(PathBuf),

    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` overrides it
    pub level: String,

    /// File receiving a copy of every event, if any
    pub log_file: Option<PathBuf>,

    /// Also write events to stderr
    pub enable_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            enable_stderr: true,
        }
    }
}

/// Keeps the background file writer alive
pub struct LogGuard {
    _guard: Option<WorkerGuard>,
}

/// Install the global subscriber described by `config`
pub fn init_logging(config: &LogConfig) -> Result<LogGuard, LoggingError> {
    let default_level = parse_log_level(&config.level)?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let (file_layer, guard) = match &config.log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| LoggingError::InvalidPath(path.clone()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = config.enable_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::debug!(
        level = %config.level,
        file_output = config.log_file.is_some(),
        "logger initialized"
    );

    Ok(LogGuard { _guard: guard })
}

/// Parse log level string to Level
fn parse_log_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(LoggingError::InvalidLevel(level.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("debug"), Ok(Level::DEBUG)));
        assert!(matches!(parse_log_level("WARNING"), Ok(Level::WARN)));
        assert!(matches!(parse_log_level("ERROR"), Ok(Level::ERROR)));
        assert!(matches!(
            parse_log_level("loud"),
            Err(LoggingError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_init_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            level: "info".to_string(),
            log_file: Some(dir.path().join("test.log")),
            enable_stderr: false,
        };

        let guard = init_logging(&config).unwrap();
        tracing::info!("hello from test");
        drop(guard);

        let contents = std::fs::read_to_string(dir.path().join("test.log")).unwrap();
        assert!(contents.contains("hello from test"));
    }
}
