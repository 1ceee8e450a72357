// ============================================================================
// Input Source Interface
// Defines the contract for pluggable token sources
// ============================================================================

use thiserror::Error;

/// Errors raised while opening or streaming a source.
///
/// Any of these reaching the aggregator aborts the whole call.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

impl SourceError {
    /// Stable failure kind embedded in `"{kind}: {description}"` messages
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Io(_) => "IoError",
            SourceError::Csv(_) => "CsvError",
            SourceError::Other(_) => "SourceError",
        }
    }
}

/// Lazily produced raw tokens; an `Err` item aborts the aggregation
pub type TokenStream<'a> = Box<dyn Iterator<Item = Result<String, SourceError>> + 'a>;

/// Strategy pattern interface for token sources
/// Implementations: ListSource (in-memory values), FileSource (CSV/TXT column)
pub trait InputSource {
    /// Source variant name reported in results and logs
    fn name(&self) -> &str;

    /// Check that the source is usable before any token is read.
    ///
    /// # Returns
    /// `Err` with a human-readable reason when the source must be rejected
    fn validate_source(&self) -> Result<(), String>;

    /// Open the source and stream its raw tokens in order.
    ///
    /// Each call starts a fresh pass; callers should not assume more than
    /// one pass per aggregation.
    fn read(&self) -> Result<TokenStream<'_>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_and_display() {
        let err = SourceError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.kind(), "IoError");
        assert_eq!(err.to_string(), "missing");

        let other = SourceError::Other("stream closed".to_string());
        assert_eq!(format!("{}: {}", other.kind(), other), "SourceError: stream closed");
    }
}
