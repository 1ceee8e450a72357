// ============================================================================
// Numeric Errors
// Reasons a literal is rejected or a running total cannot be updated
// ============================================================================

use thiserror::Error;

/// Errors that can occur while parsing literals or accumulating a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Input was empty after trimming
    #[error("empty input")]
    Empty,
    /// Input was one of the reserved non-finite tokens
    #[error("non-finite value")]
    NonFinite,
    /// Input string could not be parsed as a decimal number
    #[error("invalid input: could not parse value")]
    InvalidInput,
    /// Value or scale is outside what a 96-bit decimal can hold
    #[error("value out of range: too many significant digits")]
    OutOfRange,
    /// Running total exceeded the decimal range
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
}

impl NumericError {
    /// Stable name used when the error aborts an aggregation
    pub fn kind(&self) -> &'static str {
        match self {
            NumericError::Empty => "Empty",
            NumericError::NonFinite => "NonFinite",
            NumericError::InvalidInput => "InvalidInput",
            NumericError::OutOfRange => "OutOfRange",
            NumericError::Overflow => "Overflow",
        }
    }
}

impl From<rust_decimal::Error> for NumericError {
    fn from(err: rust_decimal::Error) -> Self {
        match err {
            rust_decimal::Error::ExceedsMaximumPossibleValue
            | rust_decimal::Error::LessThanMinimumPossibleValue
            | rust_decimal::Error::Underflow
            | rust_decimal::Error::ScaleExceedsMaximumPrecision(_) => NumericError::OutOfRange,
            _ => NumericError::InvalidInput,
        }
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
