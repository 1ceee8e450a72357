// ============================================================================
// Operation Result
// Immutable outcome record of one aggregation call
// ============================================================================

use super::NumberType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Final status of an aggregation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OperationStatus {
    /// Every token was valid and at least one was summed
    Success,
    /// Nothing was summed: invalid source, all tokens invalid, timeout or
    /// an unexpected streaming error
    Failure,
    /// Some tokens were summed and some were rejected
    Partial,
}

impl OperationStatus {
    /// Status for a stream that ran to completion.
    pub fn from_counts(processed: usize, failed: usize) -> Self {
        if failed == 0 {
            OperationStatus::Success
        } else if processed == 0 {
            OperationStatus::Failure
        } else {
            OperationStatus::Partial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Success => "success",
            OperationStatus::Failure => "failure",
            OperationStatus::Partial => "partial",
        }
    }

    /// Whether this status carries a result value
    pub fn has_result(&self) -> bool {
        !matches!(self, OperationStatus::Failure)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Outcome of a single aggregation call.
///
/// Built exactly once by the aggregator and never mutated afterwards, so
/// fields are only reachable through accessors. `result()` is `Some`
/// exactly when the status is `Success` or `Partial`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationResult {
    status: OperationStatus,
    result: Option<Decimal>,
    error_message: String,
    processed_count: usize,
    failed_count: usize,
    execution_time: Duration,
    number_types: BTreeMap<NumberType, usize>,
    source: String,
    completed_at: DateTime<Utc>,
}

impl OperationResult {
    /// Result of a stream that was consumed to the end.
    ///
    /// The status is derived from the counts; a `Failure` drops `total`.
    pub(crate) fn completed(
        total: Decimal,
        processed_count: usize,
        failed_count: usize,
        error_message: String,
        execution_time: Duration,
        number_types: BTreeMap<NumberType, usize>,
        source: impl Into<String>,
    ) -> Self {
        let status = OperationStatus::from_counts(processed_count, failed_count);
        Self {
            status,
            result: status.has_result().then_some(total),
            error_message,
            processed_count,
            failed_count,
            execution_time,
            number_types,
            source: source.into(),
            completed_at: Utc::now(),
        }
    }

    /// Result of a call that was rejected or aborted before completion.
    pub(crate) fn failure(
        error_message: impl Into<String>,
        execution_time: Duration,
        source: impl Into<String>,
    ) -> Self {
        Self {
            status: OperationStatus::Failure,
            result: None,
            error_message: error_message.into(),
            processed_count: 0,
            failed_count: 0,
            execution_time,
            number_types: BTreeMap::new(),
            source: source.into(),
            completed_at: Utc::now(),
        }
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    /// Rounded sum, absent on `Failure`
    pub fn result(&self) -> Option<Decimal> {
        self.result
    }

    /// Up to five individual error strings joined with `"; "`
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    pub fn failed_count(&self) -> usize {
        self.failed_count
    }

    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    /// Per-type tally of valid tokens. Empty for aborted calls.
    pub fn number_types(&self) -> &BTreeMap<NumberType, usize> {
        &self.number_types
    }

    /// Occurrences of a single number type, zero when not tallied
    pub fn type_count(&self, number_type: NumberType) -> usize {
        self.number_types.get(&number_type).copied().unwrap_or(0)
    }

    /// Name of the source variant that produced the tokens
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Serialize for API integration
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(integers: usize) -> BTreeMap<NumberType, usize> {
        NumberType::ALL
            .iter()
            .map(|t| (*t, if *t == NumberType::Integer { integers } else { 0 }))
            .collect()
    }

    #[test]
    fn test_status_from_counts() {
        assert_eq!(OperationStatus::from_counts(3, 0), OperationStatus::Success);
        assert_eq!(OperationStatus::from_counts(2, 1), OperationStatus::Partial);
        assert_eq!(OperationStatus::from_counts(0, 4), OperationStatus::Failure);
    }

    #[test]
    fn test_completed_failure_drops_total() {
        let result = OperationResult::completed(
            Decimal::ZERO,
            0,
            2,
            "Index 0: Invalid number: x".to_string(),
            Duration::from_millis(1),
            tally(0),
            "ListSource",
        );

        assert_eq!(result.status(), OperationStatus::Failure);
        assert!(result.result().is_none());
        assert_eq!(result.failed_count(), 2);
    }

    #[test]
    fn test_completed_partial_keeps_total() {
        let result = OperationResult::completed(
            Decimal::new(300, 2),
            1,
            1,
            String::new(),
            Duration::ZERO,
            tally(1),
            "ListSource",
        );

        assert_eq!(result.status(), OperationStatus::Partial);
        assert_eq!(result.result(), Some(Decimal::new(300, 2)));
        assert_eq!(result.type_count(NumberType::Integer), 1);
        assert_eq!(result.type_count(NumberType::Float), 0);
    }

    #[test]
    fn test_failure_constructor() {
        let result = OperationResult::failure("List is empty", Duration::ZERO, "ListSource");
        assert_eq!(result.status(), OperationStatus::Failure);
        assert_eq!(result.error_message(), "List is empty");
        assert!(result.number_types().is_empty());
        assert_eq!(result.source(), "ListSource");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OperationStatus::Partial.to_string(), "partial");
        assert_eq!(OperationStatus::Failure.as_str().to_uppercase(), "FAILURE");
    }
}
