// ============================================================================
// Aggregator
// Core business logic: validate, stream, sum and classify outcomes
// ============================================================================

use crate::domain::{AggregatorConfig, NumberType, OperationResult};
use crate::interfaces::{InputSource, NoOpSink, ResultSink, SourceError};
use crate::numeric::{NumberValidator, NumericError, Validation};
use crate::sources::{FileSource, ListSource, ListValue};
use arrayvec::ArrayVec;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Number of individual token errors kept in a result's summary
pub const MAX_REPORTED_ERRORS: usize = 5;

/// Reasons a stream is abandoned mid-way. Every variant discards the
/// partial total and turns into a `Failure` result.
#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("Operation timeout after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl AggregationError {
    /// Message stored in the failed result.
    ///
    /// Timeouts read as-is; anything else is prefixed with its kind.
    pub fn report(&self) -> String {
        match self {
            AggregationError::Timeout(_) => self.to_string(),
            AggregationError::Source(err) => format!("{}: {}", err.kind(), err),
            AggregationError::Numeric(err) => format!("{}: {}", err.kind(), err),
        }
    }
}

/// Running state of one pass over a source
struct Tally {
    total: Decimal,
    processed: usize,
    failed: usize,
    errors: ArrayVec<String, MAX_REPORTED_ERRORS>,
    number_types: BTreeMap<NumberType, usize>,
}

impl Tally {
    fn new() -> Self {
        Self {
            total: Decimal::ZERO,
            processed: 0,
            failed: 0,
            errors: ArrayVec::new(),
            number_types: NumberType::ALL.iter().map(|t| (*t, 0)).collect(),
        }
    }

    fn record_valid(&mut self, value: Decimal, number_type: NumberType) -> Result<(), NumericError> {
        self.total = self
            .total
            .checked_add(value)
            .ok_or(NumericError::Overflow)?;
        self.processed += 1;
        *self.number_types.entry(number_type).or_insert(0) += 1;
        Ok(())
    }

    fn record_invalid(&mut self, index: usize, message: &str) {
        self.failed += 1;
        // Only the first few make it into the summary
        let _ = self.errors.try_push(format!("Index {}: {}", index, message));
    }
}

/// Round half away from zero and pad to exactly `precision` fractional digits
pub fn round_half_up(value: Decimal, precision: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    rounded
}

/// Sums validated tokens from any [`InputSource`].
///
/// Owns its validator (and therefore its cache) and a lifetime operation
/// counter. Single-threaded: `aggregate` takes `&mut self`.
pub struct Aggregator {
    config: AggregatorConfig,

    /// Validator whose cache persists across calls
    validator: NumberValidator,

    /// Presentation hook invoked with every result
    sink: Box<dyn ResultSink>,

    /// Completed (non-aborted) aggregations
    operations_count: u64,
}

impl Aggregator {
    /// Create an aggregator.
    ///
    /// The configuration is not validated here; use the builder or
    /// `create_from_config` for that.
    pub fn new(config: AggregatorConfig, sink: Box<dyn ResultSink>) -> Self {
        Self {
            validator: NumberValidator::new(config.cache_capacity),
            config,
            sink,
            operations_count: 0,
        }
    }

    /// Aggregate every token of `source` into a rounded sum.
    ///
    /// Never fails: source rejection, timeouts and stream errors all come
    /// back as a `Failure` result.
    pub fn aggregate(&mut self, source: &dyn InputSource) -> OperationResult {
        let start = Instant::now();

        if let Err(message) = source.validate_source() {
            tracing::error!("Source validation failed: {}", message);
            let result = OperationResult::failure(message, start.elapsed(), source.name());
            self.sink.on_result(&result);
            return result;
        }

        let result = match self.stream(source, start) {
            Ok(tally) => self.finish(tally, start, source.name()),
            Err(err) => {
                match &err {
                    AggregationError::Timeout(_) => tracing::error!("Timeout: {}", err),
                    _ => tracing::error!("Error: {}", err.report()),
                }
                OperationResult::failure(err.report(), start.elapsed(), source.name())
            }
        };

        self.sink.on_result(&result);
        result
    }

    /// Sum a list of values
    pub fn add_numbers<I, V>(&mut self, values: I) -> OperationResult
    where
        I: IntoIterator<Item = V>,
        V: Into<ListValue>,
    {
        self.aggregate(&ListSource::new(values))
    }

    /// Sum one column of a CSV/TXT file
    pub fn add_from_csv(
        &mut self,
        path: impl Into<PathBuf>,
        column_index: usize,
        skip_header: bool,
    ) -> OperationResult {
        self.aggregate(&FileSource::new(path, column_index, skip_header))
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn validator(&self) -> &NumberValidator {
        &self.validator
    }

    /// Number of aggregations that ran to completion
    pub fn operations_count(&self) -> u64 {
        self.operations_count
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn stream(&mut self, source: &dyn InputSource, start: Instant) -> Result<Tally, AggregationError> {
        let mut tally = Tally::new();

        for (index, token) in source.read()?.enumerate() {
            // Polled between tokens, not preemptive
            if start.elapsed() > self.config.timeout {
                return Err(AggregationError::Timeout(self.config.timeout));
            }

            let token = token?;
            match self.validator.validate(&token) {
                Validation::Valid { value, number_type } => tally.record_valid(value, number_type)?,
                Validation::Invalid { message, .. } => tally.record_invalid(index, &message),
            }
        }

        Ok(tally)
    }

    fn finish(&mut self, tally: Tally, start: Instant, source_name: &str) -> OperationResult {
        let total = round_half_up(tally.total, self.config.precision);
        let error_message = tally.errors.join("; ");

        let result = OperationResult::completed(
            total,
            tally.processed,
            tally.failed,
            error_message,
            start.elapsed(),
            tally.number_types,
            source_name,
        );

        self.operations_count += 1;
        tracing::info!(
            "Operation {}: Source={}, Status={}, Processed={}, Failed={}, Time={:.4}s",
            self.operations_count,
            source_name,
            result.status(),
            result.processed_count(),
            result.failed_count(),
            result.execution_time().as_secs_f64()
        );

        result
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(AggregatorConfig::default(), Box::new(NoOpSink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OperationStatus;
    use crate::interfaces::TokenStream;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::thread;

    /// Yields its tokens, sleeping before each one after the first
    struct SlowSource {
        tokens: Vec<&'static str>,
        delay: Duration,
    }

    impl InputSource for SlowSource {
        fn name(&self) -> &str {
            "SlowSource"
        }

        fn validate_source(&self) -> Result<(), String> {
            Ok(())
        }

        fn read(&self) -> Result<TokenStream<'_>, SourceError> {
            let delay = self.delay;
            Ok(Box::new(self.tokens.iter().enumerate().map(move |(i, t)| {
                if i > 0 {
                    thread::sleep(delay);
                }
                Ok::<_, SourceError>(t.to_string())
            })))
        }
    }

    /// Yields one token, then a stream error
    struct BrokenSource;

    impl InputSource for BrokenSource {
        fn name(&self) -> &str {
            "BrokenSource"
        }

        fn validate_source(&self) -> Result<(), String> {
            Ok(())
        }

        fn read(&self) -> Result<TokenStream<'_>, SourceError> {
            Ok(Box::new(
                vec![
                    Ok("1".to_string()),
                    Err(SourceError::Other("connection reset".to_string())),
                ]
                .into_iter(),
            ))
        }
    }

    struct RecordingSink(Rc<RefCell<Vec<OperationStatus>>>);

    impl ResultSink for RecordingSink {
        fn on_result(&self, result: &OperationResult) {
            self.0.borrow_mut().push(result.status());
        }
    }

    #[test]
    fn test_success() {
        let mut aggregator = Aggregator::default();
        let result = aggregator.add_numbers(vec!["1", "2.5", "1e1"]);

        assert_eq!(result.status(), OperationStatus::Success);
        assert_eq!(result.result(), Some(Decimal::new(1350, 2)));
        assert_eq!(result.processed_count(), 3);
        assert_eq!(result.type_count(NumberType::Integer), 1);
        assert_eq!(result.type_count(NumberType::Decimal), 1);
        assert_eq!(result.type_count(NumberType::Float), 1);
        assert_eq!(result.error_message(), "");
        assert_eq!(result.source(), "ListSource");
        assert_eq!(aggregator.operations_count(), 1);
    }

    #[test]
    fn test_partial() {
        let mut aggregator = Aggregator::default();
        let result = aggregator.add_numbers(vec!["1", "abc", "2"]);

        assert_eq!(result.status(), OperationStatus::Partial);
        assert_eq!(result.result().unwrap().to_string(), "3.00");
        assert_eq!(result.failed_count(), 1);
        assert_eq!(result.error_message(), "Index 1: Invalid number: abc");
    }

    #[test]
    fn test_all_invalid_is_failure() {
        let mut aggregator = Aggregator::default();
        let result = aggregator.add_numbers(vec!["x", "nan"]);

        assert_eq!(result.status(), OperationStatus::Failure);
        assert!(result.result().is_none());
        assert_eq!(result.processed_count(), 0);
        assert_eq!(result.failed_count(), 2);
        // Still a completed run
        assert_eq!(aggregator.operations_count(), 1);
    }

    #[test]
    fn test_error_summary_capped() {
        let mut aggregator = Aggregator::default();
        let values: Vec<String> = (0..8).map(|i| format!("bad{}", i)).collect();
        let result = aggregator.add_numbers(values);

        assert_eq!(result.failed_count(), 8);
        assert_eq!(result.error_message().split("; ").count(), MAX_REPORTED_ERRORS);
        assert!(result.error_message().ends_with("Index 4: Invalid number: bad4"));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(Decimal::new(2010, 3), 2).to_string(), "2.01");
        assert_eq!(round_half_up(Decimal::new(2005, 3), 2).to_string(), "2.01");
        assert_eq!(round_half_up(Decimal::new(-2005, 3), 2).to_string(), "-2.01");
        assert_eq!(round_half_up(Decimal::from(3), 2).to_string(), "3.00");
        assert_eq!(round_half_up(Decimal::new(25, 1), 0).to_string(), "3");
    }

    #[test]
    fn test_empty_list_rejected() {
        let mut aggregator = Aggregator::default();
        let result = aggregator.add_numbers(Vec::<&str>::new());

        assert_eq!(result.status(), OperationStatus::Failure);
        assert_eq!(result.error_message(), "List is empty");
        assert_eq!(aggregator.operations_count(), 0);
    }

    #[test]
    fn test_timeout_aborts() {
        let config = AggregatorConfig::default().with_timeout(Duration::from_millis(20));
        let mut aggregator = Aggregator::new(config, Box::new(NoOpSink));
        let source = SlowSource {
            tokens: vec!["1", "2", "3"],
            delay: Duration::from_millis(60),
        };

        let result = aggregator.aggregate(&source);

        assert_eq!(result.status(), OperationStatus::Failure);
        assert!(result.result().is_none());
        assert!(result.error_message().contains("timeout"));
        assert_eq!(result.source(), "SlowSource");
        assert_eq!(aggregator.operations_count(), 0);
    }

    #[test]
    fn test_stream_error_aborts() {
        let mut aggregator = Aggregator::default();
        let result = aggregator.aggregate(&BrokenSource);

        assert_eq!(result.status(), OperationStatus::Failure);
        assert!(result.result().is_none());
        assert_eq!(result.error_message(), "SourceError: connection reset");
    }

    #[test]
    fn test_overflow_aborts() {
        let mut aggregator = Aggregator::default();
        let result = aggregator.add_numbers(vec![Decimal::MAX, Decimal::MAX]);

        assert_eq!(result.status(), OperationStatus::Failure);
        assert!(result.error_message().starts_with("Overflow: "));
    }

    #[test]
    fn test_sink_sees_every_result() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut aggregator = Aggregator::new(
            AggregatorConfig::default(),
            Box::new(RecordingSink(Rc::clone(&seen))),
        );

        aggregator.add_numbers(vec!["1"]);
        aggregator.add_numbers(Vec::<&str>::new());

        assert_eq!(
            *seen.borrow(),
            vec![OperationStatus::Success, OperationStatus::Failure]
        );
    }

    #[test]
    fn test_cache_shared_across_calls() {
        let mut aggregator = Aggregator::default();
        aggregator.add_numbers(vec!["7", "bad"]);
        aggregator.add_numbers(vec!["7", "bad"]);

        assert_eq!(aggregator.validator().cache().len(), 2);
        assert_eq!(aggregator.validator().cache().hits(), 2);
    }
}
