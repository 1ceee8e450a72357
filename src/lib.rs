// ============================================================================
// Addition Service Library
// Validated, decimal-safe summation over pluggable input sources
// ============================================================================

//! # Addition Service
//!
//! Reads numeric tokens from a source, validates each one, and sums the
//! valid ones exactly, reporting partial success when some inputs fail.
//!
//! ## Features
//!
//! - **Exact base-10 arithmetic** via `rust_decimal`, rounded half-up to a
//!   configurable precision
//! - **Pluggable sources** (in-memory list, CSV/TXT column) behind the
//!   [`InputSource`](interfaces::InputSource) trait
//! - **Memoizing validator** with literal type detection (integer, float,
//!   decimal) and a bounded cache
//! - **Three-way outcome**: success, partial, failure, never a panic or
//!   an error return
//! - **Timeout-bounded streaming**, polled once per token
//!
//! Everything is single-threaded: an [`Aggregator`](engine::Aggregator)
//! owns its validator cache and is driven through `&mut self`.
//!
//! ## Example
//!
//! ```rust
//! use addition_service::prelude::*;
//!
//! let mut aggregator = Aggregator::default();
//!
//! let result = aggregator.add_numbers(vec!["1.005", "1.005"]);
//! assert_eq!(result.status(), OperationStatus::Success);
//! assert_eq!(result.result().unwrap().to_string(), "2.01");
//!
//! let partial = aggregator.add_numbers(vec!["10", "ten", "2.5e1"]);
//! assert_eq!(partial.status(), OperationStatus::Partial);
//! assert_eq!(partial.result().unwrap().to_string(), "35.00");
//! assert_eq!(partial.error_message(), "Index 1: Invalid number: ten");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod sources;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AggregatorConfig, ConfigError, NumberType, OperationResult, OperationStatus,
    };
    pub use crate::engine::{
        create_from_config, AggregationError, Aggregator, AggregatorBuilder,
    };
    pub use crate::interfaces::{
        render_result, ConsoleSink, InputSource, LoggingSink, NoOpSink, ResultSink, SourceError,
        TokenStream,
    };
    pub use crate::numeric::{NumberValidator, Validation};
    pub use crate::sources::{FileSource, ListSource, ListValue};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::io::Write;

    #[test]
    fn test_end_to_end_file_and_list() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "a,b\n1,10\n2,20").unwrap();
        file.flush().unwrap();

        let mut aggregator = AggregatorBuilder::new().precision(0).build().unwrap();

        let from_file = aggregator.add_from_csv(file.path(), 1, true);
        assert_eq!(from_file.status(), OperationStatus::Success);
        assert_eq!(from_file.result().unwrap().to_string(), "30");
        assert_eq!(from_file.source(), "FileSource");

        let from_list = aggregator.add_numbers(vec!["10", "20"]);
        assert_eq!(from_list.result(), from_file.result());
        assert_eq!(aggregator.operations_count(), 2);

        let rendered = render_result(&from_list);
        assert!(rendered.contains("Sum: 30"));
    }
}
