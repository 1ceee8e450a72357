// ============================================================================
// Result Sink Interface
// Defines the contract for presenting aggregation outcomes
// ============================================================================

use crate::domain::OperationResult;

/// Width of the rule framing a rendered result
const RULE_WIDTH: usize = 50;

/// Receives every result produced by an aggregator.
/// Implementations can print, log, forward to metrics, etc.
pub trait ResultSink {
    /// Handle one finished aggregation
    fn on_result(&self, result: &OperationResult);
}

/// No-op sink for testing and library use
pub struct NoOpSink;

impl ResultSink for NoOpSink {
    fn on_result(&self, _result: &OperationResult) {
        // Do nothing
    }
}

/// Logging sink
pub struct LoggingSink;

impl ResultSink for LoggingSink {
    fn on_result(&self, result: &OperationResult) {
        tracing::debug!("Aggregation result: {:?}", result);
    }
}

/// Prints the rendered block to stdout
pub struct ConsoleSink;

impl ResultSink for ConsoleSink {
    fn on_result(&self, result: &OperationResult) {
        print!("{}", render_result(result));
    }
}

/// Render a result as a framed, human-readable block.
///
/// Shows the sum when present, otherwise the uppercased status, followed
/// by the error summary when there is one.
pub fn render_result(result: &OperationResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let headline = match result.result() {
        Some(sum) => format!("Sum: {}", sum),
        None => format!("Status: {}", result.status().as_str().to_uppercase()),
    };

    let mut out = format!("\n{}\n{}\n", rule, headline);
    if !result.error_message().is_empty() {
        out.push_str(&format!("Errors: {}\n", result.error_message()));
    }
    out.push_str(&format!("{}\n\n", rule));

    out
}
