// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod input_source;
mod result_sink;

pub use input_source::{InputSource, SourceError, TokenStream};
pub use result_sink::{render_result, ConsoleSink, LoggingSink, NoOpSink, ResultSink};
