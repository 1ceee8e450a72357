// ============================================================================
// Sources Module
// Concrete InputSource implementations
// ============================================================================

mod file_source;
mod list_source;

pub use file_source::{FileSource, SUPPORTED_EXTENSIONS};
pub use list_source::{ListSource, ListValue};
