pub mod extract;

// Re-exports
pub use extract::types::{Cell, ExtractedStatement, Statements};
pub use extract::{extract_statements, extract_table, source_label};
