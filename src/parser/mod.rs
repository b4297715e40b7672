// Option pipeline DSL parser
//
// Format: width(60) | height(12) | caption("cpu load")

pub mod lexer;
pub mod pipeline;

// Public API re-exports
pub use pipeline::{parse_option, parse_options, parse_pipeline};
