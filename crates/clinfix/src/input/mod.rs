//! Input parsing, the in-memory dataset, and cleaned-dataset export.

mod export;
mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{Dataset, SourceMetadata};
