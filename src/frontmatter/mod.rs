//! Frontmatter document model
//!
//! Parses YAML frontmatter (between `---` delimiter lines) into an ordered,
//! tagged [`Value`] model, repairs headers corrupted by repeated top-level
//! keys, and serializes headers back to text that parses to the same values.
//!
//! - [`parse`]: strict parse, rejects duplicate keys
//! - [`repair`]: keep the first occurrence of every top-level key
//! - [`parse_or_repair`]: strict parse with a single repair fallback
//! - [`serialize`]: deterministic header + body rendering

mod document;
mod parser;
mod repair;
mod scan;
mod serializer;
mod value;

pub use document::Document;
pub use parser::{Recovered, parse, parse_or_repair};
pub use repair::{find_duplicate_keys, repair};
pub use serializer::serialize;
pub use value::{Mapping, Number, Value, is_iso_date};

/// Body of a document, or the whole text when it has no recognizable header.
pub fn body_of(text: &str) -> &str {
    scan::split_document(text).map_or(text, |split| split.body)
}
