//! Strict and repairing frontmatter parsers.

use tracing::{debug, warn};

use super::document::Document;
use super::repair::repair;
use super::scan::{scan, split_document};
use super::value::{Mapping, Value};
use crate::error::{FrontmatterError, Result, duplicate_key, invalid_header};

/// Parse a document strictly.
///
/// Fails with `MalformedDocument` when the header delimiters are missing,
/// `DuplicateKey` when a top-level key repeats, and `InvalidHeader` when the
/// header is not a YAML mapping.
pub fn parse(text: &str) -> Result<Document> {
    let split = split_document(text)?;

    let scanned = scan(split.header);
    if let Some(key) = scanned.duplicate_keys().into_iter().next() {
        return Err(duplicate_key(key));
    }

    let header = decode_header(split.header)?;
    Ok(Document::new(header, split.body))
}

fn decode_header(header: &str) -> Result<Mapping> {
    if header.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let yaml: serde_yaml::Value = serde_yaml::from_str(header)?;
    match Value::from_yaml(yaml) {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(invalid_header("frontmatter must be a mapping of keys to values")),
    }
}

/// Result of [`parse_or_repair`].
#[derive(Debug, Clone)]
pub struct Recovered {
    pub document: Document,
    /// Keys whose repeated occurrences were dropped.
    pub dropped_keys: Vec<String>,
    /// Repaired document text, when a repair was needed.
    pub repaired_text: Option<String>,
}

impl Recovered {
    pub fn was_repaired(&self) -> bool {
        self.repaired_text.is_some()
    }
}

/// Parse, falling back to one duplicate-key repair pass.
///
/// If the repaired text still does not parse, the error from the first
/// attempt is returned.
pub fn parse_or_repair(text: &str) -> Result<Recovered> {
    match parse(text) {
        Ok(document) => Ok(Recovered {
            document,
            dropped_keys: Vec::new(),
            repaired_text: None,
        }),
        Err(original @ FrontmatterError::DuplicateKey { .. }) => {
            let repaired = repair(text);
            match parse(&repaired) {
                Ok(document) => {
                    let dropped_keys = super::find_duplicate_keys(text);
                    warn!(keys = ?dropped_keys, "repaired duplicate frontmatter keys");
                    Ok(Recovered {
                        document,
                        dropped_keys,
                        repaired_text: Some(repaired),
                    })
                }
                Err(second) => {
                    debug!(error = %second, "repaired frontmatter still does not parse");
                    Err(original)
                }
            }
        }
        Err(err) => Err(err),
    }
}
