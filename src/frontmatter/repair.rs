//! Duplicate-key repair.

use super::scan::{scan, split_document};

/// Rewrite the header keeping only the first occurrence of every top-level key.
///
/// Each dropped occurrence takes all of its continuation lines with it. Blank
/// and comment lines stay. The opening delimiter line, closing delimiter line
/// and body are copied verbatim. Text without a recognizable header, or without
/// duplicates, is returned unchanged.
pub fn repair(text: &str) -> String {
    let Ok(split) = split_document(text) else {
        return text.to_string();
    };
    let scanned = scan(split.header);
    if !scanned.has_duplicates() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    out.push_str(split.opening);
    for line in &scanned.lines {
        if !scanned.is_dropped(line) {
            out.push_str(line.raw);
        }
    }
    out.push_str(split.tail);
    out
}

/// Top-level keys that occur more than once, in the order their first repeat
/// appears. Empty when the document has no recognizable header.
pub fn find_duplicate_keys(text: &str) -> Vec<String> {
    split_document(text)
        .map(|split| scan(split.header).duplicate_keys())
        .unwrap_or_default()
}
