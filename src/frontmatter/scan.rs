//! Document splitting and top-level key scanning.
//!
//! The scanner walks header lines with a single cursor: a column-0 `key:` line
//! opens a new entry and every following non-neutral line belongs to it until
//! the next key line. Blank lines and column-0 comments belong to no entry.
//! Ownership is never decided by what a continuation line looks like, which is
//! what lets repair tell apart two block values under the same key.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, malformed};

pub(crate) const DELIMITER: &str = "---";

#[allow(clippy::expect_used)]
static KEY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:"((?:[^"\\]|\\.)*)"|'((?:[^']|'')*)'|([A-Za-z_$][A-Za-z0-9_$.:/-]*?))[ \t]*:(?:[ \t]|$)"#,
    )
    .expect("key line pattern is valid")
});

/// A document cut at its header delimiters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Split<'a> {
    /// Opening delimiter line, including its line break.
    pub opening: &'a str,
    /// Raw header text between the delimiter lines.
    pub header: &'a str,
    /// Closing delimiter line and everything after it.
    pub tail: &'a str,
    /// Text after the closing `---`, starting with its line break.
    pub body: &'a str,
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Split a document into header and body.
///
/// The opening line must be exactly `---`. The first later line starting
/// with `---` closes the header, and the body is everything after those three
/// characters, so a body written directly after the delimiter reads back
/// unchanged.
pub(crate) fn split_document(text: &str) -> Result<Split<'_>> {
    let mut lines = text.split_inclusive('\n');
    let opening = lines
        .next()
        .filter(|line| is_delimiter(line) && line.ends_with('\n'))
        .ok_or_else(|| malformed("document does not start with a '---' line"))?;

    let header_start = opening.len();
    let mut offset = header_start;
    for line in lines {
        if line.starts_with(DELIMITER) {
            let body_start = offset + DELIMITER.len();
            return Ok(Split {
                opening,
                header: &text[header_start..offset],
                tail: &text[offset..],
                body: &text[body_start..],
            });
        }
        offset += line.len();
    }

    Err(malformed("header is not closed by a '---' line"))
}

/// Classification of one header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// Starts a top-level key.
    Key(String),
    /// Belongs to the key currently under the cursor.
    Continuation,
    /// Blank line or column-0 comment.
    Neutral,
}

pub(crate) fn classify(line: &str) -> LineKind {
    let content = line.trim_end_matches(['\n', '\r']);
    if content.trim().is_empty() || content.starts_with('#') {
        return LineKind::Neutral;
    }
    match KEY_LINE.captures(content) {
        Some(caps) => {
            let key = if let Some(m) = caps.get(1) {
                unescape_double(m.as_str())
            } else if let Some(m) = caps.get(2) {
                m.as_str().replace("''", "'")
            } else {
                caps.get(3).map_or_else(String::new, |m| m.as_str().to_string())
            };
            LineKind::Key(key)
        }
        None => LineKind::Continuation,
    }
}

/// Decode a double-quoted YAML key. Malformed escapes are kept as written.
fn unescape_double(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('a') => out.push('\u{7}'),
            Some('b') => out.push('\u{8}'),
            Some('e') => out.push('\u{1b}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('N') => out.push('\u{85}'),
            Some('_') => out.push('\u{a0}'),
            Some('L') => out.push('\u{2028}'),
            Some('P') => out.push('\u{2029}'),
            Some(marker @ ('x' | 'u' | 'U')) => {
                let width = match marker {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.clone().take(width).collect();
                let decoded = (digits.len() == width)
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => {
                        out.push(ch);
                        chars.nth(width - 1);
                    }
                    None => {
                        out.push('\\');
                        out.push(marker);
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// One occurrence of a top-level key.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub key: String,
    /// The key already appeared earlier in the header.
    pub duplicate: bool,
}

/// One raw header line and the entry that owns it.
#[derive(Debug, Clone)]
pub(crate) struct ScannedLine<'a> {
    pub raw: &'a str,
    pub owner: Option<usize>,
}

#[derive(Debug, Clone)]
pub(crate) struct Scan<'a> {
    pub lines: Vec<ScannedLine<'a>>,
    pub entries: Vec<Entry>,
}

impl Scan<'_> {
    /// Keys that occur more than once, in the order their first repeat appears.
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|e| e.duplicate && seen.insert(e.key.as_str()))
            .map(|e| e.key.clone())
            .collect()
    }

    pub fn has_duplicates(&self) -> bool {
        self.entries.iter().any(|e| e.duplicate)
    }

    /// Whether a line belongs to a repeated occurrence of its key.
    pub fn is_dropped(&self, line: &ScannedLine<'_>) -> bool {
        line.owner
            .and_then(|idx| self.entries.get(idx))
            .is_some_and(|e| e.duplicate)
    }
}

/// Scan header text into key occurrences.
pub(crate) fn scan(header: &str) -> Scan<'_> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();
    let mut lines = Vec::new();
    let mut cursor: Option<usize> = None;

    for raw in header.split_inclusive('\n') {
        let owner = match classify(raw) {
            LineKind::Key(key) => {
                let duplicate = !seen.insert(key.clone());
                entries.push(Entry { key, duplicate });
                cursor = Some(entries.len() - 1);
                cursor
            }
            LineKind::Continuation => cursor,
            LineKind::Neutral => None,
        };
        lines.push(ScannedLine { raw, owner });
    }

    Scan { lines, entries }
}
