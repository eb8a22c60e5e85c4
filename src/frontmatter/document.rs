//! A content file decomposed into header and body.

use super::value::{Mapping, Value};
use crate::error::Result;

/// The atomic unit of content: a frontmatter header plus opaque body text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub header: Mapping,
    /// Everything after the closing `---`, verbatim, starting with the
    /// delimiter's line break when there is one.
    pub body: String,
}

impl Document {
    pub fn new(header: Mapping, body: impl Into<String>) -> Self {
        Document {
            header,
            body: body.into(),
        }
    }

    /// Parse a document strictly. See [`super::parse`].
    pub fn parse(text: &str) -> Result<Self> {
        super::parse(text)
    }

    /// Render the document back to text. See [`super::serialize`].
    pub fn to_text(&self) -> Result<String> {
        super::serialize(&self.header, &self.body)
    }

    /// Body without the blank lines that separate it from the header.
    pub fn content(&self) -> &str {
        self.body.trim_start_matches(['\r', '\n'])
    }

    pub fn title(&self) -> Option<String> {
        self.header.get_str("title")
    }

    /// Text of the first level-one Markdown heading in the body.
    pub fn heading(&self) -> Option<&str> {
        self.body
            .lines()
            .filter_map(|line| line.trim_start().strip_prefix("# "))
            .map(str::trim)
            .find(|heading| !heading.is_empty())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.header.insert(key, value)
    }
}
