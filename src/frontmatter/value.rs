//! Tagged value model for frontmatter headers.
//!
//! Strings are classified on construction: ISO dates become [`Value::Date`],
//! strings with line breaks become [`Value::Multiline`]. Everything that
//! builds values (the YAML decoder, the JSON bridge used by the admin API and
//! callers using `From<&str>`) goes through [`Value::text`], so a value read
//! back from disk compares equal to the value that was written.

use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

pub use serde_yaml::Number;

#[allow(clippy::expect_used)]
static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(?:T\d{2}:\d{2}:\d{2}(?:\.\d{1,9})?Z)?$")
        .expect("ISO date pattern is valid")
});

/// Returns true if `s` is an ISO-8601 date (`2024-03-01`) or UTC datetime
/// (`2024-03-01T10:00:00.000Z`).
pub fn is_iso_date(s: &str) -> bool {
    ISO_DATE.is_match(s)
}

/// A single header value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Date(String),
    Multiline(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Build a string value, classifying dates and multi-line text.
    pub fn text(s: impl Into<String>) -> Value {
        let s = s.into();
        if s.contains('\n') {
            Value::Multiline(s)
        } else if is_iso_date(&s) {
            Value::Date(s)
        } else {
            Value::String(s)
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text of any string-like variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Date(s) | Value::Multiline(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Render a scalar as display text. Returns `None` for null and
    /// structured values.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) | Value::Date(s) | Value::Multiline(s) => Some(s.clone()),
            Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
        }
    }

    /// Null, or a string with no content.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) | Value::Date(s) | Value::Multiline(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Convert a decoded YAML value. Tags are dropped; non-string mapping
    /// keys are rendered as their scalar text.
    pub fn from_yaml(value: serde_yaml::Value) -> Value {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => Value::Number(n),
            serde_yaml::Value::String(s) => Value::text(s),
            serde_yaml::Value::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::from_yaml).collect())
            }
            serde_yaml::Value::Mapping(m) => Value::Mapping(Mapping::from_yaml(m)),
            serde_yaml::Value::Tagged(tagged) => Value::from_yaml(tagged.value),
        }
    }

    /// Convert a JSON value, keeping object key order.
    pub fn from_json(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => json_number(&n),
            serde_json::Value::String(s) => Value::text(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

fn json_number(n: &serde_json::Number) -> Value {
    if let Some(u) = n.as_u64() {
        Value::Number(Number::from(u))
    } else if let Some(i) = n.as_i64() {
        Value::Number(Number::from(i))
    } else {
        n.as_f64()
            .map_or(Value::Null, |f| Value::Number(Number::from(f)))
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) | Value::Date(s) | Value::Multiline(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(m) => m.serialize(serializer),
        }
    }
}

/// Insertion-ordered mapping from key to [`Value`].
///
/// Re-inserting an existing key replaces its value in place, so edits never
/// reorder a header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<(String, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Mapping {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace. Returns the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        self.entries.push((key, value));
        None
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Get a scalar value as text (strings, numbers, booleans).
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::scalar_text)
    }

    fn from_yaml(mapping: serde_yaml::Mapping) -> Mapping {
        mapping
            .into_iter()
            .map(|(k, v)| (yaml_key(k), Value::from_yaml(v)))
            .collect()
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_classification() {
        assert!(matches!(Value::text("2024-03-01"), Value::Date(_)));
        assert!(matches!(
            Value::text("2024-03-01T10:00:00.000Z"),
            Value::Date(_)
        ));
        assert!(matches!(Value::text("2024-03-01T10:00:00Z"), Value::Date(_)));
        assert!(matches!(Value::text("line one\nline two"), Value::Multiline(_)));
        assert!(matches!(Value::text("Chocolate cake"), Value::String(_)));
        assert!(matches!(Value::text("2024-3-1"), Value::String(_)));
        assert!(matches!(
            Value::text("published 2024-03-01"),
            Value::String(_)
        ));
    }

    #[test]
    fn test_mapping_insert_keeps_position() {
        let mut m = Mapping::new();
        m.insert("title", "A");
        m.insert("slug", "a");
        m.insert("category", "cakes");
        let previous = m.insert("slug", "b");

        assert_eq!(previous, Some(Value::text("a")));
        let keys: Vec<&String> = m.keys().collect();
        assert_eq!(keys, ["title", "slug", "category"]);
        assert_eq!(m.get_str("slug").as_deref(), Some("b"));
    }

    #[test]
    fn test_mapping_remove() {
        let mut m = Mapping::new();
        m.insert("a", 1i64);
        m.insert("b", 2i64);
        assert_eq!(m.remove("a"), Some(Value::from(1i64)));
        assert_eq!(m.remove("a"), None);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_from_yaml_keeps_order_and_classifies() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(
            "zeta: 1\nalpha: 2024-01-02\nnested:\n  b: true\n  a: text\n",
        )
        .unwrap();
        let value = Value::from_yaml(yaml);
        let m = value.as_mapping().unwrap();
        let keys: Vec<&String> = m.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "nested"]);
        assert_eq!(m.get("alpha"), Some(&Value::Date("2024-01-02".to_string())));
        let nested = m.get("nested").and_then(Value::as_mapping).unwrap();
        assert_eq!(nested.keys().collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"title":"T","count":3,"ratio":0.5,"tags":["a"],"draft":null}"#)
                .unwrap();
        let value = Value::from_json(json);
        let m = value.as_mapping().unwrap();
        let keys: Vec<&String> = m.keys().collect();
        assert_eq!(keys, ["title", "count", "ratio", "tags", "draft"]);
        assert_eq!(m.get("count"), Some(&Value::from(3u64)));
        assert_eq!(m.get("ratio"), Some(&Value::from(0.5)));
        assert!(m.get("draft").unwrap().is_null());
    }

    #[test]
    fn test_serialize_to_json() {
        let mut m = Mapping::new();
        m.insert("title", "T");
        m.insert("publishedAt", "2024-03-01");
        m.insert("tags", vec![Value::from("a"), Value::from("b")]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"{"title":"T","publishedAt":"2024-03-01","tags":["a","b"]}"#
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(Value::Null.is_blank());
        assert!(Value::text("  ").is_blank());
        assert!(!Value::text("x").is_blank());
        assert!(!Value::Sequence(vec![]).is_blank());
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(Value::from(42i64).scalar_text().as_deref(), Some("42"));
        assert_eq!(Value::from(true).scalar_text().as_deref(), Some("true"));
        assert_eq!(Value::Sequence(vec![]).scalar_text(), None);
    }
}
