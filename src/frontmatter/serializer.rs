//! Deterministic frontmatter serializer.
//!
//! Output is a YAML subset that [`super::parse`] reads back to the same
//! values: strings are always double-quoted, multi-line text uses block
//! literals, nested structures below the first level are written inline.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use super::scan::DELIMITER;
use super::value::{Mapping, Value};
use crate::error::{Result, serialization_failed};

#[allow(clippy::expect_used)]
static PLAIN_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$](?:[A-Za-z0-9_$.:/-]*[A-Za-z0-9_$./-])?$")
        .expect("plain key pattern is valid")
});

#[allow(clippy::expect_used)]
static FLOW_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("flow key pattern is valid"));

/// Plain scalars YAML would decode as something other than a string.
const RESERVED_KEYS: &[&str] = &[
    "null", "Null", "NULL", "true", "True", "TRUE", "false", "False", "FALSE",
];

const INDENT: &str = "  ";

/// Render a header and body as document text.
///
/// Null values are omitted. The body is appended verbatim right after the
/// closing `---`; callers supply any line break that should follow it.
pub fn serialize(header: &Mapping, body: &str) -> Result<String> {
    let mut lines = Vec::with_capacity(header.len());
    for (key, value) in header.iter() {
        check_key(key)?;
        emit_entry(&mut lines, &render_key(key, false), value);
    }

    let mut out = String::with_capacity(body.len() + 64);
    out.push_str(DELIMITER);
    out.push('\n');
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push_str(body);
    Ok(out)
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(serialization_failed(key, "key is empty"));
    }
    if key.chars().any(char::is_control) {
        return Err(serialization_failed(
            key.escape_debug().to_string(),
            "key contains control characters",
        ));
    }
    Ok(())
}

fn emit_entry(lines: &mut Vec<String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Sequence(items) if items.is_empty() => lines.push(format!("{key}: []")),
        Value::Sequence(items) => {
            lines.push(format!("{key}:"));
            for item in items {
                lines.push(format!("{INDENT}- {}", inline(item)));
            }
        }
        Value::Mapping(mapping) => {
            let entries: Vec<(&String, &Value)> =
                mapping.iter().filter(|(_, v)| !v.is_null()).collect();
            if entries.is_empty() {
                lines.push(format!("{key}: {{}}"));
            } else {
                lines.push(format!("{key}:"));
                for (sub_key, sub_value) in entries {
                    lines.push(format!(
                        "{INDENT}{}: {}",
                        render_key(sub_key, false),
                        inline(sub_value)
                    ));
                }
            }
        }
        Value::Bool(_) | Value::Number(_) => lines.push(format!("{key}: {}", inline(value))),
        Value::Date(s) => lines.push(format!("{key}: {}", quote(s))),
        Value::String(s) | Value::Multiline(s) => {
            if s.contains('\n') && literal_safe(s) {
                emit_block_literal(lines, key, s);
            } else {
                lines.push(format!("{key}: {}", quote(s)));
            }
        }
    }
}

/// Block literals can carry `s` exactly only when it has visible content,
/// no line-break characters other than `\n`, and no whitespace-only lines.
fn literal_safe(s: &str) -> bool {
    let core = s.trim_end_matches('\n');
    !core.is_empty()
        && !s
            .chars()
            .any(|c| (c.is_control() && c != '\n' && c != '\t') || is_yaml_break(c))
        && core
            .split('\n')
            .all(|line| line.is_empty() || !line.trim().is_empty())
}

fn is_yaml_break(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}' | '\u{feff}')
}

fn emit_block_literal(lines: &mut Vec<String>, key: &str, s: &str) {
    let core = s.trim_end_matches('\n');
    let trailing = s.len() - core.len();
    let chomp = match trailing {
        0 => "-",
        1 => "",
        _ => "+",
    };
    let starts_indented = core
        .split('\n')
        .find(|line| !line.is_empty())
        .is_some_and(|line| line.starts_with(' '));
    let indent_indicator = if starts_indented { "2" } else { "" };

    lines.push(format!("{key}: |{indent_indicator}{chomp}"));
    for line in core.split('\n') {
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{INDENT}{line}"));
        }
    }
    for _ in 1..trailing {
        lines.push(String::new());
    }
}

/// Render a value on a single line.
fn inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) | Value::Date(s) | Value::Multiline(s) => quote(s),
        Value::Sequence(items) => {
            let parts: Vec<String> = items.iter().map(inline).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Mapping(mapping) => {
            let parts: Vec<String> = mapping
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| format!("{}: {}", render_key(k, true), inline(v)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}

fn render_key(key: &str, flow: bool) -> String {
    let pattern = if flow { &FLOW_KEY } else { &PLAIN_KEY };
    if pattern.is_match(key) && !RESERVED_KEYS.contains(&key) {
        key.to_string()
    } else {
        quote(key)
    }
}

/// Double-quote a string, escaping everything YAML would otherwise interpret.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() || is_yaml_break(c) => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
