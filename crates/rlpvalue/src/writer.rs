//! JSON writer: renders a [`Value`] tree as text.
//!
//! Numbers are emitted from their stored text, keys and elements in stored order, so
//! anything this crate parsed comes back out byte-for-byte in compact mode. Pretty
//! printing only adds whitespace between tokens.
//!
//! Writing recurses once per nesting level and has no depth limit of its own. Trees
//! that came from the reader are at most [`MAX_DEPTH`](crate::MAX_DEPTH) deep; trees
//! built in code are bounded only by the stack, which also holds for dropping them.

use crate::value::Value;
use std::fmt;

/// Writer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    /// Spaces per nesting level. `0` writes everything on one line with no spaces.
    pub indent: usize,
}

impl Value {
    /// Compact JSON text.
    pub fn write(&self) -> String {
        self.write_with(&WriteOptions::default())
    }

    /// Multi-line JSON text with `indent` spaces per level (`0` is compact).
    pub fn write_pretty(&self, indent: usize) -> String {
        self.write_with(&WriteOptions { indent })
    }

    /// Render with explicit options. Nesting depth is bounded only by the stack.
    pub fn write_with(&self, options: &WriteOptions) -> String {
        let mut out = String::new();
        write_value(self, options.indent, 0, &mut out);
        out
    }
}

/// `{}` writes compact JSON; `{:#}` pretty-prints with two-space indentation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = if f.alternate() { 2 } else { 0 };
        f.write_str(&self.write_pretty(indent))
    }
}

fn write_value(value: &Value, indent: usize, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Num(n) => out.push_str(n.as_str()),
        Value::Str(s) => write_string(s, out),
        Value::Array(items) => write_array(items, indent, depth, out),
        Value::Object(pairs) => write_object(pairs, indent, depth, out),
    }
}

fn write_array(items: &[Value], indent: usize, depth: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        newline(indent, depth + 1, out);
        write_value(item, indent, depth + 1, out);
    }
    newline(indent, depth, out);
    out.push(']');
}

fn write_object(pairs: &[(String, Value)], indent: usize, depth: usize, out: &mut String) {
    if pairs.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        newline(indent, depth + 1, out);
        write_string(key, out);
        out.push(':');
        if indent > 0 {
            out.push(' ');
        }
        write_value(value, indent, depth + 1, out);
    }
    newline(indent, depth, out);
    out.push('}');
}

/// Line break plus indentation; a no-op in compact mode.
fn newline(indent: usize, depth: usize, out: &mut String) {
    if indent == 0 {
        return;
    }
    out.push('\n');
    out.extend(std::iter::repeat_n(' ', indent * depth));
}

/// Quote and escape a string. Named escapes for the usual control characters,
/// `\u00XX` for the rest of C0 and DEL, everything else (non-ASCII included) verbatim.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < ' ' || c == '\u{7f}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
