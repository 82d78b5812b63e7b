//! JSON reader: converts text into a [`Value`] tree.
//!
//! A byte-cursor recursive-descent parser. It accepts exactly one JSON document,
//! optionally surrounded by whitespace; anything else left over after the top-level
//! value (a second document, `garbage`, a stray bracket) fails the whole read.
//!
//! # Key design decisions
//!
//! - **Numbers are sliced, not converted**: the matched bytes become the `Num` text
//!   unchanged, so `1.10000000` and 30-digit integers survive untouched.
//! - **Duplicate keys are kept**: object pairs are appended in input order. Keyed
//!   lookups on the result return the first occurrence.
//! - **Bounded nesting**: arrays and objects deeper than [`ReadOptions::max_depth`]
//!   fail cleanly instead of exhausting the stack.
//! - **All or nothing**: a failed read never touches the receiving value.

use crate::error::{Result, ValueError};
use crate::number::{scan_number, Number};
use crate::value::Value;
use std::str::FromStr;

/// Default limit on array/object nesting.
pub const MAX_DEPTH: usize = 512;

/// Reader settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Deepest array/object nesting accepted. The top-level container is depth 1.
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

/// Parse one JSON document with the default options.
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &ReadOptions::default())
}

/// Parse one JSON document.
pub fn parse_with(text: &str, options: &ReadOptions) -> Result<Value> {
    let mut reader = Reader::new(text.as_bytes(), options.max_depth);
    reader.skip_whitespace();
    let value = reader.read_any()?;
    reader.skip_whitespace();
    if reader.x < reader.data.len() {
        return Err(reader.error("unexpected data after JSON document"));
    }
    Ok(value)
}

impl Value {
    /// Replace this value with the document parsed from `text`.
    ///
    /// On failure the value keeps its previous contents.
    pub fn read(&mut self, text: &str) -> Result<()> {
        *self = parse(text)?;
        Ok(())
    }

    pub fn read_with(&mut self, text: &str, options: &ReadOptions) -> Result<()> {
        *self = parse_with(text, options)?;
        Ok(())
    }

    /// Like [`read`](Value::read) for raw bytes; invalid UTF-8 is a parse failure.
    pub fn read_bytes(&mut self, data: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(data).map_err(|e| ValueError::Parse {
            offset: e.valid_up_to(),
            message: "invalid UTF-8".to_string(),
        })?;
        self.read(text)
    }
}

impl FromStr for Value {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

struct Reader<'a> {
    data: &'a [u8],
    x: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8], max_depth: usize) -> Self {
        Self {
            data,
            x: 0,
            depth: 0,
            max_depth,
        }
    }

    fn error(&self, message: &str) -> ValueError {
        ValueError::Parse {
            offset: self.x,
            message: message.to_string(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    /// Skips space, tab, CR, LF, and also vertical tab and form feed.
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c) = self.peek() {
            self.x += 1;
        }
    }

    fn read_any(&mut self) -> Result<Value> {
        match self.peek() {
            Some(b'{') => self.read_object(),
            Some(b'[') => self.read_array(),
            Some(b'"') => Ok(Value::Str(self.read_string()?)),
            Some(b't') => self.read_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.read_literal(b"false", Value::Bool(false)),
            Some(b'n') => self.read_literal(b"null", Value::Null),
            Some(b'-' | b'0'..=b'9') => self.read_number(),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn read_literal(&mut self, literal: &[u8], value: Value) -> Result<Value> {
        if self.data[self.x..].starts_with(literal) {
            self.x += literal.len();
            Ok(value)
        } else {
            Err(self.error("invalid literal"))
        }
    }

    fn read_number(&mut self) -> Result<Value> {
        let start = self.x;
        let end = scan_number(self.data, start).ok_or_else(|| self.error("invalid number"))?;
        // The scanner only accepts ASCII digits, signs, '.', 'e' and 'E'.
        let text = std::str::from_utf8(&self.data[start..end])
            .map_err(|_| self.error("invalid number"))?;
        self.x = end;
        Ok(Value::Num(Number::from_validated(text)))
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.error("nesting too deep"));
        }
        Ok(())
    }

    fn read_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.x += 1; // '['
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.x += 1;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            self.skip_whitespace();
            items.push(self.read_any()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b']') => {
                    self.x += 1;
                    break;
                }
                Some(_) => return Err(self.error("expected ',' or ']' in array")),
                None => return Err(self.error("unterminated array")),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    fn read_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.x += 1; // '{'
        let mut pairs = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.x += 1;
            self.depth -= 1;
            return Ok(Value::Object(pairs));
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'"') => {}
                Some(_) => return Err(self.error("expected string key in object")),
                None => return Err(self.error("unterminated object")),
            }
            let key = self.read_string()?;

            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.error("expected ':' after object key"));
            }
            self.x += 1;

            self.skip_whitespace();
            let value = self.read_any()?;
            pairs.push((key, value));

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b'}') => {
                    self.x += 1;
                    break;
                }
                Some(_) => return Err(self.error("expected ',' or '}' in object")),
                None => return Err(self.error("unterminated object")),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(pairs))
    }

    /// Read a quoted string starting at the opening quote. Unescaped runs are copied
    /// in bulk; escapes are decoded one at a time.
    fn read_string(&mut self) -> Result<String> {
        let start = self.x;
        self.x += 1; // opening quote
        let mut out: Vec<u8> = Vec::new();
        let mut run = self.x;

        loop {
            match self.peek() {
                None => return Err(self.error("unterminated string")),
                Some(b'"') => {
                    out.extend_from_slice(&self.data[run..self.x]);
                    self.x += 1;
                    break;
                }
                Some(b'\\') => {
                    out.extend_from_slice(&self.data[run..self.x]);
                    self.x += 1;
                    self.read_escape(&mut out)?;
                    run = self.x;
                }
                Some(0x00..=0x1f) => return Err(self.error("control character in string")),
                Some(_) => self.x += 1,
            }
        }

        String::from_utf8(out).map_err(|_| ValueError::Parse {
            offset: start,
            message: "invalid UTF-8 in string".to_string(),
        })
    }

    /// Decode one escape; the cursor sits just past the backslash.
    fn read_escape(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let decoded = match self.peek() {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{08}',
            Some(b'f') => '\u{0c}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.x += 1;
                let ch = self.read_unicode_escape()?;
                push_char(out, ch);
                return Ok(());
            }
            Some(_) => return Err(self.error("invalid escape sequence")),
            None => return Err(self.error("unterminated string")),
        };
        self.x += 1;
        push_char(out, decoded);
        Ok(())
    }

    /// Decode the hex part of `\uXXXX`, pairing a high surrogate with the `\uXXXX`
    /// low surrogate that must follow it.
    fn read_unicode_escape(&mut self) -> Result<char> {
        let first = self.read_hex4()?;
        let code = match first {
            0xD800..=0xDBFF => {
                if !self.data[self.x..].starts_with(b"\\u") {
                    return Err(self.error("unpaired high surrogate"));
                }
                self.x += 2;
                let second = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(self.error("invalid low surrogate"));
                }
                0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(self.error("unpaired low surrogate")),
            _ => first,
        };
        char::from_u32(code).ok_or_else(|| self.error("invalid unicode escape"))
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .peek()
                .and_then(|b| (b as char).to_digit(16))
                .ok_or_else(|| self.error("invalid \\u escape"))?;
            code = (code << 4) | digit;
            self.x += 1;
        }
        Ok(code)
    }
}

fn push_char(out: &mut Vec<u8>, ch: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}
