//! Numeric payload: JSON numbers kept as their original decimal text.
//!
//! A [`Number`] never goes through `f64` or a fixed-width integer on the way in, so
//! `1.10000000` and `32482348723847471234` come back out byte-for-byte. The only way to
//! build one is through the grammar check in [`scan_number`] or from a native number,
//! which makes "a `Num` always holds valid numeric text" hold by construction.

use crate::error::{Result, ValueError};
use std::fmt;
use std::str::FromStr;

/// Validated JSON number text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// The stored decimal text, exactly as it was set or parsed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text has no fractional part and no exponent.
    pub fn is_integer(&self) -> bool {
        !self.0.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
    }

    /// True when the text starts with a minus sign (this includes `-0`).
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Build from a finite float using the shortest text that reads back to the same `f64`.
    pub fn from_f64(f: f64) -> Result<Self> {
        if !f.is_finite() {
            return Err(ValueError::NonFinite);
        }
        // Debug formatting is the shortest round-trip form and switches to an exponent
        // for very large or very small magnitudes; both shapes are valid JSON numbers.
        Ok(Number(format!("{:?}", f)))
    }

    pub(crate) fn from_validated(text: &str) -> Self {
        Number(text.to_string())
    }
}

impl FromStr for Number {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        if is_valid_number(s) {
            Ok(Number(s.to_string()))
        } else {
            Err(ValueError::InvalidNumber(s.to_string()))
        }
    }
}

impl TryFrom<f64> for Number {
    type Error = ValueError;

    fn try_from(f: f64) -> Result<Self> {
        Number::from_f64(f)
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number(n.to_string())
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Number {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check that the whole of `s` is one JSON number.
pub fn is_valid_number(s: &str) -> bool {
    scan_number(s.as_bytes(), 0) == Some(s.len())
}

/// Scan a JSON number starting at `start` and return the index one past its last byte.
///
/// Grammar (RFC 8259): `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?`.
/// Returns `None` when the bytes at `start` do not begin a number, or when a required
/// digit run is missing (`-`, `1.`, `1e+`). A leading zero ends the integer part, so
/// `01` scans as `0` and the caller sees the `1` as trailing data.
pub fn scan_number(data: &[u8], start: usize) -> Option<usize> {
    let len = data.len();
    let mut x = start;

    if x < len && data[x] == b'-' {
        x += 1;
    }

    match data.get(x) {
        Some(b'0') => x += 1,
        Some(b'1'..=b'9') => x = skip_digits(data, x + 1),
        _ => return None,
    }

    if x < len && data[x] == b'.' {
        let digits = x + 1;
        x = skip_digits(data, digits);
        if x == digits {
            return None;
        }
    }

    if x < len && (data[x] == b'e' || data[x] == b'E') {
        x += 1;
        if x < len && (data[x] == b'+' || data[x] == b'-') {
            x += 1;
        }
        let digits = x;
        x = skip_digits(data, digits);
        if x == digits {
            return None;
        }
    }

    Some(x)
}

fn skip_digits(data: &[u8], mut x: usize) -> usize {
    while x < data.len() && data[x].is_ascii_digit() {
        x += 1;
    }
    x
}
