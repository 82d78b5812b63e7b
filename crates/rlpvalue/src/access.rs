//! Typed getters: kind-checked, range-checked reads out of a [`Value`].
//!
//! These never default. A `Str` asked for an integer is a [`ValueError::TypeMismatch`],
//! `"2147483648"` asked for an `i32` is [`ValueError::OutOfRange`], and `"1.5"` asked
//! for any integer is [`ValueError::NotAnInteger`]. RPC layers rely on telling those
//! apart from a genuine `0` or `""`.

use crate::error::{Result, ValueError};
use crate::number::Number;
use crate::value::Value;
use std::str::FromStr;

impl Value {
    pub fn get_str(&self) -> Result<&str> {
        match self {
            Value::Str(s) => Ok(s.as_str()),
            other => Err(mismatch("a string", other)),
        }
    }

    pub fn get_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("a bool", other)),
        }
    }

    pub fn get_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items.as_slice()),
            other => Err(mismatch("an array", other)),
        }
    }

    pub fn get_object(&self) -> Result<&[(String, Value)]> {
        match self {
            Value::Object(pairs) => Ok(pairs.as_slice()),
            other => Err(mismatch("an object", other)),
        }
    }

    /// Children of an array, or the values of an object, in stored order.
    pub fn get_values(&self) -> Result<Vec<&Value>> {
        match self {
            Value::Array(_) | Value::Object(_) => Ok(self.values().collect()),
            other => Err(mismatch("an array or object", other)),
        }
    }

    /// Keys of an object in stored order, duplicates included.
    pub fn get_keys(&self) -> Result<Vec<&str>> {
        match self {
            Value::Object(_) => Ok(self.keys().collect()),
            other => Err(mismatch("an object", other)),
        }
    }

    pub fn get_int(&self) -> Result<i32> {
        parse_integer(self.get_number()?, "i32")
    }

    pub fn get_int64(&self) -> Result<i64> {
        parse_integer(self.get_number()?, "i64")
    }

    pub fn get_uint64(&self) -> Result<u64> {
        parse_integer(self.get_number()?, "u64")
    }

    /// Any numeric text as `f64`; fraction and exponent are fine here.
    pub fn get_real(&self) -> Result<f64> {
        let n = self.get_number()?;
        let f: f64 = n
            .as_str()
            .parse()
            .map_err(|_| ValueError::InvalidNumber(n.to_string()))?;
        if f.is_finite() {
            Ok(f)
        } else {
            Err(ValueError::OutOfRange {
                text: n.to_string(),
                target: "f64",
            })
        }
    }

    fn get_number(&self) -> Result<&Number> {
        match self {
            Value::Num(n) => Ok(n),
            other => Err(mismatch("a number", other)),
        }
    }
}

fn mismatch(expected: &'static str, found: &Value) -> ValueError {
    ValueError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

/// Integer text is already grammar-checked, so the only ways `parse` can fail are
/// overflow and a sign the target cannot hold. Both are reported as out of range.
fn parse_integer<T: FromStr>(n: &Number, target: &'static str) -> Result<T> {
    if !n.is_integer() {
        return Err(ValueError::NotAnInteger(n.to_string()));
    }
    n.as_str().parse().map_err(|_| ValueError::OutOfRange {
        text: n.to_string(),
        target,
    })
}
