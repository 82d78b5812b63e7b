//! The [`Value`] container: a closed sum over the six JSON kinds.
//!
//! Children of arrays and objects are owned by their parent, so a tree is always a
//! tree: inserting a value moves (or clones) it in, never shares it. Objects are a
//! `Vec<(String, Value)>` rather than a map so insertion order survives and duplicate
//! keys can coexist exactly as they appeared in the input.

use crate::error::{Result, ValueError};
use crate::number::Number;
use std::fmt;
use std::ops::Index;

/// Shared immutable `Null` returned by lookups that miss.
static NULL: Value = Value::Null;

/// A JSON value that keeps numbers as their original decimal text.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Num(Number),
    Str(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order. Keys are not required to be unique.
    Object(Vec<(String, Value)>),
}

/// The active kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Object,
    Array,
    Str,
    Num,
}

impl Kind {
    /// Stable lowercase name used in error messages and by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Str => "string",
            Kind::Num => "number",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// A fresh `Null`.
    pub fn new() -> Self {
        Value::Null
    }

    /// An empty value of the given kind: `""`, `0`, `false`, `[]` or `{}`.
    pub fn with_kind(kind: Kind) -> Self {
        match kind {
            Kind::Null => Value::Null,
            Kind::Bool => Value::Bool(false),
            Kind::Object => Value::Object(Vec::new()),
            Kind::Array => Value::Array(Vec::new()),
            Kind::Str => Value::Str(String::new()),
            Kind::Num => Value::Num(Number::from(0u8)),
        }
    }

    /// The sentinel handed out for out-of-range indexes and absent keys.
    pub fn null_ref() -> &'static Value {
        &NULL
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Num(_) => Kind::Num,
            Value::Str(_) => Kind::Str,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_num(&self) -> bool {
        matches!(self, Value::Num(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Value::Bool(false))
    }

    // ------------------------------------------------------------------------
    // Setters. Each one replaces the whole payload.
    // ------------------------------------------------------------------------

    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    pub fn set_str(&mut self, s: impl Into<String>) {
        *self = Value::Str(s.into());
    }

    /// Store an integer as canonical decimal text (`-82` → `"-82"`).
    pub fn set_int(&mut self, n: impl Into<Number>) {
        *self = Value::Num(n.into());
    }

    /// Store numeric text verbatim after checking it against the JSON number grammar.
    ///
    /// On failure the value is left exactly as it was.
    pub fn set_num_str(&mut self, text: &str) -> Result<()> {
        let n: Number = text.parse()?;
        *self = Value::Num(n);
        Ok(())
    }

    /// Store a finite float in its shortest round-trip text. NaN and infinities fail
    /// and leave the value unchanged.
    pub fn set_float(&mut self, f: f64) -> Result<()> {
        let n = Number::from_f64(f)?;
        *self = Value::Num(n);
        Ok(())
    }

    pub fn set_array(&mut self) {
        *self = Value::Array(Vec::new());
    }

    pub fn set_object(&mut self) {
        *self = Value::Object(Vec::new());
    }

    /// Reset to `Null`.
    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    /// Raw text of a `Str` or `Num`; `""` for every other kind.
    pub fn get_val_str(&self) -> &str {
        match self {
            Value::Str(s) => s,
            Value::Num(n) => n.as_str(),
            _ => "",
        }
    }

    /// Number of children of an array or object; `0` for scalars.
    pub fn size(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(pairs) => pairs.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    // ------------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------------

    /// Element `index` of an array, or `None` if out of range or not an array.
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    /// First value stored under `key`, or `None` if absent or not an object.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(pairs) => pairs.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Append one element. A `Null` receiver becomes an empty array first; any other
    /// non-array kind is rejected without being touched.
    pub fn push_back(&mut self, v: impl Into<Value>) -> Result<()> {
        let items = self.array_for_append()?;
        items.push(v.into());
        Ok(())
    }

    /// Append every element in order, under the same receiver rule as [`push_back`].
    /// Nothing is appended when the receiver is rejected.
    ///
    /// [`push_back`]: Value::push_back
    pub fn push_back_v<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Value>,
    {
        let items = self.array_for_append()?;
        items.extend(values);
        Ok(())
    }

    /// Set `key` to `v`: the first existing pair with that key is overwritten, otherwise
    /// the pair is appended. A `Null` receiver becomes an empty object first.
    pub fn push_kv(&mut self, key: impl Into<String>, v: impl Into<Value>) -> Result<()> {
        let key = key.into();
        let pairs = self.object_for_append()?;
        match pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = v.into(),
            None => pairs.push((key, v.into())),
        }
        Ok(())
    }

    /// Append a pair without looking for an existing key, so duplicates can coexist.
    pub fn append_kv(&mut self, key: impl Into<String>, v: impl Into<Value>) -> Result<()> {
        let pairs = self.object_for_append()?;
        pairs.push((key.into(), v.into()));
        Ok(())
    }

    /// Merge every pair of `other` (which must be an object) through [`push_kv`].
    ///
    /// [`push_kv`]: Value::push_kv
    pub fn push_kvs(&mut self, other: Value) -> Result<()> {
        let incoming = match other {
            Value::Object(pairs) => pairs,
            other => {
                return Err(ValueError::TypeMismatch {
                    expected: "an object",
                    found: other.kind(),
                })
            }
        };
        self.object_for_append()?;
        for (k, v) in incoming {
            self.push_kv(k, v)?;
        }
        Ok(())
    }

    /// Position of the first pair with this key.
    pub fn find_key(&self, key: &str) -> Option<usize> {
        match self {
            Value::Object(pairs) => pairs.iter().position(|(k, _)| k == key),
            _ => None,
        }
    }

    pub fn exists(&self, key: &str) -> bool {
        self.find_key(key).is_some()
    }

    /// Like [`get_key`](Value::get_key) but answers a miss with the `Null` sentinel.
    pub fn find_value(&self, key: &str) -> &Value {
        self.get_key(key).unwrap_or(&NULL)
    }

    /// True when this is an object holding every listed key with the listed kind.
    pub fn check_object(&self, template: &[(&str, Kind)]) -> bool {
        self.is_object()
            && template
                .iter()
                .all(|(key, kind)| self.get_key(key).is_some_and(|v| v.kind() == *kind))
    }

    /// Object keys in stored order; empty for every other kind.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let pairs: &[(String, Value)] = match self {
            Value::Object(pairs) => pairs.as_slice(),
            _ => &[],
        };
        pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Array elements or object values in stored order; empty for scalars.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        let (items, pairs): (&[Value], &[(String, Value)]) = match self {
            Value::Array(items) => (items.as_slice(), &[]),
            Value::Object(pairs) => (&[], pairs.as_slice()),
            _ => (&[], &[]),
        };
        items.iter().chain(pairs.iter().map(|(_, v)| v))
    }

    fn array_for_append(&mut self) -> Result<&mut Vec<Value>> {
        if self.is_null() {
            *self = Value::Array(Vec::new());
        }
        match self {
            Value::Array(items) => Ok(items),
            other => Err(ValueError::NotAContainer {
                found: other.kind(),
            }),
        }
    }

    fn object_for_append(&mut self) -> Result<&mut Vec<(String, Value)>> {
        if self.is_null() {
            *self = Value::Object(Vec::new());
        }
        match self {
            Value::Object(pairs) => Ok(pairs),
            other => Err(ValueError::NotAContainer {
                found: other.kind(),
            }),
        }
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get(index).unwrap_or(&NULL)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.find_value(key)
    }
}

// ----------------------------------------------------------------------------
// Constructors
// ----------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Num(Number::from(n))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for Value {
    type Error = ValueError;

    fn try_from(f: f64) -> Result<Self> {
        Ok(Value::Num(Number::from_f64(f)?))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Num(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(pairs: Vec<(String, Value)>) -> Self {
        Value::Object(pairs)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}
