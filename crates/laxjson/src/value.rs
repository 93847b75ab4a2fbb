//! The dynamically-typed value tree shared by the parser and the writer.

use std::collections::BTreeMap;

use crate::text::Utf16String;

/// Object storage. A `BTreeMap` keeps keys unique and iterates them in
/// ascending code-unit order, which is the order the writer emits.
pub type Map = BTreeMap<Utf16String, Value>;

/// A parsed or serializable datum.
///
/// Integers keep their signedness: anything that fits an `i64` is `Int64`,
/// larger non-negative values are `UInt64`, and neither is ever coerced into
/// the other.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent or failed value. Written as `null`.
    #[default]
    Invalid,
    Bool(bool),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    String(Utf16String),
    List(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Build a map from key/value pairs. Later duplicates overwrite earlier ones.
    pub fn map<K, I>(pairs: I) -> Self
    where
        K: Into<Utf16String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn list<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Value::Invalid)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Signed view of an integer value; `UInt64` only when it fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(n) => Some(*n),
            Value::UInt64(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Unsigned view of an integer value; `Int64` only when non-negative.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt64(n) => Some(*n),
            Value::Int64(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Any numeric variant as a double (integers may round).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            Value::Int64(n) => Some(*n as f64),
            Value::UInt64(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Utf16String> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// String contents with unpaired surrogates replaced by U+FFFD.
    pub fn as_str(&self) -> Option<String> {
        self.as_text().map(Utf16String::to_string_lossy)
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key in a `Map` value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(&Utf16String::from(key))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int64(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt64(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Utf16String> for Value {
    fn from(s: Utf16String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}
