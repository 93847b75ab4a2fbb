//! Interop with `serde` and `serde_json`.
//!
//! `serde_json::Value` is strict JSON over valid Unicode, so conversion out of
//! a [`Value`] is lossy in two places: unpaired surrogates become U+FFFD and
//! non-finite doubles become `null`. `Invalid` maps to `null` both ways.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Number};

use crate::text::Utf16String;
use crate::value::Value;

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Invalid => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int64(n) => serde_json::Value::Number((*n).into()),
            Value::UInt64(n) => serde_json::Value::Number((*n).into()),
            Value::Double(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.to_string_lossy()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => {
                let mut out = JsonMap::with_capacity(map.len());
                for (key, val) in map {
                    out.insert(key.to_string_lossy(), val.into());
                }
                serde_json::Value::Object(out)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        (&value).into()
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Invalid,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => from_number(&n),
            serde_json::Value::String(s) => Value::String(s.into()),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (Utf16String::from(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Same signed-first inference as the parser.
fn from_number(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int64(i)
    } else if let Some(u) = n.as_u64() {
        Value::UInt64(u)
    } else {
        n.as_f64().map(Value::Double).unwrap_or(Value::Invalid)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Invalid => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int64(n) => serializer.serialize_i64(*n),
            Value::UInt64(n) => serializer.serialize_u64(*n),
            Value::Double(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(&s.to_string_lossy()),
            Value::List(items) => serializer.collect_seq(items),
            Value::Map(map) => {
                serializer.collect_map(map.iter().map(|(k, v)| (k.to_string_lossy(), v)))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
