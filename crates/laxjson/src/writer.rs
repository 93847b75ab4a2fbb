//! Deterministic writer — serializes a [`Value`] tree into compact JSON text.
//!
//! Output rules:
//!
//! - **No whitespace**: `[1,2]`, `{"a":1}`
//! - **Sorted keys**: map keys appear in ascending code-unit order, whatever
//!   order they were inserted in
//! - **Double quotes only**, with `\b \f \n \r \t \\ \"` escaped
//! - **ASCII only**: code units from 127 up are written as `\uXXXX` (lowercase
//!   hex), one escape per unit, so surrogate pairs become two escapes
//! - **Doubles** use `%g`-style six significant digits by default; see
//!   [`FloatFormat`]
//!
//! Writing cannot fail: every `Value` has a serialization. `Invalid` is `null`.
//!
//! # Example
//! ```
//! use laxjson::{serialize_to_string, Value};
//! let value = Value::map([("def", Value::from(42)), ("abc", Value::from(true))]);
//! assert_eq!(serialize_to_string(&value), r#"{"abc":true,"def":42}"#);
//! ```

use crate::options::{FloatFormat, WriteOptions};
use crate::text::Utf16String;
use crate::value::{Map, Value};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Significant digits of the default double format.
const GENERAL_PRECISION: i32 = 6;

/// Serialize a value with default options.
pub fn serialize(value: &Value) -> Vec<u8> {
    serialize_with(value, &WriteOptions::default())
}

pub fn serialize_with(value: &Value, options: &WriteOptions) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(value, &mut out, options);
    out
}

/// Serialize into a `String`. The output is always ASCII.
pub fn serialize_to_string(value: &Value) -> String {
    serialize(value).into_iter().map(char::from).collect()
}

/// Append the serialization of `value` to `out`.
pub fn write_value(value: &Value, out: &mut Vec<u8>, options: &WriteOptions) {
    match value {
        Value::Invalid => out.extend_from_slice(b"null"),
        Value::Bool(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
        Value::Int64(n) => out.extend_from_slice(n.to_string().as_bytes()),
        Value::UInt64(n) => out.extend_from_slice(n.to_string().as_bytes()),
        Value::Double(f) => write_double(*f, options.float_format, out),
        Value::String(s) => write_string(s, out),
        Value::List(items) => write_list(items, out, options),
        Value::Map(map) => write_map(map, out, options),
    }
}

fn write_list(items: &[Value], out: &mut Vec<u8>, options: &WriteOptions) {
    out.push(b'[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(b',');
        }
        write_value(item, out, options);
    }
    out.push(b']');
}

/// `BTreeMap` iteration is already in ascending key order.
fn write_map(map: &Map, out: &mut Vec<u8>, options: &WriteOptions) {
    out.push(b'{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(b',');
        }
        write_string(key, out);
        out.push(b':');
        write_value(value, out, options);
    }
    out.push(b'}');
}

/// Quote and escape text one UTF-16 code unit at a time.
fn write_string(s: &Utf16String, out: &mut Vec<u8>) {
    out.push(b'"');
    for &unit in s.as_units() {
        match unit {
            0x08 => out.extend_from_slice(b"\\b"),
            0x0c => out.extend_from_slice(b"\\f"),
            0x0a => out.extend_from_slice(b"\\n"),
            0x0d => out.extend_from_slice(b"\\r"),
            0x09 => out.extend_from_slice(b"\\t"),
            0x5c => out.extend_from_slice(b"\\\\"),
            0x22 => out.extend_from_slice(b"\\\""),
            // NUL would end a null-terminated reader's buffer.
            0x01..=0x7e => out.push(unit as u8),
            _ => write_unicode_escape(unit, out),
        }
    }
    out.push(b'"');
}

fn write_unicode_escape(unit: u16, out: &mut Vec<u8>) {
    out.extend_from_slice(b"\\u");
    for shift in [12, 8, 4, 0] {
        out.push(HEX_DIGITS[usize::from((unit >> shift) & 0xf)]);
    }
}

fn write_double(f: f64, format: FloatFormat, out: &mut Vec<u8>) {
    if !f.is_finite() {
        out.extend_from_slice(b"null");
        return;
    }
    match format {
        FloatFormat::General => out.extend_from_slice(format_general(f).as_bytes()),
        FloatFormat::Shortest => {
            let mut buffer = ryu_js::Buffer::new();
            out.extend_from_slice(buffer.format_finite(f).as_bytes());
        }
    }
}

/// Format a finite double like C's `%g` with six significant digits:
/// - fixed notation when the decimal exponent is in `-4..6`
/// - scientific otherwise, exponent signed and at least two digits (`1e+20`)
/// - trailing fractional zeros and a trailing `.` removed
fn format_general(f: f64) -> String {
    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, f);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, f)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
