//! # laxjson
//!
//! A lenient JSON-dialect codec: a parser from bytes to a dynamically-typed
//! [`Value`] tree, and a deterministic writer back to bytes.
//!
//! The parser accepts more than RFC 8259: single-quoted strings, trailing
//! commas, and loosely-written numbers. The writer always produces compact,
//! ASCII-only output with map keys in sorted order.
//!
//! ## Quick start
//!
//! ```rust
//! use laxjson::{decode, parse, serialize_to_string, Value};
//!
//! // Lenient input → Value
//! let value = decode(b"{'name': 'Alice', \"scores\": [95, 87, ], }").unwrap();
//! assert_eq!(value.get("name"), Some(&Value::from("Alice")));
//!
//! // Value → canonical text
//! assert_eq!(serialize_to_string(&value), r#"{"name":"Alice","scores":[95,87]}"#);
//!
//! // Low-level: value plus the offset where parsing stopped
//! let (value, stop) = parse("[1 1]");
//! assert_eq!(value, Value::Invalid);
//! assert_eq!(stop, 3);
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — bytes → `Value` (`parse`, `parse_with`, `decode`, `decode_with`)
//! - [`writer`] — `Value` → bytes (`serialize`, `serialize_with`, `write_value`)
//! - [`value`] — the `Value` tree
//! - [`text`] — UTF-16 code-unit strings
//! - [`options`] — parser and writer settings
//! - [`error`] — positional failures and top-level errors
//! - [`convert`] — `serde` / `serde_json` interop

pub mod convert;
pub mod error;
pub mod options;
pub mod parser;
pub mod text;
pub mod value;
pub mod writer;

pub use error::{Failure, FailureKind, LaxError, Result};
pub use options::{FloatFormat, NullLiteral, ParseOptions, WriteOptions};
pub use parser::{decode, decode_with, parse, parse_with};
pub use text::Utf16String;
pub use value::{Map, Value};
pub use writer::{serialize, serialize_to_string, serialize_with, write_value};
