//! UTF-16 code-unit text.
//!
//! String values are sequences of UTF-16 code units rather than Rust `String`s:
//! a `\uD83D` escape decodes to a lone surrogate, and the writer re-emits each
//! unit independently, so the codec has to be able to hold text that is not
//! valid Unicode.

use std::fmt;
use std::string::FromUtf16Error;

/// Owned UTF-16 text, ordered lexicographically by code unit.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf16String(Vec<u16>);

impl Utf16String {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Wrap raw code units. Unpaired surrogates are allowed.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self(units)
    }

    pub fn as_units(&self) -> &[u16] {
        &self.0
    }

    pub fn into_units(self) -> Vec<u16> {
        self.0
    }

    /// Number of code units (not characters).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push_unit(&mut self, unit: u16) {
        self.0.push(unit);
    }

    /// Append a character as one or two code units.
    pub fn push_char(&mut self, ch: char) {
        let mut buf = [0u16; 2];
        self.0.extend_from_slice(ch.encode_utf16(&mut buf));
    }

    pub fn push_str(&mut self, s: &str) {
        self.0.extend(s.encode_utf16());
    }

    /// Convert to a `String`, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }

    /// Convert to a `String`, failing on unpaired surrogates.
    pub fn to_string_strict(&self) -> Result<String, FromUtf16Error> {
        String::from_utf16(&self.0)
    }
}

impl From<&str> for Utf16String {
    fn from(s: &str) -> Self {
        Self(s.encode_utf16().collect())
    }
}

impl From<String> for Utf16String {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for Utf16String {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl PartialEq<str> for Utf16String {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for Utf16String {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for Utf16String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for Utf16String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}
