//! Lenient JSON parser — converts bytes into a [`Value`] tree.
//!
//! A recursive-descent parser over a byte buffer. Beyond RFC 8259 it accepts:
//!
//! - Single-quoted strings (`'a'`), with the other quote character unescaped
//! - Trailing commas in arrays and objects (`[1, ]`, `{"a": 1, }`)
//! - Numbers written with any run of `0-9 + - . e E` that converts to an
//!   `i64`, `u64` or `f64`, tried in that order (`.5`, `+3`, `1e3`)
//! - Unknown escapes, which drop their backslash (`"\ "` is `" "`)
//!
//! # Key design decisions
//!
//! - **Positions, not exceptions**: every sub-parser takes the offset to start
//!   at and returns the offset after what it consumed, or a [`Failure`] naming
//!   the offset it stopped at. Nothing is recovered after a failure.
//! - **NUL ends the buffer**: the input is cut at its first NUL byte so that
//!   null-terminated buffers and length-bounded slices behave the same.
//! - **Bounded lookahead**: keyword matching only ever looks at bytes inside
//!   the buffer; a keyword that is the last thing in the input is fine.
//! - **Depth guard**: arrays and objects recurse, so nesting is capped by
//!   [`ParseOptions::max_depth`].

use tracing::debug;

use crate::error::{Failure, FailureKind, LaxError, Result};
use crate::options::ParseOptions;
use crate::text::Utf16String;
use crate::value::{Map, Value};

type Step = std::result::Result<(Value, usize), Failure>;

/// Parse one value from the start of `input` with default options.
///
/// Returns the value and the offset of the first unconsumed byte. On failure
/// the value is [`Value::Invalid`] and the offset is where parsing stopped.
/// Trailing input is not inspected; see [`decode`] for a whole-buffer check.
pub fn parse(input: impl AsRef<[u8]>) -> (Value, usize) {
    match parse_with(input, &ParseOptions::default()) {
        Ok(parsed) => parsed,
        Err(failure) => (Value::Invalid, failure.offset),
    }
}

/// Like [`parse`], but with explicit options and a tagged [`Failure`].
pub fn parse_with(
    input: impl AsRef<[u8]>,
    options: &ParseOptions,
) -> std::result::Result<(Value, usize), Failure> {
    Parser::new(input.as_ref(), options).value(0)
}

/// Parse a whole buffer with default options: one value, then only whitespace.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Value> {
    decode_with(input, &ParseOptions::default())
}

/// Parse a whole buffer and classify the outcome.
///
/// - a failure with nothing but whitespace left is a [`LaxError::ShortRead`]
/// - a failure before the end is a [`LaxError::Malformed`]
/// - a value followed by non-whitespace is a [`LaxError::TrailingData`]
pub fn decode_with(input: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Value> {
    let input = input.as_ref();
    if let Some(max) = options.max_input_len {
        if input.len() > max {
            debug!(len = input.len(), max, "input too large");
            return Err(LaxError::InputTooLarge {
                len: input.len(),
                max,
            });
        }
    }

    let mut parser = Parser::new(input, options);
    let end = parser.input.len();
    match parser.value(0) {
        Ok((value, stop)) => {
            let rest = skip_whitespace(parser.input, stop);
            if rest == end {
                Ok(value)
            } else {
                debug!(offset = rest, "trailing data left");
                Err(LaxError::TrailingData { offset: rest })
            }
        }
        Err(Failure { offset, kind }) => {
            let rest = skip_whitespace(parser.input, offset);
            if rest == end {
                debug!(offset = rest, %kind, "short read");
                Err(LaxError::ShortRead { offset: rest, kind })
            } else {
                debug!(offset = rest, %kind, "parse error");
                Err(LaxError::Malformed { offset: rest, kind })
            }
        }
    }
}

/// Recursive-descent state: the (NUL-truncated) buffer and the nesting depth.
struct Parser<'a> {
    input: &'a [u8],
    options: &'a ParseOptions,
    depth: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ObjectState {
    ExpectKey,
    ExpectColon,
    ExpectValue,
    ExpectCommaOrEnd,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8], options: &'a ParseOptions) -> Self {
        let end = input.iter().position(|&b| b == 0).unwrap_or(input.len());
        Self {
            input: &input[..end],
            options,
            depth: 0,
        }
    }

    fn peek(&self, pos: usize) -> Option<u8> {
        self.input.get(pos).copied()
    }

    /// Skip leading whitespace, then dispatch on the lookahead byte.
    fn value(&mut self, pos: usize) -> Step {
        let pos = skip_whitespace(self.input, pos);
        match self.peek(pos) {
            Some(b't' | b'f' | b'n') => self.keyword(pos),
            Some(b'0'..=b'9' | b'-' | b'.' | b'e' | b'E' | b'+') => self.number(pos),
            Some(quote @ (b'\'' | b'"')) => {
                let (text, next) = self.string(pos, quote)?;
                Ok((Value::String(text), next))
            }
            Some(b'{') => self.nested(pos, Self::object),
            Some(b'[') => self.nested(pos, Self::array),
            _ => Err(Failure::new(pos, FailureKind::UnexpectedChar)),
        }
    }

    /// `true`, `false` or `null`, only when followed by a delimiter or the end.
    fn keyword(&self, pos: usize) -> Step {
        let (word, value): (&[u8], Value) = match self.input[pos] {
            b't' => (b"true", Value::Bool(true)),
            b'f' => (b"false", Value::Bool(false)),
            _ => (b"null", self.options.null_literal.value()),
        };
        let rest = &self.input[pos..];
        if rest.starts_with(word) && ends_literal(rest.get(word.len()).copied()) {
            Ok((value, pos + word.len()))
        } else {
            Err(Failure::new(pos, FailureKind::InvalidKeyword))
        }
    }

    /// Scan a maximal numeric run, then convert it.
    ///
    /// A run that scans but does not convert (`--`, `1.2.3`) fails at the end
    /// of the run, not at its start.
    fn number(&self, start: usize) -> Step {
        let mut pos = start;
        loop {
            match self.peek(pos) {
                None | Some(b' ' | b'\t' | b'\r' | b'\n' | b',' | b']' | b'}') => break,
                Some(b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E') => pos += 1,
                Some(_) => return Err(Failure::new(pos, FailureKind::InvalidNumber)),
            }
        }

        std::str::from_utf8(&self.input[start..pos])
            .ok()
            .and_then(convert_number)
            .map(|value| (value, pos))
            .ok_or(Failure::new(pos, FailureKind::UnconvertibleNumber))
    }

    /// Quoted string starting at `start`, which holds the `quote` byte.
    ///
    /// Returns the decoded text and the offset after the closing quote.
    fn string(
        &self,
        start: usize,
        quote: u8,
    ) -> std::result::Result<(Utf16String, usize), Failure> {
        let mut out = Utf16String::new();
        let mut pending = false;
        let mut pos = start + 1;

        loop {
            let Some(byte) = self.peek(pos) else {
                return Err(Failure::new(pos, FailureKind::UnterminatedString));
            };
            match byte {
                b'\\' => {
                    if pending {
                        out.push_unit(u16::from(b'\\'));
                    }
                    pending = !pending;
                    pos += 1;
                }
                b'\'' | b'"' => {
                    if byte == quote && !pending {
                        return Ok((out, pos + 1));
                    }
                    out.push_unit(byte.into());
                    pending = false;
                    pos += 1;
                }
                b'b' | b'f' | b'n' | b'r' | b't' => {
                    let unit = if pending { control_escape(byte) } else { byte };
                    out.push_unit(unit.into());
                    pending = false;
                    pos += 1;
                }
                b'u' if pending => {
                    out.push_unit(self.hex_unit(pos + 1)?);
                    pending = false;
                    pos += 5;
                }
                0x80..=0xff => {
                    // Valid UTF-8 becomes its code units; a stray byte is taken as Latin-1.
                    match bstr::decode_utf8(&self.input[pos..]) {
                        (Some(ch), len) => {
                            out.push_char(ch);
                            pos += len;
                        }
                        (None, _) => {
                            out.push_unit(byte.into());
                            pos += 1;
                        }
                    }
                    pending = false;
                }
                _ => {
                    out.push_unit(byte.into());
                    pending = false;
                    pos += 1;
                }
            }
        }
    }

    /// Four hex digits at `pos` as one UTF-16 code unit.
    fn hex_unit(&self, pos: usize) -> std::result::Result<u16, Failure> {
        self.input
            .get(pos..pos + 4)
            .and_then(|digits| {
                digits.iter().try_fold(0u16, |acc, &d| {
                    char::from(d).to_digit(16).map(|n| (acc << 4) | n as u16)
                })
            })
            .ok_or(Failure::new(pos, FailureKind::BadUnicodeEscape))
    }

    /// Run an array/object sub-parser one level deeper, enforcing the depth cap.
    fn nested(&mut self, start: usize, body: fn(&mut Self, usize) -> Step) -> Step {
        if self.depth >= self.options.max_depth {
            return Err(Failure::new(start, FailureKind::TooDeep));
        }
        self.depth += 1;
        let result = body(self, start);
        self.depth -= 1;
        result
    }

    fn array(&mut self, start: usize) -> Step {
        let mut items = Vec::new();
        let mut needs_comma = false;
        let mut pos = start + 1;

        loop {
            match self.peek(pos) {
                None => return Err(Failure::new(pos, FailureKind::UnterminatedArray)),
                Some(b) if is_whitespace(b) => pos += 1,
                Some(b',') => {
                    if !needs_comma {
                        return Err(Failure::new(pos, FailureKind::UnexpectedComma));
                    }
                    needs_comma = false;
                    pos += 1;
                }
                // Closes regardless of a pending comma: `[1,]` is allowed.
                Some(b']') => return Ok((Value::List(items), pos + 1)),
                Some(_) => {
                    if needs_comma {
                        return Err(Failure::new(pos, FailureKind::MissingComma));
                    }
                    let (item, next) = self.value(pos)?;
                    items.push(item);
                    needs_comma = true;
                    pos = next;
                }
            }
        }
    }

    fn object(&mut self, start: usize) -> Step {
        let mut map = Map::new();
        let mut key = Utf16String::new();
        let mut state = ObjectState::ExpectKey;
        let mut pos = start + 1;

        loop {
            if state == ObjectState::ExpectValue {
                let (value, next) = self.value(pos)?;
                // Last occurrence of a key wins.
                map.insert(std::mem::take(&mut key), value);
                state = ObjectState::ExpectCommaOrEnd;
                pos = next;
                continue;
            }

            let Some(byte) = self.peek(pos) else {
                return Err(Failure::new(pos, FailureKind::UnterminatedObject));
            };
            if is_whitespace(byte) {
                pos += 1;
                continue;
            }

            match (state, byte) {
                // `}` right after `{` or after a trailing comma.
                (ObjectState::ExpectKey, b'}') => return Ok((Value::Map(map), pos + 1)),
                (ObjectState::ExpectKey, b'\'' | b'"') => {
                    let (text, next) = self.string(pos, byte)?;
                    key = text;
                    state = ObjectState::ExpectColon;
                    pos = next;
                }
                (ObjectState::ExpectKey, _) => {
                    return Err(Failure::new(pos, FailureKind::ExpectedKey));
                }
                (ObjectState::ExpectColon, b':') => {
                    state = ObjectState::ExpectValue;
                    pos += 1;
                }
                (ObjectState::ExpectColon, _) => {
                    return Err(Failure::new(pos, FailureKind::ExpectedColon));
                }
                (ObjectState::ExpectCommaOrEnd, b',') => {
                    state = ObjectState::ExpectKey;
                    pos += 1;
                }
                (ObjectState::ExpectCommaOrEnd, b'}') => {
                    return Ok((Value::Map(map), pos + 1));
                }
                (ObjectState::ExpectCommaOrEnd | ObjectState::ExpectValue, _) => {
                    return Err(Failure::new(pos, FailureKind::ExpectedCommaOrEnd));
                }
            }
        }
    }
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn skip_whitespace(input: &[u8], mut pos: usize) -> usize {
    while input.get(pos).is_some_and(|&b| is_whitespace(b)) {
        pos += 1;
    }
    pos
}

/// Bytes allowed right after a keyword. `None` is the end of the buffer.
fn ends_literal(next: Option<u8>) -> bool {
    match next {
        None => true,
        Some(b) => matches!(b, b',' | b']' | b'}') || is_whitespace(b),
    }
}

fn control_escape(byte: u8) -> u8 {
    match byte {
        b'b' => 0x08,
        b'f' => 0x0c,
        b'n' => b'\n',
        b'r' => b'\r',
        _ => b'\t',
    }
}

/// Type inference order: i64, then u64, then a finite f64.
fn convert_number(run: &str) -> Option<Value> {
    if let Ok(n) = run.parse::<i64>() {
        return Some(Value::Int64(n));
    }
    if let Ok(n) = run.parse::<u64>() {
        return Some(Value::UInt64(n));
    }
    run.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Value::Double)
}
