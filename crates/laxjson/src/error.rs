//! Error types for parsing and top-level classification.
//!
//! Failures are positional: every sub-parser reports the byte offset where it
//! could not proceed, tagged with a [`FailureKind`] naming the construct that
//! rejected the input.

use thiserror::Error;

/// Why a sub-parser stopped. Each variant belongs to exactly one sub-parser.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The dispatcher found no value starting at this byte.
    #[error("unexpected character")]
    UnexpectedChar,

    /// `t`/`f`/`n` did not spell a complete `true`, `false` or `null`.
    #[error("invalid keyword")]
    InvalidKeyword,

    /// A number run hit a character that is neither numeric nor a delimiter.
    #[error("invalid character in number")]
    InvalidNumber,

    /// The number run was scanned but is not an i64, u64 or f64.
    #[error("unconvertible number")]
    UnconvertibleNumber,

    #[error("unterminated string")]
    UnterminatedString,

    /// `\u` was not followed by four hexadecimal digits.
    #[error("bad unicode escape")]
    BadUnicodeEscape,

    /// A comma with no value before it.
    #[error("unexpected comma")]
    UnexpectedComma,

    /// Two array elements without a comma between them.
    #[error("missing comma")]
    MissingComma,

    #[error("unterminated array")]
    UnterminatedArray,

    #[error("expected object key")]
    ExpectedKey,

    #[error("expected ':'")]
    ExpectedColon,

    #[error("expected ',' or '}}'")]
    ExpectedCommaOrEnd,

    #[error("unterminated object")]
    UnterminatedObject,

    /// Nesting exceeded `ParseOptions::max_depth`.
    #[error("nesting too deep")]
    TooDeep,
}

/// A sub-parser failure: where it stopped and which construct refused the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct Failure {
    pub offset: usize,
    pub kind: FailureKind,
}

impl Failure {
    pub(crate) fn new(offset: usize, kind: FailureKind) -> Self {
        Self { offset, kind }
    }
}

/// Errors returned by the top-level [`decode`](crate::decode) helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaxError {
    /// Input ended (only whitespace left) before a value was complete.
    #[error("short read at byte {offset}: {kind}")]
    ShortRead { offset: usize, kind: FailureKind },

    /// Parsing stopped in the middle of the input.
    #[error("parse error at byte {offset}: {kind}")]
    Malformed { offset: usize, kind: FailureKind },

    /// A complete value was parsed but non-whitespace input follows it.
    #[error("trailing data at byte {offset}")]
    TrailingData { offset: usize },

    /// The input is longer than `ParseOptions::max_input_len`.
    #[error("input of {len} bytes exceeds the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },
}

impl LaxError {
    /// Byte offset the error refers to, if it is positional.
    pub fn offset(&self) -> Option<usize> {
        match self {
            LaxError::ShortRead { offset, .. }
            | LaxError::Malformed { offset, .. }
            | LaxError::TrailingData { offset } => Some(*offset),
            LaxError::InputTooLarge { .. } => None,
        }
    }
}

/// Convenience alias used throughout laxjson.
pub type Result<T> = std::result::Result<T, LaxError>;
