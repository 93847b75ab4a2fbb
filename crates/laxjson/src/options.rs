//! Parser and writer configuration.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Default nesting limit for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What the `null` keyword parses to.
///
/// The value model has no dedicated null variant, so the choice is left to the
/// embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullLiteral {
    /// `Bool(false)`, the historical mapping.
    #[default]
    False,
    /// `Invalid`, which the writer emits as `null` again.
    Invalid,
}

impl NullLiteral {
    pub(crate) fn value(self) -> Value {
        match self {
            NullLiteral::False => Value::Bool(false),
            NullLiteral::Invalid => Value::Invalid,
        }
    }
}

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum nesting of arrays and objects.
    pub max_depth: usize,
    /// Inputs longer than this are rejected by `decode` before parsing.
    pub max_input_len: Option<usize>,
    pub null_literal: NullLiteral,
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_input_len(mut self, max_input_len: Option<usize>) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    pub fn with_null_literal(mut self, null_literal: NullLiteral) -> Self {
        self.null_literal = null_literal;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_len: None,
            null_literal: NullLiteral::default(),
        }
    }
}

/// How `Double` values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloatFormat {
    /// C `%g` with six significant digits: `42.5`, `2000`, `1e+20`, `1e-05`.
    #[default]
    General,
    /// Shortest text that parses back to the same double (ECMAScript style).
    Shortest,
}

/// Writer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    pub float_format: FloatFormat,
}

impl WriteOptions {
    pub fn with_float_format(mut self, float_format: FloatFormat) -> Self {
        self.float_format = float_format;
        self
    }
}
