//! Error types for tokenizing, building and compiling literal expressions.

use std::num::ParseFloatError;
use thiserror::Error;

/// Errors that can occur while compiling a literal expression.
///
/// Every stage raises one of these immediately; nothing is recovered or
/// translated on the way out of [`compile`](crate::compile).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// The tokenizer hit a character outside every lexical class.
    #[error("Unexpected next character: '{ch}' at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },

    /// Malformed exponent or sign placement inside a number.
    #[error("invalid number: {text}")]
    InvalidNumber { text: String },

    /// The scanned number text does not convert to a float (e.g. `1.2.3`).
    #[error("invalid number format '{text}': {source}")]
    NumberFormat {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// End of input reached inside a string literal.
    #[error("unclosed string starting at offset {offset}")]
    UnclosedString { offset: usize },

    /// `\u` not followed by exactly four hex digits, or an unpaired surrogate.
    #[error("invalid unicode escape '\\u{escape}' at offset {offset}")]
    InvalidUnicodeEscape { offset: usize, escape: String },

    /// A string opened with one quote style was ended with the other.
    #[error("mismatched quotes: string opened with {open} at offset {offset} but ended with {close}")]
    MismatchedQuote { open: char, close: char, offset: usize },

    /// The AST builder expected a token it did not find.
    #[error("parse error: expecting {expected}, found {found}")]
    Parse { expected: String, found: String },

    /// Array nesting deeper than the configured bound.
    #[error("array nesting exceeds the recursion limit of {limit}")]
    RecursionLimit { limit: usize },

    /// A value with no literal-language source form (source printer only).
    #[error("value has no literal source form: {0}")]
    Unrepresentable(String),
}

/// Convenience alias used throughout litexpr-core.
pub type Result<T> = std::result::Result<T, CompileError>;
