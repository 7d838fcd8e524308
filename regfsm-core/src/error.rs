//! Error types for the automaton compiler
//!
//! This module provides error handling using the `thiserror` crate.
//! Errors are categorized by their source: tokenizing, class resolution,
//! automaton construction, or matcher input.

use thiserror::Error;

/// The main error type for the automaton compiler
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegexError {
    /// Errors that occur during tokenization
    #[error("syntax error at position {position}: {kind}")]
    Syntax {
        /// Position in the pattern where the error occurred
        position: usize,
        /// The specific kind of syntax error
        kind: SyntaxErrorKind,
    },

    /// A bracket token that is not of the shape `[...]`
    #[error("format error: {0}")]
    Format(String),

    /// A token outside the supported grammar
    #[error("unsupported token '{0}'")]
    UnsupportedToken(char),

    /// Matcher input that is not text
    #[error("input is not valid UTF-8: {0}")]
    Input(#[from] std::str::Utf8Error),
}

/// Specific kinds of syntax errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    /// A `[` without a matching `]`
    #[error("unterminated character class")]
    UnterminatedClass,
}

/// Result type alias for automaton operations
pub type Result<T> = std::result::Result<T, RegexError>;
