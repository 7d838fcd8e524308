//! regfsm Core Library
//!
//! Compiles a small regex dialect (literals, `.`, bracket classes and the
//! postfix quantifiers `*`, `+`, `?`) into an NFA and checks whether whole
//! strings are accepted by it.
//!
//! ```
//! use regfsm_core::compile;
//!
//! let regex = compile("a[^bc]d*e").unwrap();
//! assert!(regex.is_match("afde"));
//! assert!(!regex.is_match("abde"));
//! ```

pub mod class;
pub mod dot;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod nfa;

pub use class::{CharClass, CharSet, ClassItem, printable, resolve_class};
pub use dot::{DotOptions, to_dot, to_dot_with};
pub use engine::Regex;
pub use error::{RegexError, Result, SyntaxErrorKind};
pub use lexer::{Lexer, Token, tokenize};
pub use nfa::{Builder, Nfa, State, StateId, StateKind};

/// Compile a pattern into a [`Regex`]
///
/// This is the main entry point for compiling patterns.
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
}
