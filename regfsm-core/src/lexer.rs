//! Lexer for tokenizing patterns
//!
//! This module splits a pattern string into tokens. A bracket expression
//! is kept whole as a single [`Token::Class`] so the builder never sees
//! its inner characters.

use crate::error::{RegexError, Result, SyntaxErrorKind};
use std::fmt;
use std::str::Chars;

/// A token in a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal character
    Literal(char),
    /// Dot `.` (any character)
    Dot,
    /// A whole bracket expression, brackets included (e.g. `[^a-z]`)
    Class(String),
    /// Star `*` (zero or more)
    Star,
    /// Plus `+` (one or more)
    Plus,
    /// Question `?` (optional)
    Question,
}

impl Token {
    /// Whether this token is a postfix quantifier
    pub fn is_quantifier(&self) -> bool {
        matches!(self, Token::Star | Token::Plus | Token::Question)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(c) => write!(f, "literal `{}`", c.escape_debug()),
            Token::Dot => write!(f, "`.`"),
            Token::Class(expr) => write!(f, "class `{}`", expr),
            Token::Star => write!(f, "`*`"),
            Token::Plus => write!(f, "`+`"),
            Token::Question => write!(f, "`?`"),
        }
    }
}

/// Lexer for tokenizing patterns
pub struct Lexer<'a> {
    chars: Chars<'a>,
    /// Character index of the next character to be read
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given pattern
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars(),
            position: 0,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position += 1;
        Some(c)
    }

    /// Read the rest of a bracket expression (the `[` is already consumed)
    fn read_class(&mut self, start: usize) -> Result<Token> {
        let mut expr = String::from("[");
        loop {
            match self.advance() {
                Some(']') => {
                    expr.push(']');
                    return Ok(Token::Class(expr));
                }
                Some(c) => expr.push(c),
                None => {
                    return Err(RegexError::Syntax {
                        position: start,
                        kind: SyntaxErrorKind::UnterminatedClass,
                    });
                }
            }
        }
    }

    /// Get the next token, or `None` at the end of the pattern
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let start = self.position;
        let Some(c) = self.advance() else {
            return Ok(None);
        };

        let token = match c {
            '[' => self.read_class(start)?,
            '.' => Token::Dot,
            '*' => Token::Star,
            '+' => Token::Plus,
            '?' => Token::Question,
            c => Token::Literal(c),
        };
        Ok(Some(token))
    }

    /// Tokenize the entire pattern
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Tokenize a pattern string
pub fn tokenize(pattern: &str) -> Result<Vec<Token>> {
    Lexer::new(pattern).tokenize()
}
