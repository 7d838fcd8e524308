//! Bracket character classes
//!
//! A bracket token such as `[a-z]` or `[^aeiou]` is resolved once, at
//! compile time, into a finite sorted symbol set. Negation is taken
//! relative to the printable universe returned by [`printable`].

use crate::error::{RegexError, Result};
use log::warn;
use std::collections::BTreeSet;

/// A resolved set of symbols
pub type CharSet = BTreeSet<char>;

/// Whitespace characters that belong to the printable universe
const PRINTABLE_WHITESPACE: [char; 5] = ['\t', '\n', '\r', '\x0b', '\x0c'];

/// The 100 printable characters: `0x20..=0x7E` plus tab, newline,
/// carriage return, vertical tab and form feed.
pub fn printable() -> impl Iterator<Item = char> {
    (' '..='~').chain(PRINTABLE_WHITESPACE)
}

/// An item in a bracket expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    /// A single character
    Char(char),
    /// An inclusive character range (e.g., a-z)
    Range(char, char),
}

impl ClassItem {
    fn extend_into(self, set: &mut CharSet) {
        match self {
            ClassItem::Char(c) => {
                set.insert(c);
            }
            ClassItem::Range(start, end) => {
                if start > end {
                    warn!("reversed range `{}-{}` matches no characters", start, end);
                }
                set.extend(start..=end);
            }
        }
    }
}

/// Split bracket content (without brackets or `^`) into items
///
/// A character, a `-` and one more character form a range; anything
/// else is a single character, so a leading or trailing `-` is literal.
pub fn parse_items(content: &str) -> Vec<ClassItem> {
    let chars: Vec<char> = content.chars().collect();
    let mut items = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if i + 2 < chars.len() && chars[i + 1] == '-' {
            items.push(ClassItem::Range(chars[i], chars[i + 2]));
            i += 3;
        } else {
            items.push(ClassItem::Char(chars[i]));
            i += 1;
        }
    }

    items
}

/// A resolved bracket character class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    /// The bracket expression as written, brackets included
    source: String,
    negated: bool,
    symbols: CharSet,
}

impl CharClass {
    /// Resolve a bracket token of the shape `[` + content + `]`
    pub fn parse(token: &str) -> Result<Self> {
        let content = token
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| {
                RegexError::Format(format!("expected `[...]`, found `{}`", token))
            })?;

        let (negated, content) = match content.strip_prefix('^') {
            Some(rest) => (true, rest),
            None => (false, content),
        };

        let mut explicit = CharSet::new();
        for item in parse_items(content) {
            item.extend_into(&mut explicit);
        }

        let symbols = if negated {
            printable().filter(|c| !explicit.contains(c)).collect()
        } else {
            explicit
        };

        Ok(CharClass {
            source: token.to_string(),
            negated,
            symbols,
        })
    }

    /// Check whether `c` is in the class
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// The bracket expression as written
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The resolved symbols, in code point order
    pub fn symbols(&self) -> &CharSet {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Resolve a bracket token into the set of characters it accepts
pub fn resolve_class(token: &str) -> Result<CharSet> {
    CharClass::parse(token).map(|class| class.symbols)
}
