//! Whole-string matching engine
//!
//! This module wraps a compiled [`Nfa`] in [`Regex`] and simulates it
//! directly: the set of active states is advanced one character at a time
//! and the input is accepted if an accepting state survives to the end.

use crate::error::Result;
use crate::lexer::{Token, tokenize};
use crate::nfa::{Nfa, StateId};
use log::{debug, trace};

/// A compiled pattern
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    tokens: Vec<Token>,
    nfa: Nfa,
}

impl Regex {
    /// Compile a pattern
    pub fn new(pattern: &str) -> Result<Self> {
        let tokens = tokenize(pattern)?;
        let nfa = Nfa::from_tokens(&tokens)?;
        debug!("compiled `{}` into {} states", pattern, nfa.len());
        Ok(Regex {
            pattern: pattern.to_string(),
            tokens,
            nfa,
        })
    }

    /// The source pattern
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The tokens the pattern was built from
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The underlying automaton
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// Check if the pattern matches the whole input
    pub fn is_match(&self, input: &str) -> bool {
        NfaSimulator::new(&self.nfa).run(input)
    }

    /// Check a byte string, which must be valid UTF-8
    pub fn is_match_bytes(&self, input: &[u8]) -> Result<bool> {
        let text = std::str::from_utf8(input)?;
        Ok(self.is_match(text))
    }

    /// Render the automaton as a Graphviz digraph
    pub fn to_dot(&self) -> String {
        crate::dot::to_dot(&self.nfa)
    }
}

/// Active-state simulation of an NFA
struct NfaSimulator<'a> {
    nfa: &'a Nfa,
    /// Membership flags for `next`, indexed by state ID
    seen: Vec<bool>,
}

impl<'a> NfaSimulator<'a> {
    fn new(nfa: &'a Nfa) -> Self {
        NfaSimulator {
            nfa,
            seen: vec![false; nfa.len()],
        }
    }

    /// Advance every active state over `c`
    fn step(&mut self, active: &[StateId], c: char) -> Vec<StateId> {
        let mut next = Vec::new();

        for &state in active {
            for &target in self.nfa.successors(state) {
                if !self.seen[target] && self.nfa.state(target).accepts(c) {
                    self.seen[target] = true;
                    next.push(target);
                }
            }
        }

        for &state in &next {
            self.seen[state] = false;
        }
        next
    }

    fn run(&mut self, input: &str) -> bool {
        let mut active = vec![self.nfa.start()];

        for (pos, c) in input.chars().enumerate() {
            active = self.step(&active, c);
            trace!("after {:?} at {}: {} active", c, pos, active.len());

            if active.is_empty() {
                return false;
            }
        }

        active
            .iter()
            .any(|&state| self.nfa.state(state).is_accepting())
    }
}
