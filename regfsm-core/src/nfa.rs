//! NFA (Nondeterministic Finite Automaton) state model and construction
//!
//! States live in a single arena owned by [`Nfa`] and refer to each other
//! by [`StateId`], so the self-loops produced by `*` and `+` need no
//! shared ownership. A state carries the predicate for the character that
//! leads *into* it; edges are plain destination ids.
//!
//! The [`Builder`] makes one pass over the tokens without epsilon
//! transitions. It keeps the set of states that still need an edge to the
//! next atom, which quantifiers widen (`*`, `?`) or collapse (`+`).

use crate::class::CharClass;
use crate::error::{RegexError, Result};
use crate::lexer::Token;
use log::{debug, trace};
use std::collections::HashSet;
use std::fmt;

/// An NFA state ID
pub type StateId = usize;

/// The kind of a state, which decides the characters it accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateKind {
    /// The unique entry state; accepts no character
    Start,
    /// Accepts exactly one character
    Literal(char),
    /// Accepts any character (dot)
    Wildcard,
    /// Accepts any character of a bracket class
    Class(CharClass),
}

impl StateKind {
    /// Check whether a transition into this state may consume `c`
    pub fn accepts(&self, c: char) -> bool {
        match self {
            StateKind::Start => false,
            StateKind::Literal(expected) => *expected == c,
            StateKind::Wildcard => true,
            StateKind::Class(class) => class.contains(c),
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Start => write!(f, "Start"),
            StateKind::Literal(c) => write!(f, "Literal('{}')", c.escape_debug()),
            StateKind::Wildcard => write!(f, "Wildcard"),
            StateKind::Class(class) => write!(f, "Class('{}')", class.source()),
        }
    }
}

/// An NFA state
#[derive(Debug, Clone)]
pub struct State {
    kind: StateKind,
    /// Destination states, in insertion order
    next: Vec<StateId>,
    is_accepting: bool,
}

impl State {
    fn new(kind: StateKind) -> Self {
        State {
            kind,
            next: Vec::new(),
            is_accepting: false,
        }
    }

    pub fn kind(&self) -> &StateKind {
        &self.kind
    }

    /// Outgoing edges of this state
    pub fn next(&self) -> &[StateId] {
        &self.next
    }

    /// Whether this is an accepting state
    pub fn is_accepting(&self) -> bool {
        self.is_accepting
    }

    /// Check whether a transition into this state may consume `c`
    pub fn accepts(&self, c: char) -> bool {
        self.kind.accepts(c)
    }
}

/// An NFA (Nondeterministic Finite Automaton)
///
/// Immutable once built; the start state is always id 0.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<State>,
}

impl Nfa {
    /// The start state
    pub const START: StateId = 0;

    /// Build an NFA from a token sequence
    pub fn from_tokens(tokens: &[Token]) -> Result<Self> {
        Builder::new().build(tokens)
    }

    /// The start state ID
    pub fn start(&self) -> StateId {
        Self::START
    }

    /// Number of states in the NFA
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: the start state is always present
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get a state by ID
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// All states, indexed by ID
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Destination states of `id`
    pub fn successors(&self, id: StateId) -> &[StateId] {
        &self.states[id].next
    }

    /// IDs of all accepting states, in ascending order
    pub fn accepting_states(&self) -> Vec<StateId> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_accepting)
            .map(|(id, _)| id)
            .collect()
    }

    /// Whether the automaton accepts the empty string
    pub fn accepts_empty(&self) -> bool {
        self.states[Self::START].is_accepting
    }
}

/// Adjacency listing, one line per reachable state in depth-first order
impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Self::START];
        let mut visited = HashSet::new();
        let mut first = true;

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let state = &self.states[id];

            if !first {
                writeln!(f)?;
            }
            first = false;

            write!(f, "{}", state.kind)?;
            if state.is_accepting {
                write!(f, " (accept)")?;
            }
            write!(f, " : ")?;

            if state.next.is_empty() {
                write!(f, "None")?;
            } else {
                for (i, &target) in state.next.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self.states[target].kind)?;
                    stack.push(target);
                }
            }
        }

        Ok(())
    }
}

/// One-pass automaton builder
///
/// `tails` holds the states wired into `last` plus whatever optional or
/// repeating quantifiers added after it. While `must_chain` is true the
/// next atom is wired from `last` alone, otherwise from all of `tails`.
#[derive(Debug)]
pub struct Builder {
    states: Vec<State>,
    tails: Vec<StateId>,
    last: StateId,
    must_chain: bool,
}

impl Builder {
    /// Create a builder holding only the start state
    pub fn new() -> Self {
        Builder {
            states: vec![State::new(StateKind::Start)],
            tails: vec![Nfa::START],
            last: Nfa::START,
            must_chain: true,
        }
    }

    /// Allocate a new state and return its ID
    fn new_state(&mut self, kind: StateKind) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(kind));
        id
    }

    /// Add an edge between states, ignoring exact duplicates
    fn add_edge(&mut self, from: StateId, to: StateId) {
        let next = &mut self.states[from].next;
        if !next.contains(&to) {
            next.push(to);
        }
    }

    fn add_tail(&mut self, id: StateId) {
        if !self.tails.contains(&id) {
            self.tails.push(id);
        }
    }

    /// The states the next atom has to be wired from
    fn fringe(&self) -> Vec<StateId> {
        if self.must_chain {
            vec![self.last]
        } else {
            self.tails.clone()
        }
    }

    /// Append an atom state and wire the fringe into it
    fn push_atom(&mut self, kind: StateKind) {
        let sources = self.fringe();
        let id = self.new_state(kind);
        for &source in &sources {
            self.add_edge(source, id);
        }
        self.tails = sources;
        self.last = id;
        self.must_chain = true;
    }

    /// `*`: loop on `last` and allow skipping it
    ///
    /// A leading quantifier applies to the start state, whose loop never
    /// fires since the start state accepts no character.
    fn push_star(&mut self) {
        let last = self.last;
        self.add_edge(last, last);
        self.add_tail(last);
        self.must_chain = false;
    }

    /// `+`: loop on `last`; at least one pass is required, so nothing
    /// before it may be skipped to
    fn push_plus(&mut self) {
        let last = self.last;
        self.add_edge(last, last);
        self.tails = vec![last];
        self.must_chain = false;
    }

    /// `?`: allow skipping `last`
    fn push_question(&mut self) {
        let last = self.last;
        self.add_tail(last);
        self.must_chain = false;
    }

    /// Feed one token to the builder
    pub fn push(&mut self, token: &Token, index: usize) -> Result<()> {
        match token {
            Token::Literal(c) if c.is_ascii() => self.push_atom(StateKind::Literal(*c)),
            Token::Literal(c) => return Err(RegexError::UnsupportedToken(*c)),
            Token::Dot => self.push_atom(StateKind::Wildcard),
            Token::Class(expr) => self.push_atom(StateKind::Class(CharClass::parse(expr)?)),
            Token::Star => self.push_star(),
            Token::Plus => self.push_plus(),
            Token::Question => self.push_question(),
        }

        trace!(
            "token {} {}: last={}, tails={:?}, must_chain={}",
            index, token, self.last, self.tails, self.must_chain
        );
        Ok(())
    }

    /// Mark the fringe accepting and return the finished NFA
    pub fn finish(mut self) -> Nfa {
        for id in self.fringe() {
            self.states[id].is_accepting = true;
        }
        Nfa {
            states: self.states,
        }
    }

    /// Build an NFA from a whole token sequence
    pub fn build(mut self, tokens: &[Token]) -> Result<Nfa> {
        for (index, token) in tokens.iter().enumerate() {
            self.push(token, index)?;
        }
        let nfa = self.finish();
        debug!(
            "built NFA: {} tokens, {} states, accepting {:?}",
            tokens.len(),
            nfa.len(),
            nfa.accepting_states()
        );
        Ok(nfa)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
