//! Graphviz DOT export
//!
//! States are visited breadth-first from the start state and numbered in
//! discovery order, so the output is stable for a given pattern.

use crate::nfa::{Nfa, StateId, StateKind};
use std::collections::{HashMap, VecDeque};
use std::fmt::Write;

/// Options for [`to_dot_with`]
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Name of the digraph
    pub name: String,
    /// Emit `rankdir=LR` so the graph reads left to right
    pub left_to_right: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            name: "FSM".to_string(),
            left_to_right: false,
        }
    }
}

/// Escape a label for use inside a double-quoted DOT string
fn escape(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => out.extend(c.escape_debug()),
            c => out.push(c),
        }
    }
    out
}

/// Node label naming the kind of a state
fn node_label(kind: &StateKind) -> String {
    match kind {
        StateKind::Start => "Start".to_string(),
        StateKind::Literal(c) => format!("Literal('{}')", c),
        StateKind::Wildcard => "Wildcard".to_string(),
        StateKind::Class(class) => format!("Class('{}')", class.source()),
    }
}

/// Edge label describing what a transition into `kind` consumes
fn edge_label(kind: &StateKind) -> String {
    match kind {
        StateKind::Literal(c) => format!("If({})", c),
        StateKind::Class(class) => format!("If({})", class.source()),
        StateKind::Wildcard => "Any()".to_string(),
        // Only a leading quantifier loops back here; it never fires.
        StateKind::Start => "None()".to_string(),
    }
}

/// Render an NFA as a Graphviz digraph with default options
pub fn to_dot(nfa: &Nfa) -> String {
    to_dot_with(nfa, &DotOptions::default())
}

/// Render an NFA as a Graphviz digraph
pub fn to_dot_with(nfa: &Nfa, options: &DotOptions) -> String {
    let mut ids: HashMap<StateId, usize> = HashMap::new();
    let mut visited = vec![false; nfa.len()];
    let mut queue = VecDeque::from([nfa.start()]);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "digraph {} {{", escape(&options.name));
    if options.left_to_right {
        let _ = writeln!(out, "rankdir=LR;");
    }
    ids.insert(nfa.start(), 0);

    while let Some(id) = queue.pop_front() {
        if visited[id] {
            continue;
        }
        visited[id] = true;

        let state = nfa.state(id);
        let node = ids[&id];
        let label = escape(&node_label(state.kind()));
        if state.is_accepting() {
            let _ = writeln!(out, "node{} [label=\"{}\", peripheries=2];", node, label);
        } else {
            let _ = writeln!(out, "node{} [label=\"{}\"];", node, label);
        }

        for &target in state.next() {
            let next_id = ids.len();
            let target_node = *ids.entry(target).or_insert(next_id);
            queue.push_back(target);

            let label = escape(&edge_label(nfa.state(target).kind()));
            let _ = writeln!(
                out,
                "node{} -> node{} [label=\"{}\"];",
                node, target_node, label
            );
        }
    }

    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Regex;

    fn dot(pattern: &str) -> String {
        Regex::new(pattern).unwrap().to_dot()
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(
            dot(""),
            "digraph FSM {\nnode0 [label=\"Start\", peripheries=2];\n}"
        );
    }

    #[test]
    fn test_literal_chain() {
        let expected = "digraph FSM {\n\
            node0 [label=\"Start\"];\n\
            node0 -> node1 [label=\"If(a)\"];\n\
            node1 [label=\"Literal('a')\"];\n\
            node1 -> node2 [label=\"If(b)\"];\n\
            node2 [label=\"Literal('b')\", peripheries=2];\n\
            }";
        assert_eq!(dot("ab"), expected);
    }

    #[test]
    fn test_self_loop_is_emitted_once() {
        let expected = "digraph FSM {\n\
            node0 [label=\"Start\"];\n\
            node0 -> node1 [label=\"Any()\"];\n\
            node1 [label=\"Wildcard\", peripheries=2];\n\
            node1 -> node1 [label=\"Any()\"];\n\
            }";
        assert_eq!(dot(".+"), expected);
    }

    #[test]
    fn test_class_labels() {
        let out = dot("[^a-c]");
        assert!(out.contains("node0 -> node1 [label=\"If([^a-c])\"];"));
        assert!(out.contains("node1 [label=\"Class('[^a-c]')\", peripheries=2];"));
    }

    #[test]
    fn test_breadth_first_numbering() {
        // Start fans out to a and b; both are numbered before c.
        let out = dot("a?bc");
        assert!(out.contains("node0 -> node1 [label=\"If(a)\"];"));
        assert!(out.contains("node0 -> node2 [label=\"If(b)\"];"));
        assert!(out.contains("node1 -> node2 [label=\"If(b)\"];"));
        assert!(out.contains("node2 -> node3 [label=\"If(c)\"];"));
        assert_eq!(out.matches("[label=\"Literal('b')\"]").count(), 1);
    }

    #[test]
    fn test_quotes_are_escaped() {
        let out = dot("\"");
        assert!(out.contains("node0 -> node1 [label=\"If(\\\")\"];"));
        assert!(out.contains("node1 [label=\"Literal('\\\"')\", peripheries=2];"));
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let out = dot("\t\r\x0b\x0c[\n]");
        assert!(out.contains("[label=\"If(\\t)\"];"));
        assert!(out.contains("[label=\"If(\\r)\"];"));
        assert!(out.contains("[label=\"If(\\u{b})\"];"));
        assert!(out.contains("[label=\"If(\\u{c})\"];"));
        assert!(out.contains("[label=\"Literal('\\t')\"];"));
        assert!(out.contains("[label=\"If([\\n])\"];"));
        assert!(!out.contains(['\t', '\r', '\x0b', '\x0c']));
        assert_eq!(out.lines().count(), 13);
    }

    #[test]
    fn test_leading_star_loops_on_start() {
        let out = dot("*a");
        assert!(out.contains("node0 [label=\"Start\"];"));
        assert!(out.contains("node0 -> node0 [label=\"None()\"];"));
        assert!(out.contains("node0 -> node1 [label=\"If(a)\"];"));
    }

    #[test]
    fn test_options() {
        let regex = Regex::new("a").unwrap();
        let options = DotOptions {
            name: "pattern".to_string(),
            left_to_right: true,
        };
        let out = to_dot_with(regex.nfa(), &options);
        assert!(out.starts_with("digraph pattern {\nrankdir=LR;\n"));
        assert!(out.ends_with('}'));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(dot("m*n?o+p?"), dot("m*n?o+p?"));
    }
}
