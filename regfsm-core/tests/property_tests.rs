//! Property tests for compilation and matching

use proptest::prelude::*;
use regfsm_core::{Regex, printable, resolve_class};

/// One atom, optionally followed by a quantifier
fn piece() -> impl Strategy<Value = String> {
    let atom = prop_oneof![
        "[a-e]".prop_map(|s| s.to_string()),
        Just(".".to_string()),
        Just("[a-c]".to_string()),
        Just("[^ab]".to_string()),
    ];
    let quantifier = prop_oneof![Just(""), Just("*"), Just("+"), Just("?")];
    (atom, quantifier).prop_map(|(atom, q)| format!("{}{}", atom, q))
}

fn pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(piece(), 0..6).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn compiling_twice_is_deterministic(pattern in pattern(), input in "[a-f]{0,8}") {
        let first = Regex::new(&pattern).unwrap();
        let second = Regex::new(&pattern).unwrap();
        prop_assert_eq!(first.is_match(&input), second.is_match(&input));
        prop_assert_eq!(first.to_dot(), second.to_dot());
    }

    #[test]
    fn empty_match_iff_every_atom_optional(pieces in prop::collection::vec(piece(), 0..6)) {
        let pattern = pieces.concat();
        let all_optional = pieces.iter().all(|p| p.ends_with('*') || p.ends_with('?'));
        let regex = Regex::new(&pattern).unwrap();
        prop_assert_eq!(regex.is_match(""), all_optional);
    }

    #[test]
    fn negated_class_is_complement(content in "[a-z0-9!#%&]{0,6}") {
        let positive = resolve_class(&format!("[{}]", content)).unwrap();
        let negated = resolve_class(&format!("[^{}]", content)).unwrap();
        for c in printable() {
            prop_assert_ne!(positive.contains(&c), negated.contains(&c));
        }
        prop_assert!(negated.iter().all(|c| printable().any(|p| p == *c)));
    }

    #[test]
    fn plus_requires_one_occurrence(c in "[a-z]", n in 0usize..5) {
        let input = c.repeat(n);
        prop_assert_eq!(Regex::new(&format!("{}+", c)).unwrap().is_match(&input), n >= 1);
        let star_pattern = format!("{}*", c);
        prop_assert!(Regex::new(&star_pattern).unwrap().is_match(&input));
        prop_assert_eq!(Regex::new(&format!("{}?", c)).unwrap().is_match(&input), n <= 1);
    }
}
