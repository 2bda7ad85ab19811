//! Property-based tests for rewriting and interpretation
//!
//! These tests check the invariants that hold for any input:
//! - Expansion is deterministic
//! - Length growth follows directly from the rule shape
//! - Every `F` yields exactly one segment, in order, of the environment's length
//! - Balanced brackets never error

use proptest::prelude::*;
use symbios_plant::{Environment, Grammar, PlantInterpreter};

/// Generate sentences over the turtle alphabet plus a couple of inert symbols
fn sentence_strategy() -> impl Strategy<Value = String> {
    "[F+\\-XA]{0,40}"
}

/// Generate balanced bracketed sentences
fn balanced_strategy() -> impl Strategy<Value = String> {
    let leaf = "[F+\\-X]{0,4}".boxed();
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop::collection::vec(
            prop_oneof![
                inner.clone(),
                inner.prop_map(|s| format!("[{}]", s)),
            ],
            1..4,
        )
        .prop_map(|parts| parts.concat())
    })
}

proptest! {
    #[test]
    fn expansion_is_deterministic(
        axiom in "[FXA+]{1,5}",
        replacement in "[F+\\-\\[\\]X]{0,6}",
        iterations in 0usize..4,
    ) {
        let grammar = Grammar::new(axiom, iterations).with_rule('F', replacement);
        prop_assert_eq!(grammar.expand(), grammar.expand());
        prop_assert_eq!(grammar.clone().expand(), grammar.expand());
    }

    #[test]
    fn expansion_length_follows_rule(
        k in 1usize..6,
        others in 0usize..4,
        iterations in 0usize..5,
    ) {
        // Axiom: one `F` plus `others` inert symbols. Rule: `F` -> `k` copies of `F`.
        let axiom = format!("F{}", "X".repeat(others));
        let grammar = Grammar::new(axiom, iterations).with_rule('F', "F".repeat(k));
        let expected = k.pow(iterations as u32) + others;
        prop_assert_eq!(grammar.expand().len(), expected);
    }

    #[test]
    fn one_segment_per_forward(
        sentence in sentence_strategy(),
        light in 0.0f32..=1.0,
        water in 0.0f32..=1.0,
    ) {
        let env = Environment::new(light, water);
        let segments = PlantInterpreter::default().interpret(&sentence, &env).unwrap();
        let forwards = sentence.chars().filter(|&c| c == 'F').count();
        prop_assert_eq!(segments.len(), forwards);
        for seg in &segments {
            prop_assert!((seg.length() - env.step_length()).abs() < 1e-4);
        }
        // Without branches the path is continuous.
        for pair in segments.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn balanced_sentences_interpret(sentence in balanced_strategy()) {
        let result = PlantInterpreter::default().interpret(&sentence, &Environment::default());
        prop_assert!(result.is_ok(), "{:?} failed: {:?}", sentence, result);
    }

    #[test]
    fn step_length_formula(light in -1.0f32..2.0, water in -1.0f32..2.0) {
        let env = Environment::new(light, water);
        prop_assert_eq!(env.step_length(), light * water * 2.0);
    }
}
