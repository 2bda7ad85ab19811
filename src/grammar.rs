//! Deterministic, context-free string rewriting.
//!
//! A [`Grammar`] holds an axiom, a table of single-symbol production rules and an
//! iteration count. Every round rewrites all symbols of the current sentence at
//! once; symbols without a rule are copied through unchanged.

use crate::error::{PlantError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An immutable L-System definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    axiom: String,
    rules: BTreeMap<char, String>,
    iterations: usize,
}

impl Grammar {
    /// Creates a grammar with no rules. Add productions with [`with_rule`](Self::with_rule).
    pub fn new(axiom: impl Into<String>, iterations: usize) -> Self {
        Self {
            axiom: axiom.into(),
            rules: BTreeMap::new(),
            iterations,
        }
    }

    /// The branching weed: `F → F[+F]F[-F]F`, five rounds from a single `F`.
    pub fn plant() -> Self {
        Self::new("F", 5).with_rule('F', "F[+F]F[-F]F")
    }

    /// Adds (or replaces) the production for `symbol` (builder pattern).
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.rules.insert(symbol, replacement.into());
        self
    }

    /// Adds every production yielded by `rules`; later entries win on duplicates.
    pub fn with_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        self.rules
            .extend(rules.into_iter().map(|(sym, rep)| (sym, rep.into())));
        self
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn rules(&self) -> &BTreeMap<char, String> {
        &self.rules
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The replacement registered for `symbol`, if any.
    pub fn rule(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Applies one round of simultaneous substitution to `sentence`.
    pub fn rewrite(&self, sentence: &str) -> String {
        let mut next = String::with_capacity(sentence.len());
        for ch in sentence.chars() {
            match self.rules.get(&ch) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(ch),
            }
        }
        next
    }

    /// Rewrites the axiom `iterations` times and returns the resulting sentence.
    ///
    /// Zero iterations yields the axiom unchanged. Sentence length can grow
    /// exponentially; use [`try_expand`](Self::try_expand) to bound it.
    pub fn expand(&self) -> String {
        let mut current = self.axiom.clone();
        for iteration in 1..=self.iterations {
            current = self.rewrite(&current);
            tracing::trace!(iteration, len = current.chars().count(), "rewrite round");
        }
        tracing::debug!(
            iterations = self.iterations,
            len = current.chars().count(),
            "expanded sentence"
        );
        current
    }

    /// Like [`expand`](Self::expand), but fails as soon as a round produces more
    /// than `max_len` symbols.
    pub fn try_expand(&self, max_len: usize) -> Result<String> {
        let mut current = self.axiom.clone();
        if current.chars().count() > max_len {
            return Err(PlantError::SentenceTooLong {
                iteration: 0,
                len: current.chars().count(),
                max: max_len,
            });
        }
        for iteration in 1..=self.iterations {
            current = self.rewrite(&current);
            let len = current.chars().count();
            tracing::trace!(iteration, len, "rewrite round");
            if len > max_len {
                return Err(PlantError::SentenceTooLong {
                    iteration,
                    len,
                    max: max_len,
                });
            }
        }
        tracing::debug!(
            iterations = self.iterations,
            len = current.chars().count(),
            "expanded sentence"
        );
        Ok(current)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::plant()
    }
}
