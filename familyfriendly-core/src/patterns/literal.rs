//! Plain substring scanning over every entry at once.
//!
//! `contains_bad_word` is a literal test: no substitutions, no word
//! boundaries. A double-array Aho-Corasick automaton answers it in one pass
//! over the input instead of one pass per entry.

use std::collections::HashSet;
use std::fmt;

use daachorse::DoubleArrayAhoCorasick;
use log::{debug, warn};

use super::compiler::CompiledWord;

/// Multi-pattern literal matcher over the distinct entries of a working dictionary.
pub struct LiteralScanner {
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
}

impl fmt::Debug for LiteralScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiteralScanner")
            .field(
                "automaton",
                &self.automaton.as_ref().map(|_| "<DoubleArrayAhoCorasick>"),
            )
            .finish()
    }
}

impl LiteralScanner {
    /// Builds the automaton for `words`.
    ///
    /// With no words, or if the automaton cannot be built, the scanner keeps no
    /// automaton and [`LiteralScanner::contains_any`] scans entry by entry.
    pub fn build(words: &[CompiledWord]) -> Self {
        let mut seen = HashSet::new();
        let patterns: Vec<&str> = words
            .iter()
            .map(|w| w.word.as_str())
            .filter(|w| !w.is_empty() && seen.insert(*w))
            .collect();

        if patterns.is_empty() {
            return Self { automaton: None };
        }

        let count = patterns.len();
        match DoubleArrayAhoCorasick::<usize>::new(patterns) {
            Ok(automaton) => {
                debug!("Built literal automaton over {} entries.", count);
                Self {
                    automaton: Some(automaton),
                }
            }
            Err(e) => {
                warn!(
                    "Failed to build literal automaton ({}); falling back to per-entry scan.",
                    e
                );
                Self { automaton: None }
            }
        }
    }

    /// Whether any entry of `words` occurs in `text` as a plain substring.
    ///
    /// `words` must be the slice the scanner was built from.
    pub fn contains_any(&self, text: &str, words: &[CompiledWord]) -> bool {
        match &self.automaton {
            Some(automaton) => automaton.find_iter(text).next().is_some(),
            None => words.iter().any(|w| text.contains(w.word.as_str())),
        }
    }
}
