// familyfriendly-core/src/bad_word_match.rs
//! Data structures for reporting where bad words were found.

use serde::{Deserialize, Serialize};

/// A single occurrence of a working-dictionary entry in an input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadWordMatch {
    /// The dictionary entry whose pattern matched.
    pub word: String,
    /// The input text that matched, substitutions and case as written.
    pub matched_text: String,
    /// Byte offset of the match in the input.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// Character offset of the match in the input.
    pub char_start: usize,
}

/// Occurrences of a single entry, as produced by [`summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadWordSummary {
    pub word: String,
    pub occurrences: usize,
    pub matched_texts: Vec<String>,
}

/// Groups matches by entry, in order of each entry's first occurrence.
pub fn summarize(matches: &[BadWordMatch]) -> Vec<BadWordSummary> {
    let mut summary: Vec<BadWordSummary> = Vec::new();
    for m in matches {
        match summary.iter_mut().find(|s| s.word == m.word) {
            Some(item) => {
                item.occurrences += 1;
                item.matched_texts.push(m.matched_text.clone());
            }
            None => summary.push(BadWordSummary {
                word: m.word.clone(),
                occurrences: 1,
                matched_texts: vec![m.matched_text.clone()],
            }),
        }
    }
    summary
}

/// Stand-in for matched text in log lines, so logs never echo the words themselves.
pub(crate) fn obscure_for_log(s: &str) -> String {
    format!("[{} chars]", s.chars().count())
}
