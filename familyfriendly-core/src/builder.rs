// familyfriendly-core/src/builder.rs
//! Composes the working dictionary for a filter.
//!
//! The selected language dictionaries are concatenated in [`Language::ALL`]
//! order, caller extras are appended and exclusions dropped, then one *stub*
//! per entry is derived (see [`stub`]) and the whole list is sorted longest
//! first. Longest-first is what lets a long entry be masked before any
//! shorter entry contained in it gets a chance to match.
//!
//! [`Language::ALL`]: familyfriendly_words::Language::ALL

use std::cmp::Reverse;
use std::collections::HashSet;

use familyfriendly_words::Registry;
use log::debug;

use crate::config::FilterConfig;

/// Keeps only the first occurrence of each character, reading left to right.
///
/// `"aaashooole"` becomes `"ashole"`, `"banana"` becomes `"ban"`.
pub fn stub(word: &str) -> String {
    let mut seen = HashSet::new();
    word.chars().filter(|c| seen.insert(*c)).collect()
}

/// Builds the ordered, distinct, longest-first entry list described by `config`.
pub fn build_working_dictionary(config: &FilterConfig, registry: &Registry) -> Vec<String> {
    let excluded: HashSet<&str> = config.excluded_words.iter().map(String::as_str).collect();

    let mut words: Vec<String> = Vec::new();
    let mut present: HashSet<String> = HashSet::new();

    let selected = config
        .selected_languages()
        .into_iter()
        .flat_map(|language| registry.get(language).iter());
    let extras = config.extra_words.iter().map(String::as_str);

    for word in selected.chain(extras) {
        if word.is_empty() || excluded.contains(word) || present.contains(word) {
            continue;
        }
        present.insert(word.to_string());
        words.push(word.to_string());
    }
    let primary = words.len();

    let mut derived: Vec<String> = Vec::new();
    for word in &words {
        let candidate = stub(word);
        if candidate == *word
            || candidate.chars().count() < config.min_stub_length
            || excluded.contains(candidate.as_str())
            || present.contains(&candidate)
        {
            continue;
        }
        present.insert(candidate.clone());
        derived.push(candidate);
    }
    let derived_count = derived.len();
    words.extend(derived);

    // sort_by_key is stable, so equal lengths keep insertion order.
    words.sort_by_key(|w| Reverse(w.chars().count()));

    debug!(
        "Working dictionary built: {} primary, {} derived, {} total.",
        primary,
        derived_count,
        words.len()
    );
    words
}
