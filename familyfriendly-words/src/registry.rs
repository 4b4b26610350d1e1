// familyfriendly-words/src/registry.rs
//! Language dictionaries and the registry that serves them.
//!
//! A [`Dictionary`] is an insertion-ordered set of entries. Blank entries
//! never make it in, which keeps the matching engine from compiling a
//! pattern that would match everywhere.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use log::debug;

use crate::language::Language;

/// An ordered, duplicate-free set of bad words for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the embedded word list format: one entry per line, surrounding
    /// whitespace trimmed, blank lines and `#` comment lines skipped.
    pub fn from_lines(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'))
            .collect()
    }

    /// Adds `word` unless it is blank or already present. Returns whether it was added.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_string());
        self.entries.push(word.to_string());
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for word in iter {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }
}

/// Maps each [`Language`] to its [`Dictionary`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    dictionaries: HashMap<Language, Dictionary>,
}

lazy_static! {
    static ref EMPTY: Dictionary = Dictionary::new();

    /// Registry over the word lists compiled into the crate.
    static ref EMBEDDED: Registry = {
        let mut registry = Registry::new();
        for language in Language::ALL {
            registry.insert(language, Dictionary::from_lines(embedded_list(language)));
        }
        registry
    };
}

fn embedded_list(language: Language) -> &'static str {
    match language {
        Language::English => include_str!("../defaults/en.txt"),
        Language::Arabic => include_str!("../defaults/ar.txt"),
        Language::Chinese => include_str!("../defaults/zh.txt"),
        Language::French => include_str!("../defaults/fr.txt"),
        Language::German => include_str!("../defaults/de.txt"),
        Language::Indonesian => include_str!("../defaults/id.txt"),
        Language::Italian => include_str!("../defaults/it.txt"),
        Language::Spanish => include_str!("../defaults/es.txt"),
    }
}

impl Registry {
    /// An empty registry. Every lookup yields an empty dictionary until populated.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared registry built from the embedded default word lists.
    pub fn embedded() -> &'static Registry {
        &*EMBEDDED
    }

    /// Builder-style helper for assembling a registry from word slices.
    pub fn with_language<I, S>(mut self, language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(language, words.into_iter().collect());
        self
    }

    /// Sets the dictionary for `language`, replacing any previous one.
    pub fn insert(&mut self, language: Language, dictionary: Dictionary) {
        debug!("Registered {} entries for language '{}'.", dictionary.len(), language);
        self.dictionaries.insert(language, dictionary);
    }

    pub fn get(&self, language: Language) -> &Dictionary {
        self.dictionaries.get(&language).unwrap_or(&*EMPTY)
    }
}
