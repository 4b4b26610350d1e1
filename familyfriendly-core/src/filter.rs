// familyfriendly-core/src/filter.rs
//! The matching engine: detection, masking and replacement of bad words.
//!
//! A [`Filter`] owns its working dictionary as a longest-first list of
//! [`CompiledWord`]s. Masking and replacement walk that list in order and
//! apply each entry's pattern to the running result, so a long entry has
//! already been masked by the time a shorter entry it contains is tried.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use familyfriendly_words::Registry;
use log::{debug, warn};
use regex::NoExpand;

use crate::bad_word_match::{obscure_for_log, BadWordMatch};
use crate::builder::build_working_dictionary;
use crate::config::{FilterConfig, DEFAULT_MASK_CHAR, DEFAULT_REPLACEMENT};
use crate::patterns::compiler::{compile_pattern, CompiledWord};
use crate::patterns::literal::LiteralScanner;

/// Stands in for already-matched text while collecting matches. A non-word
/// character of one byte, so byte offsets stay valid and later patterns see
/// the same boundaries as after masking with a non-word mask.
const SCRATCH_FILL: char = '\0';

/// A profanity filter built from a [`FilterConfig`] and a dictionary [`Registry`].
///
/// Queries take `&self` and may run concurrently; [`Filter::add_words`] and
/// [`Filter::remove_words`] take `&mut self`.
#[derive(Debug)]
pub struct Filter {
    config: FilterConfig,
    words: Vec<CompiledWord>,
    literal: LiteralScanner,
}

impl Default for Filter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Filter {
    /// Builds a filter over the embedded dictionaries. `None` selects every language.
    pub fn new(config: Option<FilterConfig>) -> Self {
        Self::with_registry(config, Registry::embedded())
    }

    /// Builds a filter over caller-supplied dictionaries.
    ///
    /// An empty `mask_char` or `replacement` falls back to its default.
    pub fn with_registry(config: Option<FilterConfig>, registry: &Registry) -> Self {
        let mut config = config.unwrap_or_default();
        if let Err(e) = config.validate() {
            warn!("{}; falling back to defaults for empty fields.", e);
            if config.mask_char.is_empty() {
                config.mask_char = DEFAULT_MASK_CHAR.to_string();
            }
            if config.replacement.is_empty() {
                config.replacement = DEFAULT_REPLACEMENT.to_string();
            }
        }
        let words: Vec<CompiledWord> = build_working_dictionary(&config, registry)
            .iter()
            .filter_map(|word| compile_entry(word))
            .collect();
        let literal = LiteralScanner::build(&words);

        debug!("Filter ready with {} compiled entries.", words.len());
        Self {
            config,
            words,
            literal,
        }
    }

    /// Parses a YAML configuration and builds a filter over the embedded dictionaries.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config = FilterConfig::from_yaml_str(yaml)?;
        Ok(Self::new(Some(config)))
    }

    /// Whether any entry occurs in `text` as a plain, case-sensitive substring.
    ///
    /// Unlike masking, this ignores word boundaries and character
    /// substitutions. Use [`Filter::find_bad_words`] for the pattern-based view.
    pub fn contains_bad_word(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.literal.contains_any(text, &self.words)
    }

    /// Masks every bad word with the configured mask.
    pub fn mask_bad_words(&self, text: &str) -> String {
        self.mask_bad_words_with(text, &self.config.mask_char)
    }

    /// Masks every bad word with `mask` repeated once per character of the
    /// dictionary entry that matched.
    pub fn mask_bad_words_with(&self, text: &str, mask: &str) -> String {
        self.rewrite(text, |compiled| mask.repeat(compiled.char_len))
    }

    /// Replaces every bad word with the configured replacement token.
    pub fn replace_bad_words(&self, text: &str) -> String {
        self.replace_bad_words_with(text, &self.config.replacement)
    }

    /// Replaces every bad word with `replacement`, inserted literally.
    pub fn replace_bad_words_with(&self, text: &str, replacement: &str) -> String {
        self.rewrite(text, |_| replacement.to_string())
    }

    /// Every pattern match in `text`, ordered by position.
    ///
    /// Entries are tried in dictionary order and text already claimed by an
    /// earlier entry is not matched again. For a mask made of non-word
    /// characters (such as the default `*`) this is exactly what
    /// [`Filter::mask_bad_words`] hides; a word-character mask can change the
    /// boundaries later entries see.
    pub fn find_bad_words(&self, text: &str) -> Vec<BadWordMatch> {
        let mut scratch = text.to_string();
        let mut matches = Vec::new();

        for compiled in &self.words {
            let spans: Vec<(usize, usize)> = compiled
                .regex
                .find_iter(&scratch)
                .map(|m| (m.start(), m.end()))
                .collect();
            for (start, end) in spans {
                let matched_text = &text[start..end];
                debug!(
                    "Matched entry {} at byte {}.",
                    obscure_for_log(&compiled.word),
                    start
                );
                matches.push(BadWordMatch {
                    word: compiled.word.clone(),
                    matched_text: matched_text.to_string(),
                    start,
                    end,
                    char_start: text[..start].chars().count(),
                });
                let fill: String = std::iter::repeat(SCRATCH_FILL).take(end - start).collect();
                scratch.replace_range(start..end, &fill);
            }
        }

        matches.sort_by_key(|m| m.start);
        matches
    }

    /// Appends `words` to the working dictionary, after every existing entry.
    ///
    /// The dictionary is not re-sorted, so an added word is tried after all
    /// entries that were present before it. Empty words are ignored.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.words.len();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if let Some(compiled) = compile_entry(word) {
                self.words.push(compiled);
            }
        }
        self.literal = LiteralScanner::build(&self.words);
        debug!("Added {} entries to the filter.", self.words.len() - before);
    }

    /// Removes the first occurrence of each of `words`. Words not present are ignored.
    pub fn remove_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.words.len();
        for word in words {
            let word = word.as_ref();
            if let Some(index) = self.words.iter().position(|c| c.word == word) {
                self.words.remove(index);
            }
        }
        self.literal = LiteralScanner::build(&self.words);
        debug!("Removed {} entries from the filter.", before - self.words.len());
    }

    /// Working-dictionary entries in the order they are applied.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|c| c.word.as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    fn rewrite<F>(&self, text: &str, replacement_for: F) -> String
    where
        F: Fn(&CompiledWord) -> String,
    {
        let mut out = text.to_string();
        for compiled in &self.words {
            if !compiled.regex.is_match(&out) {
                continue;
            }
            let replacement = replacement_for(compiled);
            out = compiled
                .regex
                .replace_all(&out, NoExpand(replacement.as_str()))
                .into_owned();
        }
        out
    }
}

fn compile_entry(word: &str) -> Option<CompiledWord> {
    match compile_pattern(word) {
        Ok(compiled) => Some(compiled),
        Err(e) => {
            warn!("Skipping dictionary entry {}: {}", obscure_for_log(word), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use familyfriendly_words::Language;

    fn filter(words: &[&str]) -> Filter {
        let registry = Registry::new().with_language(Language::English, words.iter().copied());
        Filter::with_registry(None, &registry)
    }

    #[test]
    fn test_filter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Filter>();
    }

    #[test]
    fn test_mask_uses_entry_length_not_match_length() {
        let f = filter(&["shit"]);
        assert_eq!(f.mask_bad_words("oh 5h1t"), "oh ****");
        assert_eq!(f.mask_bad_words_with("SHIT happens", "#"), "#### happens");
    }

    #[test]
    fn test_longer_entry_masked_before_contained_entry() {
        let f = filter(&["ass", "asshole"]);
        assert_eq!(f.words().collect::<Vec<_>>(), vec!["asshole", "ashole", "ass", "as"]);
        assert_eq!(f.replace_bad_words("you asshole"), "you [CENSORED]");
    }

    #[test]
    fn test_replacement_is_literal() {
        let f = filter(&["darn"]);
        assert_eq!(f.replace_bad_words_with("darn it", "$1"), "$1 it");
        assert_eq!(f.mask_bad_words_with("darn it", "$"), "$$$$ it");
    }

    #[test]
    fn test_stub_catches_repeated_letters() {
        let f = filter(&["asshole"]);
        assert_eq!(f.mask_bad_words("what an ashole"), "what an ******");
    }

    #[test]
    fn test_find_bad_words_reports_offsets() {
        let f = filter(&["bad"]);
        let matches = f.find_bad_words("é b4d and BAD");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched_text, "b4d");
        assert_eq!(matches[0].start, 3);
        assert_eq!(matches[0].char_start, 2);
        assert_eq!(matches[1].matched_text, "BAD");
        assert!(matches.iter().all(|m| m.word == "bad"));
    }

    #[test]
    fn test_find_bad_words_does_not_double_count_contained_entries() {
        let f = filter(&["ass", "asshole"]);
        let matches = f.find_bad_words("asshole");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "asshole");
    }

    #[test]
    fn test_empty_input() {
        let f = filter(&["bad"]);
        assert!(!f.contains_bad_word(""));
        assert_eq!(f.mask_bad_words(""), "");
        assert_eq!(f.replace_bad_words(""), "");
    }

    #[test]
    fn test_add_words_skips_empty() {
        let mut f = filter(&["bad"]);
        f.add_words(["", "worse"]);
        assert_eq!(f.len(), 2);
        assert!(f.contains_bad_word("worse"));
    }

    #[test]
    fn test_add_words_appends_without_resorting() {
        let mut f = filter(&["bad", "worse"]);
        f.add_words(["ab", "abcdefghijklmnop"]);
        let words: Vec<&str> = f.words().collect();
        assert_eq!(words, vec!["worse", "bad", "ab", "abcdefghijklmnop"]);
        assert_eq!(
            f.mask_bad_words("ab abcdefghijklmnop"),
            "** ****************"
        );
    }

    #[test]
    fn test_empty_mask_and_replacement_fall_back_to_defaults() {
        let registry = Registry::new().with_language(Language::English, ["bad"]);
        let config = FilterConfig {
            mask_char: String::new(),
            replacement: String::new(),
            ..FilterConfig::default()
        };
        let f = Filter::with_registry(Some(config), &registry);
        assert_eq!(f.config().mask_char, DEFAULT_MASK_CHAR);
        assert_eq!(f.mask_bad_words("so bad"), "so ***");
        assert_eq!(f.replace_bad_words("so bad"), "so [CENSORED]");
    }

    #[test]
    fn test_find_bad_words_agrees_with_non_word_mask() {
        let f = filter(&["ass", "asshole"]);
        let input = "asshole and ass";
        let matches = f.find_bad_words(input);
        let masked = f.mask_bad_words(input);
        assert_eq!(masked, "******* and ***");
        assert_eq!(matches.len(), 2);
        for m in &matches {
            let masked_span: String = masked
                .chars()
                .skip(m.char_start)
                .take(m.word.chars().count())
                .collect();
            assert!(masked_span.chars().all(|c| c == '*'), "{}", masked_span);
        }
    }
}
