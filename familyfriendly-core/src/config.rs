//! Configuration management for `familyfriendly-core`.
//!
//! A [`FilterConfig`] says which language dictionaries a filter draws from,
//! which words the caller adds or removes up front, and the default mask and
//! replacement text. It deserialises from YAML with every field optional.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use familyfriendly_words::Language;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::FilterError;

/// Mask used by [`crate::Filter::mask_bad_words`] unless configured otherwise.
pub const DEFAULT_MASK_CHAR: &str = "*";

/// Token used by [`crate::Filter::replace_bad_words`] unless configured otherwise.
pub const DEFAULT_REPLACEMENT: &str = "[CENSORED]";

/// Options for building a [`crate::Filter`].
///
/// With no language flag set (or `all_languages` set) every language is
/// selected; see [`FilterConfig::selected_languages`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    pub all_languages: bool,
    pub include_english: bool,
    pub include_arabic: bool,
    pub include_chinese: bool,
    pub include_french: bool,
    pub include_german: bool,
    pub include_indonesian: bool,
    pub include_italian: bool,
    pub include_spanish: bool,
    /// Appended to the selected dictionaries before stubs are derived.
    pub extra_words: Vec<String>,
    /// Dropped from the selected dictionaries before stubs are derived.
    pub excluded_words: Vec<String>,
    pub mask_char: String,
    pub replacement: String,
    /// Stubs shorter than this many characters are not derived. 0 keeps every stub.
    pub min_stub_length: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            all_languages: false,
            include_english: false,
            include_arabic: false,
            include_chinese: false,
            include_french: false,
            include_german: false,
            include_indonesian: false,
            include_italian: false,
            include_spanish: false,
            extra_words: Vec::new(),
            excluded_words: Vec::new(),
            mask_char: DEFAULT_MASK_CHAR.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
            min_stub_length: 0,
        }
    }
}

impl FilterConfig {
    /// A configuration that selects exactly `languages`.
    ///
    /// An empty slice selects nothing explicitly, which resolves to every language.
    pub fn only(languages: &[Language]) -> Self {
        let mut config = Self::default();
        for &language in languages {
            config.set_included(language, true);
        }
        config
    }

    pub fn is_included(&self, language: Language) -> bool {
        match language {
            Language::English => self.include_english,
            Language::Arabic => self.include_arabic,
            Language::Chinese => self.include_chinese,
            Language::French => self.include_french,
            Language::German => self.include_german,
            Language::Indonesian => self.include_indonesian,
            Language::Italian => self.include_italian,
            Language::Spanish => self.include_spanish,
        }
    }

    pub fn set_included(&mut self, language: Language, included: bool) {
        let flag = match language {
            Language::English => &mut self.include_english,
            Language::Arabic => &mut self.include_arabic,
            Language::Chinese => &mut self.include_chinese,
            Language::French => &mut self.include_french,
            Language::German => &mut self.include_german,
            Language::Indonesian => &mut self.include_indonesian,
            Language::Italian => &mut self.include_italian,
            Language::Spanish => &mut self.include_spanish,
        };
        *flag = included;
    }

    /// Languages whose dictionaries the filter is built from, in [`Language::ALL`] order.
    ///
    /// `all_languages`, or no per-language flag at all, selects everything.
    pub fn selected_languages(&self) -> Vec<Language> {
        let any_flagged = Language::ALL.iter().any(|&lang| self.is_included(lang));
        let selected: Vec<Language> = if self.all_languages || !any_flagged {
            Language::ALL.to_vec()
        } else {
            Language::ALL
                .into_iter()
                .filter(|&lang| self.is_included(lang))
                .collect()
        };
        debug!("Resolved filter languages: {:?}", selected);
        selected
    }

    /// Checks the fields the type system cannot.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.mask_char.is_empty() {
            return Err(FilterError::InvalidConfig(
                "`mask_char` cannot be empty".to_string(),
            ));
        }
        if self.replacement.is_empty() {
            return Err(FilterError::InvalidConfig(
                "`replacement` cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a YAML document. An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: FilterConfig = if yaml.trim().is_empty() {
            FilterConfig::default()
        } else {
            serde_yml::from_str(yaml)
                .map_err(FilterError::from)
                .context("Failed to parse filter configuration")?
        };
        config.validate().context("Filter configuration is invalid")?;

        info!(
            "Loaded filter configuration: {} language(s), {} extra word(s), {} excluded word(s).",
            config.selected_languages().len(),
            config.extra_words.len(),
            config.excluded_words.len()
        );
        Ok(config)
    }
}
