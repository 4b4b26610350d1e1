//! The closed set of dictionary languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language with a bad-word dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Arabic,
    Chinese,
    French,
    German,
    Indonesian,
    Italian,
    Spanish,
}

/// Returned when parsing a string that names no supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Every language, in the order their dictionaries are concatenated.
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Arabic,
        Language::Chinese,
        Language::French,
        Language::German,
        Language::Indonesian,
        Language::Italian,
        Language::Spanish,
    ];

    /// ISO 639-1 code, also used as the embedded word list's file stem.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
            Language::Chinese => "zh",
            Language::French => "fr",
            Language::German => "de",
            Language::Indonesian => "id",
            Language::Italian => "it",
            Language::Spanish => "es",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Arabic => "arabic",
            Language::Chinese => "chinese",
            Language::French => "french",
            Language::German => "german",
            Language::Indonesian => "indonesian",
            Language::Italian => "italian",
            Language::Spanish => "spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Accepts the full name or the two-letter code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| {
                lang.name().eq_ignore_ascii_case(needle) || lang.code().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
