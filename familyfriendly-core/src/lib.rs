// familyfriendly-core/src/lib.rs
//! # familyfriendly Core Library
//!
//! `familyfriendly-core` checks user-supplied text against bad-word
//! dictionaries in eight languages and masks or replaces what it finds.
//!
//! ## Modules
//!
//! * `config`: [`FilterConfig`], the language selection and caller word lists.
//! * `builder`: Composes the working dictionary (selection, stubs, longest-first sort).
//! * `patterns`: Compiles substitution-tolerant patterns and the literal scanner.
//! * `filter`: The [`Filter`] matching engine.
//! * `bad_word_match`: Match and summary records returned by [`Filter::find_bad_words`].
//! * `errors`: [`FilterError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use familyfriendly_core::{Filter, FilterConfig, Language, Registry};
//!
//! let registry = Registry::new()
//!     .with_language(Language::English, ["badword1", "badword2"])
//!     .with_language(Language::Spanish, ["malo1"]);
//!
//! let filter = Filter::with_registry(Some(FilterConfig::only(&[Language::English])), &registry);
//!
//! assert!(filter.contains_bad_word("This sentence has badword1"));
//! assert!(!filter.contains_bad_word("malo1"));
//! assert_eq!(filter.mask_bad_words("oh b4dword1!"), "oh ********!");
//! assert_eq!(filter.replace_bad_words("badword2 again"), "[CENSORED] again");
//! ```
//!
//! ## Matching
//!
//! * [`Filter::contains_bad_word`] is a plain substring test over every entry.
//! * [`Filter::mask_bad_words`], [`Filter::replace_bad_words`] and
//!   [`Filter::find_bad_words`] use per-entry patterns that are case-insensitive,
//!   anchored at word boundaries, and accept look-alike substitutions
//!   (`a` → `@`/`4`, `s` → `$`/`5`, and so on).
//!
//! ## Error Handling
//!
//! Queries never fail. Configuration parsing returns `anyhow::Result`, with
//! [`FilterError`] underneath.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod bad_word_match;
pub mod builder;
pub mod config;
pub mod errors;
pub mod filter;
pub mod patterns;

/// Re-exports the configuration type and its defaults.
pub use config::{FilterConfig, DEFAULT_MASK_CHAR, DEFAULT_REPLACEMENT};

/// Re-exports the custom error type.
pub use errors::FilterError;

/// Re-exports the matching engine.
pub use filter::Filter;

/// Re-exports match reporting types.
pub use bad_word_match::{summarize, BadWordMatch, BadWordSummary};

pub use builder::{build_working_dictionary, stub};
pub use patterns::compiler::{compile_pattern, CompiledWord};

/// Re-exports the dictionary registry so callers need only this crate.
pub use familyfriendly_words::{Dictionary, Language, Registry};
