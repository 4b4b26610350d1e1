// familyfriendly-words/src/lib.rs
//! # familyfriendly-words
//!
//! Immutable, per-language bad-word dictionaries for `familyfriendly-core`.
//!
//! The crate owns the closed set of supported languages ([`Language`]) and a
//! [`Registry`] that maps each language to its [`Dictionary`]. A default
//! registry built from the word lists embedded under `defaults/` is available
//! through [`Registry::embedded`]; callers that ship their own lists build a
//! `Registry` by hand.
//!
//! License: MIT OR Apache-2.0

pub mod language;
pub mod registry;

pub use language::{Language, UnknownLanguage};
pub use registry::{Dictionary, Registry};
