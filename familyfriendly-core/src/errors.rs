//! errors.rs - Custom error types for the familyfriendly-core library.
//!
//! Query operations on a [`crate::Filter`] never fail; these errors only
//! surface while compiling patterns or parsing configuration.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `familyfriendly-core`.
///
/// Marked `#[non_exhaustive]` so new variants are not a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterError {
    #[error("Failed to compile pattern for word '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Invalid filter configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse filter configuration: {0}")]
    Yaml(#[from] serde_yml::Error),
}
