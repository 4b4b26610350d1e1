//! compiler.rs - Builds and compiles the pattern for a single bad word.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::FilterError;

/// Upper bound on the compiled size of a single word's pattern.
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A working-dictionary entry paired with its compiled pattern.
///
/// Keeping the two in one value means an entry can never drift out of step
/// with the pattern built from it.
#[derive(Debug, Clone)]
pub struct CompiledWord {
    /// The entry as it appears in the working dictionary.
    pub word: String,
    /// Case-insensitive, boundary-anchored, substitution-tolerant pattern for `word`.
    pub regex: Regex,
    /// Length of `word` in characters; the width of its mask.
    pub char_len: usize,
}

/// Characters accepted in place of a (lower-case) letter, the letter itself first.
pub fn substitutions(letter: char) -> Option<&'static [char]> {
    let alternatives: &'static [char] = match letter {
        'a' => &['a', '@', '4'],
        'e' => &['e', '3'],
        'i' => &['i', '1', '!'],
        'o' => &['o', '0'],
        's' => &['s', '$', '5'],
        't' => &['t', '7'],
        'b' => &['b', '8'],
        'g' => &['g', '6'],
        'l' => &['l', '1'],
        'q' => &['q', '9'],
        'z' => &['z', '2'],
        _ => return None,
    };
    Some(alternatives)
}

/// Single lower-case form of `c`, if it has exactly one.
fn single_lowercase(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

/// Regex source for `word`: one character class per substitutable letter,
/// every other character escaped, the whole wrapped in `\b` anchors.
pub fn pattern_source(word: &str) -> String {
    let mut source = String::with_capacity(word.len() * 4 + 4);
    source.push_str(r"\b");
    for c in word.chars() {
        match single_lowercase(c).and_then(substitutions) {
            Some(alternatives) => {
                source.push('[');
                for alt in alternatives {
                    source.push_str(&regex::escape(alt.encode_utf8(&mut [0u8; 4])));
                }
                source.push(']');
            }
            None => source.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
    }
    source.push_str(r"\b");
    source
}

/// Compiles the pattern for `word`.
pub fn compile_pattern(word: &str) -> Result<CompiledWord, FilterError> {
    let source = pattern_source(word);
    let regex = RegexBuilder::new(&source)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|e| FilterError::PatternCompilation(word.to_string(), e))?;

    debug!(target: "familyfriendly_core::patterns", "Compiled pattern {}", source);
    Ok(CompiledWord {
        word: word.to_string(),
        regex,
        char_len: word.chars().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_source_substitutes_and_anchors() {
        assert_eq!(pattern_source("bat"), r"\b[b8][a@4][t7]\b");
        assert_eq!(pattern_source("xy"), r"\bxy\b");
    }

    #[test]
    fn test_pattern_source_escapes_metacharacters() {
        let source = pattern_source("c.d+");
        assert_eq!(source, r"\bc\.d\+\b");
        assert!(Regex::new(&source).is_ok());
    }

    #[test]
    fn test_uppercase_letters_use_table() {
        assert_eq!(pattern_source("O"), r"\b[o0]\b");
    }

    #[test]
    fn test_compiled_pattern_tolerates_substitutions() {
        let compiled = compile_pattern("shit").unwrap();
        for input in ["shit", "SHIT", "5h1t", "5hi7", "sh!t"] {
            assert!(compiled.regex.is_match(&format!("oh {} no", input)), "{}", input);
        }
        assert!(!compiled.regex.is_match("shitake"));
    }

    #[test]
    fn test_compiled_pattern_respects_word_boundaries() {
        let compiled = compile_pattern("ass").unwrap();
        assert!(compiled.regex.is_match("what an ass!"));
        assert!(!compiled.regex.is_match("a classic assignment"));
    }

    #[test]
    fn test_char_len_counts_code_points() {
        assert_eq!(compile_pattern("坏词1").unwrap().char_len, 3);
        assert_eq!(compile_pattern("سيئة1").unwrap().char_len, 5);
    }

    #[test]
    fn test_non_latin_words_match_between_separators() {
        let compiled = compile_pattern("坏词1").unwrap();
        assert!(compiled.regex.is_match("x, 坏词1, y"));
    }
}
