//! Word lists for Word Quest
//!
//! Provides the embedded default list and loading from newline-delimited files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_MAX_WORD_LEN;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_is_not_empty() {
        assert!(WORDS_COUNT > 0);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(
                word.len() <= DEFAULT_MAX_WORD_LEN,
                "Word '{word}' is longer than {DEFAULT_MAX_WORD_LEN} letters"
            );
        }
    }
}
