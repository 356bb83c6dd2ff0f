//! Capacity limits applied while loading a word list

use crate::core::{DEFAULT_MAX_WORD_LEN, DEFAULT_POOL_CAPACITY};

/// Bounds on how many words are loaded and how long each may be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Loading stops after this many accepted words
    pub max_words: usize,
    /// Longer entries are skipped; also bounds the trie depth
    pub max_word_len: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_words: usize, max_word_len: usize) -> Self {
        Self {
            max_words,
            max_word_len,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY, DEFAULT_MAX_WORD_LEN)
    }
}
