//! Word membership command
//!
//! Reports whether a word was part of the loaded list using the word trie.

use crate::game::WordStore;

/// Result of checking a word against the list
pub struct CheckResult {
    /// The query, case-folded
    pub word: String,
    pub present: bool,
    /// Some loaded word starts with the query
    pub is_prefix: bool,
}

/// Look `word` up in the loaded list
#[must_use]
pub fn check_word(store: &WordStore, word: &str) -> CheckResult {
    let word = word.trim().to_ascii_lowercase();
    let present = store.contains(&word);
    let is_prefix = !word.is_empty() && store.prefixes().has_prefix(&word);

    CheckResult {
        word,
        present,
        is_prefix,
    }
}
