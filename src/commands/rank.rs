//! Longest-word ranking command
//!
//! Lists loaded words in descending score order by draining the priority pool.

use crate::game::WordStore;

/// Result of ranking a word list
pub struct RankResult {
    pub total_words: usize,
    /// (word, score) pairs, highest score first
    pub entries: Vec<(String, usize)>,
}

/// Rank up to `count` words from `store` by length
#[must_use]
pub fn rank_words(store: &WordStore, count: usize) -> RankResult {
    let entries = store
        .longest_words(count)
        .into_iter()
        .map(|entry| (entry.word().text().to_string(), entry.score()))
        .collect();

    RankResult {
        total_words: store.len(),
        entries,
    }
}
