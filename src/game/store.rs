//! Loaded word list with its trie and heap

use super::{GameConfig, RoundError};
use crate::core::{PrefixSet, PriorityPool, ScoredWord, Word};
use log::debug;
use rand::Rng;

/// Every word accepted for one round, indexed three ways
///
/// The plain list drives secret selection, the trie records membership and the
/// pool ranks words by length.
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<Word>,
    prefixes: PrefixSet,
    pool: PriorityPool,
}

impl WordStore {
    /// Load candidate words from any ordered source
    ///
    /// Entries are trimmed; blank lines and entries that are not purely
    /// alphabetic or exceed `config.max_word_len` are skipped. Loading stops once
    /// `config.max_words` entries have been accepted.
    ///
    /// # Errors
    /// Returns `RoundError::NoWords` if nothing usable was found.
    ///
    /// # Examples
    /// ```
    /// use word_quest::game::{GameConfig, WordStore};
    ///
    /// let store = WordStore::load(["comet", "", "n0va", "nebula"], &GameConfig::default()).unwrap();
    /// assert_eq!(store.len(), 2);
    /// assert!(store.contains("nebula"));
    /// ```
    pub fn load<I, S>(source: I, config: &GameConfig) -> Result<Self, RoundError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut prefixes = PrefixSet::new(config.max_word_len);

        for entry in source {
            if words.len() >= config.max_words {
                debug!("word limit of {} reached, ignoring the rest", config.max_words);
                break;
            }

            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }

            match Word::with_max_len(trimmed, config.max_word_len) {
                Ok(word) => {
                    prefixes.insert(&word);
                    words.push(word);
                }
                Err(e) => debug!("skipping '{trimmed}': {e}"),
            }
        }

        if words.is_empty() {
            return Err(RoundError::NoWords);
        }

        let mut pool = PriorityPool::with_capacity(config.max_words);
        pool.load(words.iter().cloned().map(ScoredWord::new));

        debug!(
            "loaded {} words ({} distinct), longest scores {}",
            words.len(),
            prefixes.len(),
            pool.peek_max().map_or(0, ScoredWord::score)
        );

        Ok(Self {
            words,
            prefixes,
            pool,
        })
    }

    /// Pick a secret uniformly at random from the loaded list
    ///
    /// Word length plays no part in the choice.
    pub fn choose_secret<R: Rng>(&self, rng: &mut R) -> &Word {
        let index = rng.random_range(0..self.words.len());
        debug!("secret chosen at index {index} of {}", self.words.len());
        &self.words[index]
    }

    /// Whether `text` was one of the loaded words
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.prefixes.contains(text)
    }

    /// Up to `n` loaded words, longest first
    ///
    /// Drains a copy of the pool so the store itself is left untouched.
    #[must_use]
    pub fn longest_words(&self, n: usize) -> Vec<ScoredWord> {
        let mut pool = self.pool.clone();
        let mut ranked = Vec::with_capacity(n.min(pool.len()));

        while ranked.len() < n && !pool.is_empty() {
            match pool.extract_max() {
                Ok(entry) => ranked.push(entry),
                Err(_) => break,
            }
        }
        ranked
    }

    /// Loaded words in source order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a successfully loaded store
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub const fn prefixes(&self) -> &PrefixSet {
        &self.prefixes
    }

    #[must_use]
    pub const fn pool(&self) -> &PriorityPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn load_skips_unusable_entries() {
        let store = WordStore::load(
            ["  apple ", "", "two words", "b4nana", "Cherry"],
            &GameConfig::default(),
        )
        .unwrap();

        let texts: Vec<&str> = store.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple", "cherry"]);
    }

    #[test]
    fn load_with_nothing_usable_fails() {
        let empty: [&str; 0] = [];
        assert_eq!(
            WordStore::load(empty, &GameConfig::default()).unwrap_err(),
            RoundError::NoWords
        );
        assert_eq!(
            WordStore::load(["", "123", "   "], &GameConfig::default()).unwrap_err(),
            RoundError::NoWords
        );
    }

    #[test]
    fn load_stops_at_word_limit() {
        let config = GameConfig::new(3, 50);
        let store = WordStore::load(["a", "bb", "ccc", "dddd", "eeeee"], &config).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.pool().len(), 3);
        assert!(!store.contains("dddd"));
    }

    #[test]
    fn huge_word_limit_loads_normally() {
        let config = GameConfig::new(usize::MAX, 50);
        let store = WordStore::load(["cat", "dog"], &config).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.pool().len(), 2);
        assert_eq!(store.longest_words(usize::MAX).len(), 2);
    }

    #[test]
    fn load_skips_words_over_length_limit() {
        let config = GameConfig::new(10, 4);
        let store = WordStore::load(["tiny", "enormous", "wee"], &config).unwrap();

        assert_eq!(store.len(), 2);
        assert!(!store.contains("enormous"));
        assert_eq!(store.prefixes().max_depth(), 4);
    }

    #[test]
    fn every_loaded_word_is_a_member() {
        let source = ["galaxy", "compass", "puzzle", "rocket"];
        let store = WordStore::load(source, &GameConfig::default()).unwrap();

        for word in source {
            assert!(store.contains(word));
        }
        assert!(!store.contains("rock"));
    }

    #[test]
    fn longest_words_are_ranked_by_length() {
        let store =
            WordStore::load(["fig", "watermelon", "kiwi", "banana"], &GameConfig::default())
                .unwrap();

        let top = store.longest_words(3);
        let ranked: Vec<&str> = top.iter().map(|e| e.word().text()).collect();
        assert_eq!(ranked, vec!["watermelon", "banana", "kiwi"]);

        // Asking for more than exists returns everything, pool left intact
        assert_eq!(store.longest_words(10).len(), 4);
        assert_eq!(store.pool().len(), 4);
    }

    #[test]
    fn secret_comes_from_loaded_words() {
        let store = WordStore::load(["alpha", "beta", "gamma"], &GameConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let secret = store.choose_secret(&mut rng);
            assert!(store.words().contains(secret));
        }
    }

    #[test]
    fn secret_selection_ignores_length() {
        // With a length-biased pick only "longestword" would ever appear
        let store = WordStore::load(["ab", "cd", "longestword"], &GameConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let short_picked = (0..200).any(|_| store.choose_secret(&mut rng).len() == 2);
        assert!(short_picked);
    }
}
