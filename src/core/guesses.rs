//! Per-round guess tracking
//!
//! Both collections hold at most one entry per letter of the alphabet, so plain
//! vectors with linear scans are all they need.

/// Distinct guessed letters in the order they were guessed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessSet {
    letters: Vec<u8>,
}

impl GuessSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guessed letter
    ///
    /// Returns `false` and leaves the set unchanged if the letter was already
    /// present. Callers should test [`GuessSet::contains`] first.
    pub fn add(&mut self, letter: u8) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Letters in guess order
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Incorrect guesses, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrongHistory {
    // Stored oldest-first; reads reverse it.
    letters: Vec<u8>,
}

impl WrongHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wrong guess as the new most recent entry
    pub fn push(&mut self, letter: u8) {
        self.letters.push(letter);
    }

    /// Iterate most-recent-first without consuming the history
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.letters.iter().rev().copied()
    }

    /// Collect the history most-recent-first
    ///
    /// # Examples
    /// ```
    /// use word_quest::core::WrongHistory;
    ///
    /// let mut wrong = WrongHistory::new();
    /// for letter in [b'a', b'b', b'c'] {
    ///     wrong.push(letter);
    /// }
    /// assert_eq!(wrong.to_sequence(), vec!['c', 'b', 'a']);
    /// ```
    #[must_use]
    pub fn to_sequence(&self) -> Vec<char> {
        self.iter().map(char::from).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_set_contains_after_add() {
        let mut guesses = GuessSet::new();
        assert!(!guesses.contains(b'e'));
        assert!(guesses.add(b'e'));
        assert!(guesses.contains(b'e'));
        assert!(guesses.add(b'q'));
        assert!(guesses.contains(b'e'));
    }

    #[test]
    fn guess_set_keeps_insertion_order() {
        let mut guesses = GuessSet::new();
        for letter in *b"zebra" {
            guesses.add(letter);
        }
        assert_eq!(guesses.as_slice(), b"zebra");
        assert_eq!(guesses.len(), 5);
    }

    #[test]
    fn guess_set_signals_duplicate() {
        let mut guesses = GuessSet::new();
        assert!(guesses.add(b'a'));
        assert!(!guesses.add(b'a'));
        assert_eq!(guesses.len(), 1);
    }

    #[test]
    fn wrong_history_is_most_recent_first() {
        let mut wrong = WrongHistory::new();
        wrong.push(b'a');
        wrong.push(b'b');
        wrong.push(b'c');
        assert_eq!(wrong.to_sequence(), vec!['c', 'b', 'a']);
    }

    #[test]
    fn wrong_history_traversal_is_restartable() {
        let mut wrong = WrongHistory::new();
        wrong.push(b'x');
        wrong.push(b'y');

        let first: Vec<u8> = wrong.iter().collect();
        let second: Vec<u8> = wrong.iter().collect();
        assert_eq!(first, second);
        assert_eq!(wrong.len(), 2);
    }

    #[test]
    fn new_collections_are_empty() {
        assert!(GuessSet::new().is_empty());
        assert!(WrongHistory::new().is_empty());
        assert!(WrongHistory::new().to_sequence().is_empty());
    }
}
