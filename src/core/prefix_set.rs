//! Letter trie recording which words were loaded
//!
//! Nodes live in a flat arena and refer to their children by index, one slot per
//! lowercase letter. A word is present iff walking its letters from the root ends
//! on a node whose terminal flag is set.

use super::Word;

const ALPHABET: usize = 26;
const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<usize>; ALPHABET],
    terminal: bool,
}

/// Append-only set of words stored as a prefix tree
#[derive(Debug, Clone)]
pub struct PrefixSet {
    nodes: Vec<Node>,
    max_depth: usize,
    word_count: usize,
}

impl PrefixSet {
    /// Create an empty set whose paths are at most `max_depth` letters deep
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            nodes: vec![Node::default()],
            max_depth,
            word_count: 0,
        }
    }

    /// Insert a word, creating any missing nodes along its path
    ///
    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: &Word) -> bool {
        debug_assert!(
            word.len() <= self.max_depth,
            "word '{word}' deeper than configured maximum {}",
            self.max_depth
        );

        let mut current = ROOT;
        for &letter in word.letters() {
            let slot = letter_slot(letter);
            current = match self.nodes[current].children[slot] {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children[slot] = Some(next);
                    next
                }
            };
        }

        let fresh = !self.nodes[current].terminal;
        self.nodes[current].terminal = true;
        if fresh {
            self.word_count += 1;
        }
        fresh
    }

    /// Check whether exactly this letter sequence was inserted
    ///
    /// Input is case-folded; anything that is not an ASCII letter is never present.
    ///
    /// # Examples
    /// ```
    /// use word_quest::core::{PrefixSet, Word};
    ///
    /// let mut set = PrefixSet::new(10);
    /// set.insert(&Word::new("garden").unwrap());
    ///
    /// assert!(set.contains("Garden"));
    /// assert!(!set.contains("gard"));
    /// ```
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.walk(text)
            .is_some_and(|index| self.nodes[index].terminal)
    }

    /// Check whether any inserted word starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct words inserted
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Deepest path this set was configured to hold
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn walk(&self, text: &str) -> Option<usize> {
        if text.len() > self.max_depth {
            return None;
        }

        let mut current = ROOT;
        for byte in text.bytes() {
            if !byte.is_ascii_alphabetic() {
                return None;
            }
            current = self.nodes[current].children[letter_slot(byte.to_ascii_lowercase())]?;
        }
        Some(current)
    }
}

#[inline]
const fn letter_slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(words: &[&str]) -> PrefixSet {
        let mut set = PrefixSet::new(20);
        for &w in words {
            set.insert(&Word::new(w).unwrap());
        }
        set
    }

    #[test]
    fn inserted_words_are_present() {
        let set = set_of(&["cat", "car", "cart", "dog"]);
        for w in ["cat", "car", "cart", "dog"] {
            assert!(set.contains(w), "'{w}' should be present");
        }
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn lookup_is_case_folded() {
        let set = set_of(&["Rocket"]);
        assert!(set.contains("rocket"));
        assert!(set.contains("ROCKET"));
    }

    #[test]
    fn shared_prefix_is_not_a_member() {
        let set = set_of(&["cart"]);
        assert!(!set.contains("car"));
        assert!(!set.contains("ca"));
        assert!(set.has_prefix("car"));
    }

    #[test]
    fn extension_is_not_a_member() {
        let set = set_of(&["car"]);
        assert!(!set.contains("cars"));
        assert!(!set.has_prefix("cars"));
    }

    #[test]
    fn unknown_and_malformed_lookups_fail() {
        let set = set_of(&["puzzle"]);
        assert!(!set.contains("zebra"));
        assert!(!set.contains("puz zle"));
        assert!(!set.contains("puzz1e"));
        assert!(!set.contains(""));
    }

    #[test]
    fn empty_string_is_a_prefix_of_everything() {
        let set = set_of(&["a"]);
        assert!(set.has_prefix(""));
    }

    #[test]
    fn duplicate_insert_is_reported_and_not_counted() {
        let mut set = PrefixSet::new(10);
        let word = Word::new("island").unwrap();
        assert!(set.insert(&word));
        assert!(!set.insert(&word));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn lookups_past_max_depth_fail() {
        let mut shallow = PrefixSet::new(3);
        shallow.insert(&Word::new("abc").unwrap());

        assert!(shallow.contains("abc"));
        assert!(!shallow.contains("abcd"));
        assert_eq!(shallow.max_depth(), 3);
    }

    #[test]
    fn new_set_is_empty() {
        let set = PrefixSet::new(5);
        assert!(set.is_empty());
        assert!(!set.contains("a"));
    }
}
