//! Bounded max-heap of scored words
//!
//! Entries are kept in an array-backed binary heap: the entry at index `i` has
//! children at `2i + 1` and `2i + 2`, and never scores lower than either of them.

use super::Word;
use std::fmt;

/// Most entries a pool holds when no explicit capacity is configured
pub const DEFAULT_POOL_CAPACITY: usize = 100;

/// A word paired with its ranking score (the word's length)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    word: Word,
    score: usize,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: Word) -> Self {
        let score = word.len();
        Self { word, score }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn into_word(self) -> Word {
        self.word
    }
}

/// Extraction was attempted on a pool with no remaining entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot extract from an empty priority pool")
    }
}

impl std::error::Error for EmptyPoolError {}

/// Max-priority collection of scored words with a fixed capacity
#[derive(Debug, Clone)]
pub struct PriorityPool {
    heap: Vec<ScoredWord>,
    capacity: usize,
}

impl PriorityPool {
    /// Create an empty pool that will accept at most `capacity` entries
    ///
    /// Storage grows with what is actually loaded, so `capacity` may be any bound.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::new(),
            capacity,
        }
    }

    /// Replace the pool contents with `entries` and heapify bottom-up
    ///
    /// Entries past the capacity are dropped in input order. Returns the number
    /// of entries that were kept.
    ///
    /// # Examples
    /// ```
    /// use word_quest::core::{PriorityPool, ScoredWord, Word};
    ///
    /// let mut pool = PriorityPool::with_capacity(10);
    /// pool.load(["fig", "banana", "kiwi"].map(|w| ScoredWord::new(Word::new(w).unwrap())));
    ///
    /// assert_eq!(pool.extract_max().unwrap().word().text(), "banana");
    /// ```
    pub fn load(&mut self, entries: impl IntoIterator<Item = ScoredWord>) -> usize {
        self.heap.clear();
        self.heap.extend(entries.into_iter().take(self.capacity));

        let n = self.heap.len();
        for parent in (0..n / 2).rev() {
            self.sift_down(parent);
        }
        n
    }

    /// Remove and return the highest-scoring entry
    ///
    /// Ties go to whichever entry currently sits at the root.
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the pool has no entries left. Callers are
    /// expected to check [`PriorityPool::is_empty`] first.
    pub fn extract_max(&mut self) -> Result<ScoredWord, EmptyPoolError> {
        if self.heap.is_empty() {
            return Err(EmptyPoolError);
        }

        let top = self.heap.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    /// Highest-scoring entry without removing it
    #[must_use]
    pub fn peek_max(&self) -> Option<&ScoredWord> {
        self.heap.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    fn sift_down(&mut self, mut parent: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * parent + 1;
            let right = left + 1;
            let mut largest = parent;

            if left < n && self.heap[left].score > self.heap[largest].score {
                largest = left;
            }
            if right < n && self.heap[right].score > self.heap[largest].score {
                largest = right;
            }
            if largest == parent {
                return;
            }

            self.heap.swap(parent, largest);
            parent = largest;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2].score >= self.heap[i].score)
    }
}
