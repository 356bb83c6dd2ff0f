//! Core data structures for Word Quest
//!
//! Everything here is pure in-memory state with no I/O: the validated word
//! type, the trie of loaded words, the scored-word heap, and the per-round
//! guess trackers.

mod guesses;
mod prefix_set;
mod priority_pool;
mod word;

pub use guesses::{GuessSet, WrongHistory};
pub use prefix_set::PrefixSet;
pub use priority_pool::{DEFAULT_POOL_CAPACITY, EmptyPoolError, PriorityPool, ScoredWord};
pub use word::{DEFAULT_MAX_WORD_LEN, Word, WordError};
