//! Secret word representation
//!
//! A Word stores a lowercase ASCII letter sequence that has passed loader validation.

use std::fmt;

/// Longest word accepted when no explicit limit is configured
pub const DEFAULT_MAX_WORD_LEN: usize = 50;

/// A validated, lowercase word
///
/// Every byte is guaranteed to be in `b'a'..=b'z'`, so byte indexing and
/// character indexing coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooLong { len: usize, max: usize },
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::TooLong { len, max } => {
                write!(f, "Word must be at most {max} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word using the default length limit
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, too long, or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_quest::core::Word;
    ///
    /// let word = Word::new("Dragon").unwrap();
    /// assert_eq!(word.text(), "dragon");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_max_len(text, DEFAULT_MAX_WORD_LEN)
    }

    /// Create a new Word, rejecting anything longer than `max_len` letters
    ///
    /// # Errors
    /// See [`Word::new`].
    pub fn with_max_len(text: impl Into<String>, max_len: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.len() > max_len {
            return Err(WordError::TooLong {
                len: text.len(),
                max: max_len,
            });
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a validated word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("castle").unwrap();
        assert_eq!(word.text(), "castle");
        assert_eq!(word.letters(), b"castle");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CASTLE").unwrap().text(), "castle");
        assert_eq!(Word::new("CaStLe").unwrap().text(), "castle");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cast1e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cast le"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_respects_max_len() {
        assert!(Word::with_max_len("abcd", 4).is_ok());
        assert_eq!(
            Word::with_max_len("abcde", 4),
            Err(WordError::TooLong { len: 5, max: 4 })
        );
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("dog").unwrap();
        assert!(word.has_letter(b'd'));
        assert!(word.has_letter(b'g'));
        assert!(!word.has_letter(b'x'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Wizard").unwrap();
        assert_eq!(format!("{word}"), "wizard");
    }
}
