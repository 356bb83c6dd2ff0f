//! Command implementations

pub mod check;
pub mod rank;
pub mod simple;

pub use check::{CheckResult, check_word};
pub use rank::{RankResult, rank_words};
pub use simple::{run_simple, run_simple_with};

use crate::game::{Difficulty, GameConfig, WordStore};
use crate::wordlists::loader::WordSource;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings shared by every command that loads words
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub source: WordSource,
    pub config: GameConfig,
    /// Skip the difficulty prompt when set
    pub difficulty: Option<Difficulty>,
    /// Fixed seed for reproducible secret selection
    pub seed: Option<u64>,
}

impl SessionOptions {
    /// Read the configured source's raw lines
    ///
    /// # Errors
    ///
    /// Returns an error if the word file cannot be read.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        self.source
            .read_lines()
            .with_context(|| format!("Can't open word list {:?}", self.source))
    }

    /// Read and validate the configured source
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no usable words.
    pub fn load_store(&self) -> Result<WordStore> {
        let lines = self.read_lines()?;
        Ok(WordStore::load(&lines, &self.config)?)
    }

    /// Read the configured source once, returning its lines only if they hold
    /// at least one usable word
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no usable words.
    pub fn read_usable_lines(&self) -> Result<Vec<String>> {
        let lines = self.read_lines()?;
        WordStore::load(&lines, &self.config)?;
        Ok(lines)
    }

    /// Random source for secret selection, seeded if a seed was given
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            source: WordSource::Embedded,
            config: GameConfig::default(),
            difficulty: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_file(name: &str, content: &str) -> (SessionOptions, std::path::PathBuf) {
        let path = std::env::temp_dir().join(format!(
            "word_quest_options_{name}_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        let options = SessionOptions {
            source: WordSource::File(path.to_string_lossy().into_owned()),
            ..SessionOptions::default()
        };
        (options, path)
    }

    #[test]
    fn usable_lines_come_back_as_read() {
        let (options, path) = options_with_file("usable", "comet\n\n n0va\nnebula\n");

        let lines = options.read_usable_lines().unwrap();
        assert_eq!(lines, vec!["comet", "n0va", "nebula"]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn unusable_lines_are_refused() {
        let (options, path) = options_with_file("unusable", "\n123\n");

        let err = options.read_usable_lines().unwrap_err();
        assert!(err.to_string().contains("No words loaded"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_names_the_source() {
        let options = SessionOptions {
            source: WordSource::File("/nonexistent/word_quest/words.txt".to_string()),
            ..SessionOptions::default()
        };

        let err = options.read_usable_lines().unwrap_err();
        assert!(err.to_string().contains("Can't open word list"));
    }
}
