//! Word Quest
//!
//! A terminal word-guessing game: a secret word is drawn from a word list and
//! the player reveals it one letter at a time before their lives run out.
//!
//! # Quick Start
//!
//! ```rust
//! use word_quest::game::{GameConfig, GuessOutcome, load_round};
//!
//! let mut round = load_round(["cat"], 3, &GameConfig::default(), &mut rand::rng()).unwrap();
//!
//! assert_eq!(round.submit_guess('c'), GuessOutcome::Correct);
//! assert_eq!(round.submit_guess('x'), GuessOutcome::Incorrect(2));
//! assert_eq!(round.masked_string(), "c _ _");
//! ```

// Core data structures
pub mod core;

// Round engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
