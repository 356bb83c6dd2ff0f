//! Round engine for Word Quest
//!
//! Loads a word list into a [`WordStore`], picks a secret and runs a single
//! [`Round`] of letter guessing against it.

mod config;
mod difficulty;
mod round;
mod session;
mod store;

pub use config::GameConfig;
pub use difficulty::{Difficulty, DifficultyChoice};
pub use round::{
    GuessOutcome, PLACEHOLDER, RejectReason, Round, RoundError, RoundStatus, load_round,
    spaced,
};
pub use session::SessionStats;
pub use store::WordStore;
