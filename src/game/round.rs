//! One round of play: secret word, lives and guess bookkeeping
//!
//! A round starts with a secret drawn from a [`WordStore`] and accepts one
//! letter at a time until every letter of the secret has been guessed (won) or
//! the lives run out (lost).

use super::{GameConfig, WordStore};
use crate::core::{GuessSet, Word, WrongHistory};
use log::info;
use rand::Rng;
use std::fmt;

/// Shown in masked renderings for letters not yet guessed
pub const PLACEHOLDER: char = '_';

/// Join characters with single spaces, e.g. `['c', 'a', '_']` to `c a _`
#[must_use]
pub fn spaced(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len() * 2);
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Reasons a round could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    /// The word source produced no usable entries
    NoWords,
    /// A round needs at least one life
    NoLives,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWords => write!(f, "No words loaded"),
            Self::NoLives => write!(f, "A round needs at least one life"),
        }
    }
}

impl std::error::Error for RoundError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was refused without costing a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotALetter,
    AlreadyGuessed,
    RoundOver,
}

/// What happened as a result of a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Rejected(RejectReason),
    Correct,
    Incorrect(u32),
    Won(Word),
    Lost(Word),
}

/// State of a single round
///
/// Owns the loaded words along with the per-round trackers; nothing here
/// survives into the next round.
#[derive(Debug, Clone)]
pub struct Round {
    store: WordStore,
    secret: Word,
    lives: u32,
    starting_lives: u32,
    guesses: GuessSet,
    wrong: WrongHistory,
    status: RoundStatus,
}

/// Load a word source and start a round on a randomly chosen secret
///
/// # Errors
/// Returns `RoundError::NoWords` if the source yields nothing usable, or
/// `RoundError::NoLives` if `lives` is zero.
///
/// # Examples
/// ```
/// use word_quest::game::{GameConfig, GuessOutcome, load_round};
///
/// let mut round = load_round(["owl"], 3, &GameConfig::default(), &mut rand::rng()).unwrap();
/// assert_eq!(round.submit_guess('o'), GuessOutcome::Correct);
/// assert_eq!(round.render_masked(), vec!['o', '_', '_']);
/// ```
pub fn load_round<I, S, R>(
    source: I,
    lives: u32,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Round, RoundError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng,
{
    let store = WordStore::load(source, config)?;
    Round::start(store, lives, rng)
}

impl Round {
    /// Start a round on a secret drawn uniformly from `store`
    ///
    /// # Errors
    /// Returns `RoundError::NoLives` if `lives` is zero.
    pub fn start<R: Rng>(store: WordStore, lives: u32, rng: &mut R) -> Result<Self, RoundError> {
        if lives == 0 {
            return Err(RoundError::NoLives);
        }

        let secret = store.choose_secret(rng).clone();

        Ok(Self {
            store,
            secret,
            lives,
            starting_lives: lives,
            guesses: GuessSet::new(),
            wrong: WrongHistory::new(),
            status: RoundStatus::InProgress,
        })
    }

    /// Apply one guessed character
    ///
    /// Non-letters, repeated letters and guesses after the round has ended are
    /// rejected without touching any state. Letters are case-folded.
    pub fn submit_guess(&mut self, input: char) -> GuessOutcome {
        if self.status != RoundStatus::InProgress {
            return GuessOutcome::Rejected(RejectReason::RoundOver);
        }

        if !input.is_ascii_alphabetic() {
            return GuessOutcome::Rejected(RejectReason::NotALetter);
        }

        // ASCII checked above, so the narrowing is lossless
        let letter = input.to_ascii_lowercase() as u8;
        if self.guesses.contains(letter) {
            return GuessOutcome::Rejected(RejectReason::AlreadyGuessed);
        }
        self.guesses.add(letter);

        if self.secret.has_letter(letter) {
            if self.is_solved() {
                self.status = RoundStatus::Won;
                info!(
                    "round won: '{}' with {} of {} lives left",
                    self.secret, self.lives, self.starting_lives
                );
                return GuessOutcome::Won(self.secret.clone());
            }
            return GuessOutcome::Correct;
        }

        self.lives -= 1;
        self.wrong.push(letter);

        if self.lives == 0 {
            self.status = RoundStatus::Lost;
            info!(
                "round lost: '{}' after {} wrong guesses",
                self.secret,
                self.wrong.len()
            );
            return GuessOutcome::Lost(self.secret.clone());
        }
        GuessOutcome::Incorrect(self.lives)
    }

    /// The secret with unguessed letters replaced by [`PLACEHOLDER`]
    #[must_use]
    pub fn render_masked(&self) -> Vec<char> {
        self.secret
            .letters()
            .iter()
            .map(|&letter| {
                if self.guesses.contains(letter) {
                    char::from(letter)
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// Masked secret as a space-separated string, e.g. `c a _`
    #[must_use]
    pub fn masked_string(&self) -> String {
        spaced(&self.render_masked())
    }

    /// Wrong guesses, most recent first
    #[must_use]
    pub fn render_wrong_history(&self) -> Vec<char> {
        self.wrong.to_sequence()
    }

    fn is_solved(&self) -> bool {
        self.secret
            .letters()
            .iter()
            .all(|&letter| self.guesses.contains(letter))
    }

    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub const fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    /// The secret word; display code should only reveal it once the round is over
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Letters guessed so far, in guess order
    #[must_use]
    pub fn guessed_letters(&self) -> &[u8] {
        self.guesses.as_slice()
    }

    #[must_use]
    pub const fn store(&self) -> &WordStore {
        &self.store
    }
}
