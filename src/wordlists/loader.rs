//! Word list loading utilities
//!
//! Produces raw candidate lines; validation happens when the words are loaded
//! into a [`WordStore`](crate::game::WordStore).

use super::WORDS;
use std::fs;
use std::io;
use std::path::Path;

/// Where the candidate words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-delimited file
    File(String),
}

impl WordSource {
    /// Interpret a command-line value: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("embedded") {
            Self::Embedded
        } else {
            Self::File(arg.to_string())
        }
    }

    /// Read every candidate line from this source
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be opened or read.
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        match self {
            Self::Embedded => Ok(WORDS.iter().map(|&w| w.to_string()).collect()),
            Self::File(path) => load_from_file(path),
        }
    }
}

/// Load candidate lines from a file
///
/// Blank lines are dropped; everything else is passed through trimmed.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_quest::wordlists::loader::load_from_file;
///
/// let lines = load_from_file("words.txt").unwrap();
/// println!("Read {} candidate words", lines.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(lines_from_str(&content))
}

/// Split newline-delimited text into trimmed, non-empty lines
#[must_use]
pub fn lines_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
