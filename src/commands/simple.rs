//! Simple console mode
//!
//! Line-based game without the TUI: pick a difficulty, guess letters, play again.

use super::SessionOptions;
use crate::game::{Difficulty, Round, SessionStats, load_round};
use crate::output::{
    print_banner, print_outcome, print_round_result, print_round_state, print_session_summary,
};
use anyhow::Result;
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple console mode on stdin
///
/// # Errors
///
/// Returns an error if the word list cannot be read, holds no usable words, or
/// there's an I/O error reading user input.
pub fn run_simple(options: &SessionOptions) -> Result<SessionStats> {
    let stdin = io::stdin();
    let mut rng = options.rng();
    run_simple_with(options, &mut stdin.lock(), &mut rng)
}

/// Run the console mode against any line reader
///
/// Input ending early is treated as the player quitting.
///
/// # Errors
///
/// See [`run_simple`].
pub fn run_simple_with<B: BufRead, R: Rng>(
    options: &SessionOptions,
    input: &mut B,
    rng: &mut R,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();

    loop {
        // Each round starts from a fresh read of the source
        let lines = options.read_lines()?;
        let difficulty = match options.difficulty {
            Some(level) => level,
            None => match choose_difficulty(input)? {
                Some(level) => level,
                None => break,
            },
        };

        let mut round = load_round(&lines, difficulty.lives(), &options.config, rng)?;
        debug!("starting {difficulty} round with {} words", round.store().len());

        print_banner();
        play_round(&mut round, input)?;
        print_round_result(&round);
        stats.record(round.status());

        match prompt(input, "Play again? (y/n)")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") => {}
            _ => break,
        }
    }

    print_session_summary(&stats);
    println!("Bye!");
    Ok(stats)
}

/// Ask for a difficulty; `None` means input ended
fn choose_difficulty<B: BufRead>(input: &mut B) -> Result<Option<Difficulty>> {
    let Some(answer) = prompt(input, "Choose level (1=Easy, 2=Med, 3=Hard)")? else {
        return Ok(None);
    };

    let choice = Difficulty::from_choice(&answer);
    if choice.fell_back {
        println!("{}", "Invalid. Default: Medium".yellow());
    }
    Ok(Some(choice.difficulty))
}

/// Feed guesses to `round` until it ends or input runs out
///
/// Every non-blank character on a line counts as a guess of its own.
fn play_round<B: BufRead>(round: &mut Round, input: &mut B) -> Result<()> {
    while !round.is_over() {
        print_round_state(round);

        let Some(line) = prompt(input, "Your guess")? else {
            return Ok(());
        };
        submit_line(round, &line);
    }
    Ok(())
}

/// Submit the characters of `line` in order, dropping any left once the round ends
fn submit_line(round: &mut Round, line: &str) {
    for guess in line.chars().filter(|c| !c.is_whitespace()) {
        let outcome = round.submit_guess(guess);
        print_outcome(&outcome, guess, round);

        if round.is_over() {
            break;
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<B: BufRead>(input: &mut B, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
