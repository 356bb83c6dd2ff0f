//! Display functions for console play and command results

use super::formatters::{lives_bar, wrong_line};
use crate::commands::{CheckResult, RankResult};
use crate::game::{GuessOutcome, RejectReason, Round, RoundStatus, SessionStats};
use colored::Colorize;

/// Print the title banner
pub fn print_banner() {
    println!("\n{}", "═".repeat(40).cyan());
    println!("{}", "              Word Quest".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
}

/// Print the masked word, lives and wrong guesses
pub fn print_round_state(round: &Round) {
    println!(
        "\nWord:  {}",
        round.masked_string().bright_white().bold()
    );
    println!(
        "Lives: {} ({})",
        lives_bar(round.lives(), round.starting_lives()).red(),
        round.lives()
    );
}

/// Print the reaction to a single guess
pub fn print_outcome(outcome: &GuessOutcome, input: char, round: &Round) {
    match outcome {
        GuessOutcome::Rejected(RejectReason::NotALetter) => {
            println!("{}", "Only letters allowed.".yellow());
        }
        GuessOutcome::Rejected(RejectReason::AlreadyGuessed) => {
            println!(
                "{}",
                format!("Already guessed '{}'.", input.to_ascii_lowercase()).yellow()
            );
        }
        GuessOutcome::Rejected(RejectReason::RoundOver) => {
            println!("{}", "The round is already over.".yellow());
        }
        GuessOutcome::Correct | GuessOutcome::Won(_) => {
            println!("{}", "Correct!".green().bold());
            println!("{}", wrong_line(&round.render_wrong_history()).bright_black());
        }
        GuessOutcome::Incorrect(_) | GuessOutcome::Lost(_) => {
            println!("{}", "Wrong!".red().bold());
            println!("{}", wrong_line(&round.render_wrong_history()).bright_black());
        }
    }
}

/// Print the win or loss banner revealing the secret
pub fn print_round_result(round: &Round) {
    match round.status() {
        RoundStatus::Won => println!(
            "\n{} Word: {}",
            "🎉 You won!".bright_green().bold(),
            round.secret().text().bright_yellow().bold()
        ),
        RoundStatus::Lost => println!(
            "\n{} Word was: {}",
            "💀 You lost!".red().bold(),
            round.secret().text().bright_yellow().bold()
        ),
        RoundStatus::InProgress => {}
    }
}

/// Print rounds played and win rate
pub fn print_session_summary(stats: &SessionStats) {
    println!(
        "\nRounds: {} | Won: {} | Win rate: {:.0}%",
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate()
    );
}

/// Print the longest loaded words
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} ({} of {} words)",
        "LONGEST WORDS".bright_cyan().bold(),
        result.entries.len(),
        result.total_words
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, (word, score)) in result.entries.iter().enumerate() {
        println!(
            "  {:>3}. {:<20} {}",
            (i + 1).to_string().bright_black(),
            word.bright_white(),
            score.to_string().bright_yellow()
        );
    }
}

/// Print whether a word is in the loaded list
pub fn print_check_result(result: &CheckResult) {
    if result.present {
        println!(
            "{} '{}' is in the word list",
            "✓".green().bold(),
            result.word.bright_white()
        );
    } else if result.is_prefix {
        println!(
            "{} '{}' is not in the word list, but starts a longer word",
            "✗".yellow().bold(),
            result.word.bright_white()
        );
    } else {
        println!(
            "{} '{}' is not in the word list",
            "✗".red().bold(),
            result.word.bright_white()
        );
    }
}
