//! Word Quest - CLI
//!
//! Word-guessing game with TUI and console modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use word_quest::{
    commands::{SessionOptions, check_word, rank_words, run_simple},
    core::{DEFAULT_MAX_WORD_LEN, DEFAULT_POOL_CAPACITY},
    game::{Difficulty, GameConfig},
    output::{print_check_result, print_rank_result, print_session_summary},
    wordlists::loader::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_quest",
    about = "Guess the secret word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Difficulty: 1/easy, 2/medium, 3/hard (prompted for if omitted)
    #[arg(short, long, global = true)]
    difficulty: Option<String>,

    /// Maximum number of words loaded from the list
    #[arg(long, global = true, default_value_t = DEFAULT_POOL_CAPACITY)]
    max_words: usize,

    /// Maximum accepted word length
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_len: usize,

    /// Seed for reproducible secret selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode without TUI
    Simple,

    /// List the longest words in the word list
    Rank {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Check whether a word is in the word list
    Check {
        /// Word to look up
        word: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = session_options(&cli);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&options),
        Commands::Simple => run_simple(&options).map(|_| ()),
        Commands::Rank { count } => {
            let store = options.load_store()?;
            print_rank_result(&rank_words(&store, count));
            Ok(())
        }
        Commands::Check { word } => {
            let store = options.load_store()?;
            print_check_result(&check_word(&store, &word));
            Ok(())
        }
    }
}

fn session_options(cli: &Cli) -> SessionOptions {
    let difficulty = cli.difficulty.as_deref().map(|input| {
        let choice = Difficulty::from_choice(input);
        if choice.fell_back {
            eprintln!("{}", "Invalid. Default: Medium".yellow());
        }
        choice.difficulty
    });

    SessionOptions {
        source: WordSource::from_arg(&cli.words),
        config: GameConfig::new(cli.max_words, cli.max_word_len),
        difficulty,
        seed: cli.seed,
    }
}

fn run_play_command(options: &SessionOptions) -> Result<()> {
    use word_quest::interactive::{App, run_tui};

    // Fail before touching the terminal if the list is unusable
    let words = options.read_usable_lines()?;

    let app = App::new(words, options.config, options.difficulty, options.rng());
    let stats = run_tui(app)?;
    print_session_summary(&stats);
    Ok(())
}
