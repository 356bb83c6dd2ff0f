//! TUI application state and logic

use crate::game::{
    Difficulty, GameConfig, GuessOutcome, RejectReason, Round, SessionStats, load_round,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub words: Vec<String>,
    pub config: GameConfig,
    pub rng: StdRng,
    /// Fixed difficulty from the command line, if any
    pub preset_difficulty: Option<Difficulty>,
    pub difficulty: Difficulty,
    pub round: Option<Round>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    ChoosingDifficulty,
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(
        words: Vec<String>,
        config: GameConfig,
        preset_difficulty: Option<Difficulty>,
        rng: StdRng,
    ) -> Self {
        let mut app = Self {
            words,
            config,
            rng,
            preset_difficulty,
            difficulty: preset_difficulty.unwrap_or_default(),
            round: None,
            input_mode: InputMode::ChoosingDifficulty,
            messages: Vec::new(),
            stats: SessionStats::default(),
            should_quit: false,
        };

        app.add_message("Welcome to Word Quest!", MessageStyle::Info);
        if let Some(level) = preset_difficulty {
            app.start_round(level);
        } else {
            app.add_message(
                "Choose a level: 1=Easy, 2=Medium, 3=Hard",
                MessageStyle::Info,
            );
        }
        app
    }

    /// Handle a key typed on the difficulty menu
    pub fn choose_difficulty(&mut self, key: char) {
        let choice = Difficulty::from_choice(&key.to_string());
        if choice.fell_back {
            self.add_message("Invalid. Default: Medium", MessageStyle::Error);
        }
        self.start_round(choice.difficulty);
    }

    /// Build a fresh round from the word list
    pub fn start_round(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        match load_round(&self.words, difficulty.lives(), &self.config, &mut self.rng) {
            Ok(round) => {
                debug!("tui round started at {difficulty}");
                self.round = Some(round);
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    &format!("{difficulty}: {} lives. Guess a letter!", difficulty.lives()),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                self.round = None;
                self.input_mode = InputMode::RoundOver;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Apply a typed character to the current round
    pub fn handle_guess(&mut self, input: char) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let outcome = round.submit_guess(input);
        let (text, style) = match &outcome {
            GuessOutcome::Rejected(RejectReason::NotALetter) => {
                ("Only letters allowed.".to_string(), MessageStyle::Error)
            }
            GuessOutcome::Rejected(RejectReason::AlreadyGuessed) => (
                format!("Already guessed '{}'.", input.to_ascii_lowercase()),
                MessageStyle::Error,
            ),
            GuessOutcome::Rejected(RejectReason::RoundOver) => {
                ("The round is already over.".to_string(), MessageStyle::Error)
            }
            GuessOutcome::Correct => ("Correct!".to_string(), MessageStyle::Success),
            GuessOutcome::Incorrect(lives) => {
                (format!("Wrong! {lives} lives left."), MessageStyle::Error)
            }
            GuessOutcome::Won(secret) => {
                (format!("🎉 You won! Word: {secret}"), MessageStyle::Success)
            }
            GuessOutcome::Lost(secret) => {
                (format!("💀 You lost! Word was: {secret}"), MessageStyle::Error)
            }
        };

        if round.is_over() {
            self.stats.record(round.status());
            self.input_mode = InputMode::RoundOver;
        }

        self.add_message(&text, style);
        if self.input_mode == InputMode::RoundOver {
            self.add_message("Play again? (y/n)", MessageStyle::Info);
        }
    }

    /// Start over after a finished round
    pub fn play_again(&mut self) {
        if let Some(level) = self.preset_difficulty {
            self.start_round(level);
        } else {
            self.round = None;
            self.input_mode = InputMode::ChoosingDifficulty;
            self.add_message(
                "Choose a level: 1=Easy, 2=Medium, 3=Hard",
                MessageStyle::Info,
            );
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
            {
                app.should_quit = true;
            } else {
                match (app.input_mode, key.code) {
                    (InputMode::ChoosingDifficulty, KeyCode::Char(c)) => app.choose_difficulty(c),
                    (InputMode::Guessing, KeyCode::Char(c)) => app.handle_guess(c),
                    (InputMode::RoundOver, KeyCode::Char('y' | 'Y')) => app.play_again(),
                    (InputMode::RoundOver, KeyCode::Char('n' | 'N' | 'q')) => {
                        app.should_quit = true;
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app_with(words: &[&str], preset: Option<Difficulty>) -> App {
        App::new(
            words.iter().map(|w| (*w).to_string()).collect(),
            GameConfig::default(),
            preset,
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn starts_on_difficulty_menu() {
        let app = app_with(&["cat"], None);
        assert_eq!(app.input_mode, InputMode::ChoosingDifficulty);
        assert!(app.round.is_none());
    }

    #[test]
    fn preset_difficulty_starts_round() {
        let app = app_with(&["cat"], Some(Difficulty::Easy));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round.as_ref().map(Round::lives), Some(8));
    }

    #[test]
    fn invalid_menu_key_falls_back() {
        let mut app = app_with(&["cat"], None);
        app.choose_difficulty('x');
        assert_eq!(app.difficulty, Difficulty::Medium);
        assert_eq!(app.round.as_ref().map(Round::lives), Some(6));
    }

    #[test]
    fn winning_updates_stats_and_mode() {
        let mut app = app_with(&["cat"], None);
        app.choose_difficulty('3');
        for c in ['c', 'a', 't'] {
            app.handle_guess(c);
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_won, 1);
    }

    #[test]
    fn play_again_returns_to_menu() {
        let mut app = app_with(&["ox"], None);
        app.choose_difficulty('1');
        app.handle_guess('o');
        app.handle_guess('x');
        app.play_again();

        assert_eq!(app.input_mode, InputMode::ChoosingDifficulty);
        assert!(app.round.is_none());
    }

    #[test]
    fn no_words_is_reported() {
        let mut app = app_with(&["42"], None);
        app.choose_difficulty('2');

        assert!(app.round.is_none());
        assert!(app.messages.iter().any(|m| m.text == "No words loaded"));
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app_with(&["cat"], None);
        for i in 0..20 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 6);
        assert_eq!(app.messages.last().map(|m| m.text.as_str()), Some("msg 19"));
    }
}
