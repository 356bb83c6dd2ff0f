//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::game::spaced;
use crate::output::formatters::lives_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD QUEST")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Word
            Constraint::Length(3), // Lives gauge
            Constraint::Length(3), // Wrong guesses
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_lives(f, app, chunks[1]);
    render_wrong(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.round {
        Some(round) if round.is_over() => vec![
            Line::from(""),
            Line::from(Span::styled(
                spaced(&round.secret().text().chars().collect::<Vec<_>>()).to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ],
        Some(round) => vec![
            Line::from(""),
            Line::from(Span::styled(
                round.masked_string().to_uppercase(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("{} letters", round.secret().len())),
        ],
        None => vec![Line::from(""), Line::from("No round in progress")],
    };

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let (lives, starting) = app
        .round
        .as_ref()
        .map_or((0, app.difficulty.lives()), |r| (r.lives(), r.starting_lives()));

    let percent = if starting == 0 {
        0
    } else {
        (u64::from(lives) * 100 / u64::from(starting)) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .percent(percent)
        .label(format!("{} {lives}/{starting}", lives_bar(lives, starting)));

    f.render_widget(gauge, area);
}

fn render_wrong(f: &mut Frame, app: &App, area: Rect) {
    let wrong = app
        .round
        .as_ref()
        .map(|r| r.render_wrong_history())
        .unwrap_or_default();

    let text = if wrong.is_empty() {
        "-".to_string()
    } else {
        spaced(&wrong).to_uppercase()
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title(" Wrong ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::ChoosingDifficulty => (" Choose level: 1=Easy 2=Medium 3=Hard ", Color::Cyan),
        InputMode::Guessing => (" Type a letter to guess ", Color::Yellow),
        InputMode::RoundOver => (" Play again? y/n ", Color::Green),
    };

    let guessed = app
        .round
        .as_ref()
        .map(|r| {
            let letters: Vec<char> = r.guessed_letters().iter().map(|&b| char::from(b)).collect();
            format!("Guessed: {}", spaced(&letters))
        })
        .unwrap_or_default();

    let input = Paragraph::new(guessed)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let level = Paragraph::new(format!("Level: {}", app.difficulty)).alignment(Alignment::Center);
    f.render_widget(level, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc / Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
