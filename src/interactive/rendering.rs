//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::Classification;
use crate::engine::TileView;
use crate::output::formatters::KEYBOARD_ROWS;
use crate::round::{RoundState, SecretPicker};
use crate::session::KeyState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui<P: SecretPicker>(f: &mut Frame, app: &App<'_, P>, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, now, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔒 LETTERLOCK")
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

fn tile_style(classification: Classification) -> Style {
    match classification {
        Classification::Right => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Classification::Wrong => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        Classification::Unknown => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

fn render_board<P: SecretPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let round = app.session.round();
    let knowledge = round.knowledge();
    let records = round.records();

    let mut lines: Vec<Line> = round
        .history()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            // Only the winning guess has no record, and it is always last
            let score = records.get(i).map_or(round.word_length(), |r| r.score());
            let mut spans = vec![Span::styled(
                format!("{:>2}  ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            for tile in TileView::row(word, knowledge) {
                spans.push(Span::styled(
                    format!(" {} ", char::from(tile.letter)),
                    tile_style(tile.classification),
                ));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {score}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            Line::from(spans)
        })
        .collect();

    if !round.state().is_finished() {
        let typed = app.session.buffer().letters();
        let mut spans = vec![Span::styled(
            format!("{:>2}  ", round.guess_count() + 1),
            Style::default().fg(Color::DarkGray),
        )];
        for slot in 0..round.word_length() {
            let text = typed
                .get(slot)
                .map_or_else(|| " _ ".to_string(), |&c| format!(" {} ", char::from(c)));
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Guesses {}/{} ", round.guess_count(), round.max_guesses()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<P: SecretPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn key_style<P: SecretPicker>(app: &App<'_, P>, letter: u8) -> Style {
    match app.session.key_state(letter) {
        KeyState::Typed => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyState::Disabled => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        KeyState::Available => {
            if app.session.round().knowledge().get(letter) == Classification::Right {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            }
        }
    }
}

fn render_keyboard<P: SecretPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let mut spans = vec![Span::raw(" ".repeat(indent))];
            for letter in row.bytes() {
                spans.push(Span::styled(
                    char::from(letter).to_string(),
                    key_style(app, letter),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let title = if app.session.round().keyboard().is_locked() {
        " Keyboard (all letters found) "
    } else {
        " Keyboard "
    };
    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<P: SecretPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
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

fn render_input<P: SecretPicker>(f: &mut Frame, app: &App<'_, P>, now: Instant, area: Rect) {
    let status = app.session.round().status();

    let (title, content, color) = match (status.state, status.secret) {
        (RoundState::Won, Some(secret)) => (
            " 🎉 SOLVED! | Enter/n: new word | q: quit ".to_string(),
            format!("The word was {secret}"),
            Color::Green,
        ),
        (_, Some(secret)) => (
            " Round over | Enter/n: new word | q: quit ".to_string(),
            format!("The word was {secret}"),
            Color::Red,
        ),
        _ => match app.session.notice().current(now) {
            Some(notice) => (" Enter Guess ".to_string(), notice.to_string(), Color::Red),
            None => (
                " Enter Guess | Enter: submit | Backspace: delete | Esc: give up ".to_string(),
                app.session.buffer().text(),
                Color::Yellow,
            ),
        },
    };

    let input = Paragraph::new(content)
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

fn render_status<P: SecretPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate() * 100.0
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("Ctrl-C: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
