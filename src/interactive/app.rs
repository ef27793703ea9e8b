//! TUI application state and logic

use crate::core::Classification;
use crate::engine::ClassificationEvent;
use crate::round::{RoundController, RoundState, SecretPicker};
use crate::session::{Command, InputOutcome, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

/// Redraw interval while idle, so notices expire on screen
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App<'a, P: SecretPicker> {
    pub session: Session<'a, P>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Won games by guess count
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }

    fn record(&mut self, state: RoundState, guesses: usize) {
        self.total_games += 1;
        if state == RoundState::Won {
            self.games_won += 1;
            *self.guess_distribution.entry(guesses).or_insert(0) += 1;
        }
    }
}

impl<'a, P: SecretPicker> App<'a, P> {
    #[must_use]
    pub fn new(round: RoundController<'a, P>) -> Self {
        let length = round.word_length();
        let mut app = Self {
            session: Session::new(round),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!("Guess the {length}-letter word. Scores count shared letters."),
            MessageStyle::Info,
        );
        app
    }

    /// Map a key press to a session command and apply it
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let command = if self.session.round().state().is_finished() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Enter | KeyCode::Char('n') => Command::Continue,
                _ => return,
            }
        } else {
            match key.code {
                KeyCode::Char(c) => Command::Letter(c),
                KeyCode::Backspace => Command::Delete,
                KeyCode::Enter => Command::Submit,
                KeyCode::Esc => Command::GiveUp,
                _ => return,
            }
        };

        let outcome = self.session.handle(command, now);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: InputOutcome) {
        match outcome {
            InputOutcome::Played(submission) => {
                if !submission.is_win() {
                    self.add_message(
                        &format!("{} scores {}", submission.word, submission.score),
                        MessageStyle::Info,
                    );
                }
                for event in &submission.events {
                    self.add_event(event);
                }
                if submission.state.is_finished() {
                    self.finish_round();
                }
            }
            InputOutcome::GaveUp => self.finish_round(),
            InputOutcome::Continued => {
                self.messages.clear();
                self.add_message("New word chosen!", MessageStyle::Info);
            }
            InputOutcome::ContinueFailed(error) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
            }
            // Rejections show through the session notice
            _ => {}
        }
    }

    fn finish_round(&mut self) {
        let status = self.session.round().status();
        self.stats.record(status.state, status.guesses);

        let secret = status.secret.map(ToString::to_string).unwrap_or_default();
        if status.state == RoundState::Won {
            let text = format!("🎉 Solved {secret} in {} guesses!", status.guesses);
            self.add_message(&text, MessageStyle::Success);
        } else {
            self.add_message(&format!("The word was {secret}"), MessageStyle::Error);
        }
        self.add_message(
            "Press Enter or 'n' for a new word, 'q' to quit.",
            MessageStyle::Info,
        );
    }

    fn add_event(&mut self, event: &ClassificationEvent) {
        let style = match event.classification {
            Classification::Right => MessageStyle::Success,
            _ => MessageStyle::Info,
        };
        self.add_message(
            &format!(
                "{} is {} ({})",
                char::from(event.letter),
                event.classification,
                event.source
            ),
            style,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
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
pub fn run_tui<P: SecretPicker>(app: App<'_, P>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, P: SecretPicker>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, P>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key, Instant::now());
            }
        }
    }

    tracing::info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::round::Dictionary;
    use crate::round::testing::{ScriptedPicker, dictionary};

    fn app<'a>(dictionary: &'a Dictionary, script: &[&'static str]) -> App<'a, ScriptedPicker> {
        let picker = ScriptedPicker::new(script);
        let round = RoundController::new(GameConfig::default(), dictionary, picker).unwrap();
        App::new(round)
    }

    fn press(app: &mut App<'_, ScriptedPicker>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    fn type_word(app: &mut App<'_, ScriptedPicker>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn win_updates_statistics() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, &["WORD", "RAIN"]);

        type_word(&mut app, "wore");
        type_word(&mut app, "word");

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution.get(&2), Some(&1));
        let success = |m: &Message| m.style == MessageStyle::Success;
        assert!(app.messages.iter().any(success));
    }

    #[test]
    fn escape_gives_up_then_enter_continues() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, &["WORD", "RAIN"]);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.round().state(), RoundState::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        // Letters do nothing once the round is over
        press(&mut app, KeyCode::Char('w'));
        assert!(app.session.buffer().is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.round().state(), RoundState::InProgress);
        assert!(!app.should_quit);
    }

    #[test]
    fn q_is_a_letter_during_play() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, &["WORD"]);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.session.buffer().text(), "Q");

        press(&mut app, KeyCode::Backspace);
        assert!(app.session.buffer().is_empty());
    }

    #[test]
    fn ctrl_c_quits() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, &["WORD"]);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, &["WORD"]);
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 8);
        assert_eq!(app.messages[7].text, "message 19");
    }
}
