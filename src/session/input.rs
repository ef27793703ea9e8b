//! Input boundary
//!
//! Discrete commands from a keyboard (physical or on-screen) are buffered and
//! forwarded to the [`RoundController`]. A typed letter stays disabled until it is
//! deleted, so a buffered guess never repeats a letter.

use super::Notice;
use crate::round::{
    RandomPicker, RoundController, RoundError, SecretPicker, SubmitError, Submission,
};
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    Delete,
    Submit,
    GiveUp,
    Continue,
}

/// Why a letter was not typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterRejection {
    Full,
    NotALetter,
    AlreadyTyped,
    /// Confirmed wrong, or excluded once every secret letter is known
    Unselectable,
}

impl fmt::Display for LetterRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Full => "word is complete",
            Self::NotALetter => "not a letter",
            Self::AlreadyTyped => "letter already typed",
            Self::Unselectable => "letter ruled out",
        };
        f.write_str(text)
    }
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Typed(u8),
    LetterRejected(LetterRejection),
    Deleted(u8),
    Played(Submission),
    Rejected(SubmitError),
    GaveUp,
    Continued,
    ContinueFailed(RoundError),
    Ignored,
}

/// Display state of one on-screen key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Available,
    Typed,
    Disabled,
}

/// Letters of the guess being typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    letters: Vec<u8>,
    capacity: usize,
}

impl InputBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a letter; false if the buffer is full
    pub fn push(&mut self, letter: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.letters.push(letter);
        true
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.capacity
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&c| char::from(c)).collect()
    }
}

/// A round plus its typing buffer and rejection banner
pub struct Session<'a, P: SecretPicker = RandomPicker> {
    round: RoundController<'a, P>,
    buffer: InputBuffer,
    notice: Notice,
}

impl<'a, P: SecretPicker> Session<'a, P> {
    #[must_use]
    pub fn new(round: RoundController<'a, P>) -> Self {
        Self {
            buffer: InputBuffer::new(round.word_length()),
            notice: Notice::new(round.config().notice_duration),
            round,
        }
    }

    /// Apply one command
    ///
    /// While the round is finished only `Continue` does anything; while it is in
    /// progress `Continue` is ignored.
    pub fn handle(&mut self, command: Command, now: Instant) -> InputOutcome {
        if let Command::Continue = command {
            return self.continue_round();
        }
        if self.round.state().is_finished() {
            return InputOutcome::Ignored;
        }

        match command {
            Command::Letter(c) => self.type_letter(c),
            Command::Delete => self
                .buffer
                .pop()
                .map_or(InputOutcome::Ignored, InputOutcome::Deleted),
            Command::Submit => self.submit(now),
            Command::GiveUp => {
                self.round.give_up();
                self.buffer.clear();
                InputOutcome::GaveUp
            }
            Command::Continue => InputOutcome::Ignored,
        }
    }

    fn type_letter(&mut self, c: char) -> InputOutcome {
        if !c.is_ascii_alphabetic() {
            return InputOutcome::LetterRejected(LetterRejection::NotALetter);
        }
        let letter = c.to_ascii_uppercase() as u8;

        let rejection = if self.buffer.is_full() {
            Some(LetterRejection::Full)
        } else if self.buffer.contains(letter) {
            Some(LetterRejection::AlreadyTyped)
        } else if !self.round.keyboard().is_selectable(letter) {
            Some(LetterRejection::Unselectable)
        } else {
            None
        };

        match rejection {
            Some(reason) => InputOutcome::LetterRejected(reason),
            None => {
                self.buffer.push(letter);
                InputOutcome::Typed(letter)
            }
        }
    }

    fn submit(&mut self, now: Instant) -> InputOutcome {
        if !self.buffer.is_full() {
            return InputOutcome::Ignored;
        }

        match self.round.submit(&self.buffer.text()) {
            Ok(submission) => {
                self.buffer.clear();
                InputOutcome::Played(submission)
            }
            Err(error) => {
                let message = self.round.config().message_for(&error).to_string();
                self.notice.show(message, now);
                InputOutcome::Rejected(error)
            }
        }
    }

    fn continue_round(&mut self) -> InputOutcome {
        if !self.round.state().is_finished() {
            return InputOutcome::Ignored;
        }
        match self.round.continue_round() {
            Ok(()) => {
                self.buffer.clear();
                self.notice.dismiss();
                InputOutcome::Continued
            }
            Err(error) => InputOutcome::ContinueFailed(error),
        }
    }

    /// Drop every typed letter
    pub fn clear_input(&mut self) {
        self.buffer.clear();
    }

    /// How an on-screen key for `letter` should be drawn
    #[must_use]
    pub fn key_state(&self, letter: u8) -> KeyState {
        if self.buffer.contains(letter) {
            KeyState::Typed
        } else if self.round.keyboard().is_selectable(letter) {
            KeyState::Available
        } else {
            KeyState::Disabled
        }
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &RoundController<'a, P> {
        &self.round
    }

    #[inline]
    pub fn round_mut(&mut self) -> &mut RoundController<'a, P> {
        &mut self.round
    }

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub const fn notice(&self) -> &Notice {
        &self.notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::round::testing::{ScriptedPicker, dictionary};
    use crate::round::{Dictionary, RoundState};

    fn type_word<P: SecretPicker>(
        session: &mut Session<'_, P>,
        text: &str,
        now: Instant,
    ) -> InputOutcome {
        for c in text.chars() {
            session.handle(Command::Letter(c), now);
        }
        session.handle(Command::Submit, now)
    }

    fn session<'a>(
        dictionary: &'a Dictionary,
        script: &[&'static str],
    ) -> Session<'a, ScriptedPicker> {
        let picker = ScriptedPicker::new(script);
        let round = RoundController::new(GameConfig::default(), dictionary, picker).unwrap();
        Session::new(round)
    }

    #[test]
    fn buffer_rejects_fifth_letter() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, &["WORD"]);
        let now = Instant::now();

        for c in "BOLT".chars() {
            assert!(matches!(session.handle(Command::Letter(c), now), InputOutcome::Typed(_)));
        }
        assert_eq!(
            session.handle(Command::Letter('X'), now),
            InputOutcome::LetterRejected(LetterRejection::Full)
        );
        assert_eq!(session.buffer().text(), "BOLT");
    }

    #[test]
    fn typed_letter_is_disabled_until_deleted() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, &["WORD"]);
        let now = Instant::now();

        session.handle(Command::Letter('a'), now);
        assert_eq!(session.key_state(b'A'), KeyState::Typed);
        assert_eq!(
            session.handle(Command::Letter('A'), now),
            InputOutcome::LetterRejected(LetterRejection::AlreadyTyped)
        );

        assert_eq!(session.handle(Command::Delete, now), InputOutcome::Deleted(b'A'));
        assert_eq!(session.key_state(b'A'), KeyState::Available);
        assert_eq!(session.handle(Command::Delete, now), InputOutcome::Ignored);
    }

    #[test]
    fn non_letters_are_rejected() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, &["WORD"]);
        assert_eq!(
            session.handle(Command::Letter('4'), Instant::now()),
            InputOutcome::LetterRejected(LetterRejection::NotALetter)
        );
    }

    #[test]
    fn short_submit_is_ignored() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, &["WORD"]);
        let now = Instant::now();

        session.handle(Command::Letter('W'), now);
        assert_eq!(session.handle(Command::Submit, now), InputOutcome::Ignored);
        assert_eq!(session.round().guess_count(), 0);
    }

    #[test]
    fn rejection_shows_notice_and_keeps_buffer() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, &["WORD"]);
        let now = Instant::now();

        assert_eq!(
            type_word(&mut session, "ZYXW", now),
            InputOutcome::Rejected(SubmitError::InvalidWord)
        );
        assert_eq!(session.buffer().text(), "ZYXW");
        assert_eq!(session.notice().current(now), Some("Not in word list"));
    }

    #[test]
    fn played_guess_clears_buffer_and_disables_wrong_letters() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, &["WORD"]);
        let now = Instant::now();

        let outcome = type_word(&mut session, "CALF", now);
        assert!(matches!(outcome, InputOutcome::Played(ref s) if s.score == 0));
        assert!(session.buffer().is_empty());

        assert_eq!(session.key_state(b'C'), KeyState::Disabled);
        assert_eq!(
            session.handle(Command::Letter('C'), now),
            InputOutcome::LetterRejected(LetterRejection::Unselectable)
        );
    }

    #[test]
    fn finished_round_only_accepts_continue() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, &["WORD", "RAIN"]);
        let now = Instant::now();

        assert_eq!(session.handle(Command::Continue, now), InputOutcome::Ignored);
        assert_eq!(session.handle(Command::GiveUp, now), InputOutcome::GaveUp);
        assert_eq!(session.round().state(), RoundState::Lost);

        assert_eq!(session.handle(Command::Letter('W'), now), InputOutcome::Ignored);
        assert_eq!(session.handle(Command::Submit, now), InputOutcome::Ignored);

        assert_eq!(session.handle(Command::Continue, now), InputOutcome::Continued);
        assert_eq!(session.round().state(), RoundState::InProgress);
    }

    #[test]
    fn winning_through_input() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, &["WORD"]);
        let now = Instant::now();

        type_word(&mut session, "WORE", now);
        let outcome = type_word(&mut session, "WORD", now);
        assert!(matches!(outcome, InputOutcome::Played(ref s) if s.is_win()));
        assert_eq!(session.round().status().guesses, 2);
    }

    #[test]
    fn every_secret_can_be_typed() {
        let dictionary = Dictionary::from_strs(4, &["BOOK", "WORD", "RAIN"], &["BOLT"]);
        let now = Instant::now();

        for secret in dictionary.secrets() {
            let picker = RandomPicker::seeded(7);
            let round = RoundController::new(GameConfig::default(), &dictionary, picker).unwrap();
            let mut session = Session::new(round);
            for c in secret.text().chars() {
                assert_eq!(
                    session.handle(Command::Letter(c), now),
                    InputOutcome::Typed(c as u8)
                );
            }
            session.clear_input();
        }
        assert_eq!(dictionary.secrets().len(), 2);
    }
}
