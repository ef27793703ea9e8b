//! Round state machine
//!
//! `InProgress → Won | Lost`, and `Won | Lost → InProgress` through
//! [`RoundController::continue_round`]. Every other transition is refused.

use super::{Dictionary, RandomPicker, RoundError, SecretPicker, SubmitError};
use crate::config::GameConfig;
use crate::core::{Word, score};
use crate::engine::{
    Board, ClassificationEvent, ClassificationSink, GuessRecord, KeyboardView, LetterKnowledge,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Display snapshot of the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStatus<'r> {
    pub guesses: usize,
    pub max_guesses: usize,
    pub state: RoundState,
    /// Revealed only once the round is finished
    pub secret: Option<&'r Word>,
}

/// Result of a played guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub word: Word,
    pub score: usize,
    /// Classifications learned from this guess, in order
    pub events: Vec<ClassificationEvent>,
    pub state: RoundState,
}

impl Submission {
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.state == RoundState::Won
    }
}

/// Drives one round at a time: validation, scoring, inference, win/loss
pub struct RoundController<'a, P: SecretPicker = RandomPicker> {
    config: GameConfig,
    dictionary: &'a Dictionary,
    picker: P,
    secret: Word,
    board: Board,
    history: Vec<Word>,
    state: RoundState,
    sinks: Vec<Box<dyn ClassificationSink + 'a>>,
}

impl<'a, P: SecretPicker> RoundController<'a, P> {
    /// Start the first round
    ///
    /// # Errors
    /// Returns `RoundError::InvalidConfig` if the configuration is unplayable or does
    /// not match the dictionary's word length, and `RoundError::NoSecrets` if there is
    /// nothing to pick.
    pub fn new(
        config: GameConfig,
        dictionary: &'a Dictionary,
        mut picker: P,
    ) -> Result<Self, RoundError> {
        config.validate()?;
        if dictionary.word_length() != config.word_length {
            return Err(RoundError::InvalidConfig(format!(
                "dictionary holds {}-letter words, configured length is {}",
                dictionary.word_length(),
                config.word_length
            )));
        }

        let secret = picker
            .pick(dictionary.secrets(), None)
            .ok_or(RoundError::NoSecrets)?;

        tracing::info!(
            word_length = config.word_length,
            max_guesses = config.max_guesses,
            secrets = dictionary.secrets().len(),
            "round started"
        );
        tracing::debug!(%secret, "secret chosen");

        Ok(Self {
            board: Board::new(config.word_length),
            config,
            dictionary,
            picker,
            secret,
            history: Vec::new(),
            state: RoundState::InProgress,
            sinks: Vec::new(),
        })
    }

    /// Register a subscriber for classification events
    pub fn subscribe(&mut self, sink: impl ClassificationSink + 'a) {
        self.sinks.push(Box::new(sink));
    }

    /// Validate, score and apply a guess
    ///
    /// # Errors
    /// Returns the rejection kind; a rejected word leaves the round untouched.
    pub fn submit(&mut self, text: &str) -> Result<Submission, SubmitError> {
        let result = self.try_submit(text);
        if let Err(error) = &result {
            tracing::debug!(guess = text, %error, "guess rejected");
        }
        result
    }

    fn try_submit(&mut self, text: &str) -> Result<Submission, SubmitError> {
        if self.state.is_finished() {
            return Err(SubmitError::RoundOver);
        }

        let actual = text.chars().count();
        if actual != self.config.word_length {
            return Err(SubmitError::IncompleteWord {
                expected: self.config.word_length,
                actual,
            });
        }

        let word = Word::new(text).map_err(|_| SubmitError::InvalidWord)?;

        if self.history.contains(&word) {
            return Err(SubmitError::AlreadyGuessed);
        }

        if !self.dictionary.is_accepted(&word) {
            return Err(SubmitError::InvalidWord);
        }

        self.history.push(word.clone());

        if word == self.secret {
            self.state = RoundState::Won;
            let events = self.board.solve(&word);
            self.publish(&events);
            tracing::info!(guesses = self.history.len(), "round won");

            return Ok(Submission {
                score: self.config.word_length,
                word,
                events,
                state: self.state,
            });
        }

        let guess_score = score(&word, &self.secret);
        tracing::debug!(guess = %word, score = guess_score, "guess played");

        let events = self.board.record_guess(word.clone(), guess_score);
        self.publish(&events);

        if self.history.len() >= self.config.max_guesses {
            self.state = RoundState::Lost;
            tracing::info!(guesses = self.history.len(), "round lost");
        }

        Ok(Submission {
            word,
            score: guess_score,
            events,
            state: self.state,
        })
    }

    /// Concede the round without scoring another guess
    ///
    /// Returns false if the round was already finished.
    pub fn give_up(&mut self) -> bool {
        if self.state.is_finished() {
            return false;
        }
        self.state = RoundState::Lost;
        tracing::info!(guesses = self.history.len(), "round given up");
        true
    }

    /// Start the next round with a different secret
    ///
    /// # Errors
    /// Returns `RoundError::NotFinished` while the round is in progress and
    /// `RoundError::NoAlternativeSecret` if every secret equals the current one;
    /// in both cases nothing changes.
    pub fn continue_round(&mut self) -> Result<(), RoundError> {
        if !self.state.is_finished() {
            return Err(RoundError::NotFinished);
        }

        let secret = self
            .picker
            .pick(self.dictionary.secrets(), Some(&self.secret))
            .ok_or(RoundError::NoAlternativeSecret)?;

        self.secret = secret;
        self.board.clear();
        self.history.clear();
        self.state = RoundState::InProgress;

        tracing::info!("round started");
        tracing::debug!(secret = %self.secret, "secret chosen");
        Ok(())
    }

    fn publish(&mut self, events: &[ClassificationEvent]) {
        for sink in &mut self.sinks {
            for event in events {
                sink.classified(event);
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Guesses played this round, winning guess included
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// Every accepted word this round, in order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.config.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        self.board.knowledge()
    }

    /// Scored non-winning guesses
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        self.board.records()
    }

    #[inline]
    #[must_use]
    pub fn keyboard(&self) -> KeyboardView {
        self.board.keyboard()
    }

    /// The secret, once the round is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.state.is_finished().then_some(&self.secret)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus<'_> {
        RoundStatus {
            guesses: self.guess_count(),
            max_guesses: self.config.max_guesses,
            state: self.state,
            secret: self.revealed_secret(),
        }
    }
}
