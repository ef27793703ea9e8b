//! Game configuration
//!
//! Built from CLI flags in the binary; `Default` matches the classic four-letter game.

use crate::round::{RoundError, SubmitError};
use std::time::Duration;

/// Rejection banner texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub invalid_word: String,
    pub already_guessed: String,
    pub incomplete_word: String,
    pub round_over: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_word: "Not in word list".to_string(),
            already_guessed: "Already guessed".to_string(),
            incomplete_word: "Not enough letters".to_string(),
            round_over: "Round is over".to_string(),
        }
    }
}

/// Settings for every round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per secret and guess (N)
    pub word_length: usize,
    /// Guesses before the round is lost
    pub max_guesses: usize,
    /// How long a rejection banner stays visible
    pub notice_duration: Duration,
    pub messages: Messages,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 4,
            max_guesses: 10,
            notice_duration: Duration::from_secs(2),
            messages: Messages::default(),
        }
    }
}

impl GameConfig {
    /// Check the settings can describe a playable round
    ///
    /// # Errors
    /// Returns `RoundError::InvalidConfig` for a zero or over-alphabet word length, or
    /// zero allowed guesses.
    pub fn validate(&self) -> Result<(), RoundError> {
        if self.word_length == 0 || self.word_length > 26 {
            return Err(RoundError::InvalidConfig(format!(
                "word length must be between 1 and 26, got {}",
                self.word_length
            )));
        }
        if self.max_guesses == 0 {
            return Err(RoundError::InvalidConfig(
                "at least one guess must be allowed".to_string(),
            ));
        }
        Ok(())
    }

    /// Banner text for a rejected submission
    #[must_use]
    pub fn message_for(&self, error: &SubmitError) -> &str {
        match error {
            SubmitError::IncompleteWord { .. } => &self.messages.incomplete_word,
            SubmitError::AlreadyGuessed => &self.messages.already_guessed,
            SubmitError::InvalidWord => &self.messages.invalid_word,
            SubmitError::RoundOver => &self.messages.round_over,
        }
    }
}
