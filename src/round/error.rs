//! Rejection and round lifecycle errors

use thiserror::Error;

/// Why a submitted word was not played
///
/// None of these end the round; the caller shows a message and keeps the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("word must have {expected} letters, got {actual}")]
    IncompleteWord { expected: usize, actual: usize },
    #[error("word was already guessed this round")]
    AlreadyGuessed,
    #[error("word is not in the word list")]
    InvalidWord,
    #[error("round is over")]
    RoundOver,
}

/// Errors starting or resetting a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("no secret words of the configured length")]
    NoSecrets,
    #[error("no secret word differs from the previous one")]
    NoAlternativeSecret,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("round is still in progress")]
    NotFinished,
}
