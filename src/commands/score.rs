//! Score command
//!
//! Scores a fixed guess sequence against a known secret and reports what the
//! engine deduces. No dictionary is consulted.

use crate::core::{Word, score};
use crate::engine::{Board, ClassificationEvent};
use anyhow::{Context, Result, bail};

/// One scored guess
#[derive(Debug, Clone)]
pub struct ScoreStep {
    pub guess: Word,
    pub score: usize,
    /// Classifications first learned from this guess
    pub events: Vec<ClassificationEvent>,
}

#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub secret: Word,
    pub steps: Vec<ScoreStep>,
    pub solved: bool,
    /// Final state after every step
    pub board: Board,
}

/// Play `guesses` against `secret`
///
/// Guesses after the secret is found are ignored.
///
/// # Errors
///
/// Returns an error if a word is not alphabetic or its length differs from the
/// secret's.
pub fn score_guesses<S: AsRef<str>>(secret: &str, guesses: &[S]) -> Result<ScoreReport> {
    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    let mut board = Board::new(secret.len());
    let mut steps = Vec::with_capacity(guesses.len());
    let mut solved = false;

    for text in guesses {
        let text = text.as_ref();
        let guess = Word::new(text).with_context(|| format!("invalid guess '{text}'"))?;
        if guess.len() != secret.len() {
            bail!(
                "guess '{guess}' has {} letters, secret has {}",
                guess.len(),
                secret.len()
            );
        }

        if solved {
            tracing::warn!(%guess, "ignoring guess after the secret was found");
            continue;
        }

        if guess == secret {
            let events = board.solve(&guess);
            steps.push(ScoreStep {
                score: secret.len(),
                guess,
                events,
            });
            solved = true;
            continue;
        }

        let guess_score = score(&guess, &secret);
        let events = board.record_guess(guess.clone(), guess_score);
        steps.push(ScoreStep {
            guess,
            score: guess_score,
            events,
        });
    }

    Ok(ScoreReport {
        secret,
        steps,
        solved,
        board,
    })
}
