//! Guess evaluation and letter-knowledge inference
//!
//! [`Board`] ties the pieces together: it records scored guesses, runs saturation
//! and cross-guess inference, and writes every conclusion into [`LetterKnowledge`].

mod board;
pub mod inference;
mod keyboard;
mod knowledge;
mod record;
pub mod saturation;

pub use board::Board;
pub use keyboard::KeyboardView;
pub use knowledge::{ClassificationEvent, ClassificationSink, Classified, LetterKnowledge, Source};
pub use record::{GuessRecord, TileView};

use crate::core::Classification;

/// A classification one of the rules has proven for a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deduction {
    pub letter: u8,
    pub classification: Classification,
}

impl Deduction {
    #[inline]
    #[must_use]
    pub const fn new(letter: u8, classification: Classification) -> Self {
        Self {
            letter,
            classification,
        }
    }
}
