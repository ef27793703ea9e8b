//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond error derivation. All types here are pure and independently testable.

mod classification;
mod score;
pub(crate) mod word;

pub use classification::Classification;
pub use score::score;
pub use word::{LetterSet, Word, WordError, letter_index, letters_of};
