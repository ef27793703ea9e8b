//! Single-guess saturation
//!
//! A guess of length N with score S has exactly S positions whose letter is in the
//! secret. Once the confirmed positions pin that number down, the remaining
//! unknown positions follow:
//!
//! - `wrong + S == N`: every unknown position must be right.
//! - `marked_right == S`: every unknown position must be wrong.

use super::{Deduction, GuessRecord, LetterKnowledge};
use crate::core::{Classification, letters_of};

/// Deductions that complete `record`'s unknown letters, if its counters allow it
///
/// Returns nothing when the guess has no unknown letters left or neither rule applies.
#[must_use]
pub fn resolve(record: &GuessRecord, knowledge: &LetterKnowledge) -> Vec<Deduction> {
    let mut remaining = record.unknown_letters(knowledge);
    if remaining == 0 {
        return Vec::new();
    }

    let mut deductions = Vec::new();
    let mut marked = record.marked_right_count();

    if record.wrong_count() + record.score() == record.word().len() {
        for letter in letters_of(remaining) {
            deductions.push(Deduction::new(letter, Classification::Right));
            marked += record.word().occurrences(letter);
        }
        remaining = 0;
    }

    if marked == record.score() {
        deductions.extend(
            letters_of(remaining).map(|letter| Deduction::new(letter, Classification::Wrong)),
        );
    }

    deductions
}
