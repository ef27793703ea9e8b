//! Selectable-letter projection of [`LetterKnowledge`]

use super::LetterKnowledge;
use crate::core::{Classification, LetterSet, letter_index};

/// Which letters may still be typed
///
/// A letter is unselectable once confirmed `Wrong`. When as many distinct letters
/// are confirmed `Right` as the word has positions, no other letter can belong to
/// the secret and every letter outside that set is unselectable too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardView {
    selectable: LetterSet,
    locked: bool,
}

impl KeyboardView {
    /// Project the current knowledge for words of `word_length` letters
    #[must_use]
    pub fn project(knowledge: &LetterKnowledge, word_length: usize) -> Self {
        const ALL: LetterSet = (1 << 26) - 1;

        let right = knowledge.set_of(Classification::Right);
        let locked = right.count_ones() as usize == word_length;
        let selectable = if locked {
            right
        } else {
            ALL & !knowledge.set_of(Classification::Wrong)
        };

        Self { selectable, locked }
    }

    #[inline]
    #[must_use]
    pub fn is_selectable(&self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.selectable & (1 << letter_index(letter)) != 0
    }

    /// Set of selectable letters
    #[inline]
    #[must_use]
    pub const fn selectable(&self) -> LetterSet {
        self.selectable
    }

    /// True once every letter of the secret is confirmed
    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }
}
