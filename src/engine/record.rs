//! Submitted guess history entries

use super::LetterKnowledge;
use crate::core::{Classification, LetterSet, Word, letter_index};

/// One position of a guess as it should currently be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub letter: u8,
    pub classification: Classification,
}

impl TileView {
    /// Tiles for any word, winning guesses included
    #[must_use]
    pub fn row(word: &Word, knowledge: &LetterKnowledge) -> Vec<Self> {
        word.letters()
            .iter()
            .map(|&letter| Self {
                letter,
                classification: knowledge.get(letter),
            })
            .collect()
    }
}

/// A scored, non-winning guess
///
/// Per-position classification is not stored; it is read from [`LetterKnowledge`]
/// through [`GuessRecord::tiles`]. The two counters track how many of this guess's
/// positions have been confirmed each way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    index: usize,
    score: usize,
    wrong_count: usize,
    marked_right_count: usize,
}

impl GuessRecord {
    /// Create a record with counters seeded from what is already known
    pub(crate) fn new(word: Word, index: usize, score: usize, knowledge: &LetterKnowledge) -> Self {
        let mut record = Self {
            word,
            index,
            score,
            wrong_count: 0,
            marked_right_count: 0,
        };
        for &letter in record.word.letters() {
            match knowledge.get(letter) {
                Classification::Wrong => record.wrong_count += 1,
                Classification::Right => record.marked_right_count += 1,
                Classification::Unknown => {}
            }
        }
        record
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Zero-based submission order
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Positions whose letter is confirmed `Wrong`
    #[inline]
    #[must_use]
    pub const fn wrong_count(&self) -> usize {
        self.wrong_count
    }

    /// Positions whose letter is confirmed `Right`
    #[inline]
    #[must_use]
    pub const fn marked_right_count(&self) -> usize {
        self.marked_right_count
    }

    /// Account for a newly learned letter
    ///
    /// Returns true if the letter occurs in this guess, i.e. a counter moved.
    pub(crate) fn note(&mut self, letter: u8, classification: Classification) -> bool {
        let positions = self.word.occurrences(letter);
        if positions == 0 {
            return false;
        }
        match classification {
            Classification::Wrong => self.wrong_count += positions,
            Classification::Right => self.marked_right_count += positions,
            Classification::Unknown => return false,
        }
        true
    }

    /// Distinct letters of this guess still `Unknown`
    #[must_use]
    pub fn unknown_letters(&self, knowledge: &LetterKnowledge) -> LetterSet {
        self.word
            .letters()
            .iter()
            .filter(|&&c| knowledge.get(c) == Classification::Unknown)
            .fold(0, |set, &c| set | (1 << letter_index(c)))
    }

    /// Per-position classification snapshot
    #[must_use]
    pub fn tiles(&self, knowledge: &LetterKnowledge) -> Vec<TileView> {
        TileView::row(&self.word, knowledge)
    }
}
