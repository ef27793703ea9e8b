//! Round-wide letter knowledge
//!
//! Maps each letter to its [`Classification`]. Entries only ever move out of
//! `Unknown` once; a confirmed letter keeps its first value for the rest of the round.

use crate::core::{Classification, LetterSet, letter_index};
use std::fmt;

/// Outcome of writing a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified {
    /// The letter was `Unknown` and now holds the new value
    Learned,
    /// The letter already held this value (or the write was `Unknown`)
    AlreadyKnown,
    /// The letter holds the opposite value; the write was ignored
    Contradiction { existing: Classification },
}

/// Which rule produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Single-guess saturation
    Saturation,
    /// Score delta between two guesses
    CrossGuess,
    /// The secret was guessed
    Solved,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Saturation => "saturation",
            Self::CrossGuess => "cross-guess",
            Self::Solved => "solved",
        };
        f.write_str(name)
    }
}

/// A new entry in [`LetterKnowledge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationEvent {
    pub letter: u8,
    pub classification: Classification,
    pub source: Source,
}

/// Subscriber for classification events
///
/// Renderers and other presentation collaborators implement this to follow
/// knowledge updates without the core tracking their state.
pub trait ClassificationSink {
    fn classified(&mut self, event: &ClassificationEvent);
}

impl<F: FnMut(&ClassificationEvent)> ClassificationSink for F {
    fn classified(&mut self, event: &ClassificationEvent) {
        self(event);
    }
}

/// Letter → classification map over `A..=Z`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    letters: [Classification; 26],
}

impl LetterKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classification of `letter` (`Unknown` for non-letters)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Classification {
        if letter.is_ascii_uppercase() {
            self.letters[letter_index(letter)]
        } else {
            Classification::Unknown
        }
    }

    /// Record `classification` for `letter`
    ///
    /// First write wins: re-asserting the held value is a no-op and asserting the
    /// opposite value is reported as a contradiction without changing anything.
    pub fn classify(&mut self, letter: u8, classification: Classification) -> Classified {
        if !letter.is_ascii_uppercase() || !classification.is_known() {
            return Classified::AlreadyKnown;
        }

        let slot = &mut self.letters[letter_index(letter)];
        match *slot {
            Classification::Unknown => {
                *slot = classification;
                Classified::Learned
            }
            existing if existing == classification => Classified::AlreadyKnown,
            existing => Classified::Contradiction { existing },
        }
    }

    /// Letters confirmed with `classification`
    #[must_use]
    pub fn set_of(&self, classification: Classification) -> LetterSet {
        self.letters
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == classification)
            .fold(0, |set, (i, _)| set | (1 << i))
    }

    /// Number of distinct letters confirmed `Right`
    #[must_use]
    pub fn right_count(&self) -> usize {
        self.set_of(Classification::Right).count_ones() as usize
    }

    /// Every letter with its classification, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (u8, Classification)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(|(i, &c)| (b'A' + i as u8, c))
    }

    /// Forget everything (round reset)
    pub fn clear(&mut self) {
        self.letters = [Classification::Unknown; 26];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unknown() {
        let knowledge = LetterKnowledge::new();
        assert!(knowledge.iter().all(|(_, c)| c == Classification::Unknown));
        assert_eq!(knowledge.right_count(), 0);
    }

    #[test]
    fn classify_learns_once() {
        let mut knowledge = LetterKnowledge::new();
        assert_eq!(
            knowledge.classify(b'R', Classification::Right),
            Classified::Learned
        );
        assert_eq!(knowledge.get(b'R'), Classification::Right);
    }

    #[test]
    fn same_value_is_noop() {
        let mut knowledge = LetterKnowledge::new();
        knowledge.classify(b'T', Classification::Wrong);
        assert_eq!(
            knowledge.classify(b'T', Classification::Wrong),
            Classified::AlreadyKnown
        );
        assert_eq!(knowledge.get(b'T'), Classification::Wrong);
    }

    #[test]
    fn opposite_value_is_rejected() {
        let mut knowledge = LetterKnowledge::new();
        knowledge.classify(b'S', Classification::Wrong);
        assert_eq!(
            knowledge.classify(b'S', Classification::Right),
            Classified::Contradiction {
                existing: Classification::Wrong
            }
        );
        assert_eq!(knowledge.get(b'S'), Classification::Wrong);
    }

    #[test]
    fn unknown_and_non_letters_are_ignored() {
        let mut knowledge = LetterKnowledge::new();
        knowledge.classify(b'A', Classification::Right);
        assert_eq!(
            knowledge.classify(b'A', Classification::Unknown),
            Classified::AlreadyKnown
        );
        assert_eq!(
            knowledge.classify(b'3', Classification::Right),
            Classified::AlreadyKnown
        );
        assert_eq!(knowledge.get(b'A'), Classification::Right);
        assert_eq!(knowledge.get(b'3'), Classification::Unknown);
    }

    #[test]
    fn sets_and_clear() {
        let mut knowledge = LetterKnowledge::new();
        knowledge.classify(b'A', Classification::Right);
        knowledge.classify(b'C', Classification::Right);
        knowledge.classify(b'B', Classification::Wrong);

        assert_eq!(knowledge.set_of(Classification::Right), 0b101);
        assert_eq!(knowledge.set_of(Classification::Wrong), 0b010);
        assert_eq!(knowledge.right_count(), 2);

        knowledge.clear();
        assert_eq!(knowledge, LetterKnowledge::new());
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: &ClassificationEvent| seen.push(event.letter);
            sink.classified(&ClassificationEvent {
                letter: b'Q',
                classification: Classification::Wrong,
                source: Source::Saturation,
            });
        }
        assert_eq!(seen, vec![b'Q']);
    }
}
