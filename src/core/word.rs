//! Word representation
//!
//! A Word stores an uppercase letter sequence along with its distinct-letter set.
//! Length is not fixed here; the round checks it against the configured word length.

use std::fmt;
use thiserror::Error;

/// Bit set over the 26 letters `A..=Z` (bit 0 = `A`)
pub type LetterSet = u32;

/// Index of an uppercase ASCII letter in `0..26`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

/// Iterate over the letters contained in a [`LetterSet`], alphabetically
pub fn letters_of(set: LetterSet) -> impl Iterator<Item = u8> {
    (0u8..26)
        .filter(move |i| set & (1 << i) != 0)
        .map(|i| b'A' + i)
}

/// An uppercase word made of ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letter_set: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use letterlock::core::Word;
    ///
    /// let word = Word::new("rant").unwrap();
    /// assert_eq!(word.text(), "RANT");
    ///
    /// assert!(Word::new("r4nt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letter_set = text.bytes().fold(0, |set, c| set | (1 << letter_index(c)));

        Ok(Self { text, letter_set })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters (positions) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a `Word` holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.letter_set
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.letter_set & (1 << letter_index(letter)) != 0
    }

    /// Number of positions holding `letter`
    #[must_use]
    pub fn occurrences(&self, letter: u8) -> usize {
        self.letters().iter().filter(|&&c| c == letter).count()
    }

    /// True if any letter appears at more than one position
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.letter_set.count_ones() as usize != self.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("RANT").unwrap();
        assert_eq!(word.text(), "RANT");
        assert_eq!(word.letters(), b"RANT");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("rant").unwrap();
        assert_eq!(word.text(), "RANT");

        let word2 = Word::new("RaNt").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("ra1t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ra t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ränt"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("RAIN").unwrap();
        assert!(word.has_letter(b'R'));
        assert!(word.has_letter(b'N'));
        assert!(!word.has_letter(b'T'));
        assert!(!word.has_letter(b'r'));
    }

    #[test]
    fn word_letter_set_ignores_repeats() {
        let word = Word::new("AAII").unwrap();
        assert_eq!(word.letter_set().count_ones(), 2);
        assert_eq!(letters_of(word.letter_set()).collect::<Vec<_>>(), b"AI");
        assert!(word.has_repeated_letters());
        assert_eq!(word.occurrences(b'A'), 2);
    }

    #[test]
    fn word_without_repeats() {
        let word = Word::new("WORD").unwrap();
        assert!(!word.has_repeated_letters());
        assert_eq!(word.occurrences(b'O'), 1);
        assert_eq!(word.occurrences(b'Z'), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("word").unwrap();
        assert_eq!(format!("{word}"), "WORD");
    }
}
