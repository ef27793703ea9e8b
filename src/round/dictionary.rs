//! Word lookup for secrets and accepted guesses

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Secret candidates plus the (larger) set of words accepted as guesses
///
/// Only words of the configured length are kept. Every secret is also accepted,
/// and no secret repeats a letter.
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_length: usize,
    secrets: Vec<Word>,
    accepted: FxHashSet<Word>,
    guessable: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from word collections
    ///
    /// Words of another length are dropped, duplicates collapse. A secret with a
    /// repeated letter could never be typed, so it is dropped from the secrets.
    pub fn new(
        word_length: usize,
        secrets: impl IntoIterator<Item = Word>,
        accepted: impl IntoIterator<Item = Word>,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let mut repeated = 0usize;
        let secrets: Vec<Word> = secrets
            .into_iter()
            .filter(|w| w.len() == word_length && seen.insert(w.clone()))
            .filter(|w| {
                let keep = !w.has_repeated_letters();
                repeated += usize::from(!keep);
                keep
            })
            .collect();
        if repeated > 0 {
            tracing::debug!(dropped = repeated, "dropped secrets with repeated letters");
        }

        let mut accepted: FxHashSet<Word> = accepted
            .into_iter()
            .filter(|w| w.len() == word_length)
            .collect();
        accepted.extend(secrets.iter().cloned());

        let mut guessable: Vec<Word> = accepted.iter().cloned().collect();
        guessable.sort_unstable_by(|a, b| a.text().cmp(b.text()));

        Self {
            word_length,
            secrets,
            accepted,
            guessable,
        }
    }

    /// Build from string slices, skipping entries that are not words
    ///
    /// # Examples
    /// ```
    /// use letterlock::round::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(4, &["word"], &["wore", "rant", "toolong"]);
    /// assert_eq!(dictionary.secrets().len(), 1);
    /// assert_eq!(dictionary.accepted_count(), 3);
    /// ```
    #[must_use]
    pub fn from_strs(word_length: usize, secrets: &[&str], accepted: &[&str]) -> Self {
        let parse = |list: &[&str]| {
            list.iter()
                .filter_map(|s| Word::new(s.trim()).ok())
                .collect::<Vec<_>>()
        };
        Self::new(word_length, parse(secrets), parse(accepted))
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words a round may pick as its secret
    #[inline]
    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    #[inline]
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Accepted words in alphabetical order
    #[inline]
    #[must_use]
    pub fn guessable(&self) -> &[Word] {
        &self.guessable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_accepted() {
        let dictionary = Dictionary::from_strs(4, &["WORD", "RAIN"], &["WORE"]);
        assert!(dictionary.is_accepted(&Word::new("WORD").unwrap()));
        assert!(dictionary.is_accepted(&Word::new("rain").unwrap()));
        assert!(dictionary.is_accepted(&Word::new("WORE").unwrap()));
        assert!(!dictionary.is_accepted(&Word::new("RANT").unwrap()));
    }

    #[test]
    fn other_lengths_are_dropped() {
        let dictionary = Dictionary::from_strs(4, &["WORD", "WORDS"], &["CAT", "BOLT", "x1yz"]);
        assert_eq!(dictionary.secrets().len(), 1);
        assert_eq!(dictionary.accepted_count(), 2);
    }

    #[test]
    fn duplicate_secrets_collapse() {
        let dictionary = Dictionary::from_strs(4, &["WORD", "word", "RAIN"], &[]);
        assert_eq!(dictionary.secrets().len(), 2);
    }

    #[test]
    fn repeated_letter_secrets_are_dropped() {
        let dictionary = Dictionary::from_strs(4, &["BOOK", "WORD"], &[]);
        let texts: Vec<&str> = dictionary.secrets().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["WORD"]);
        assert!(!dictionary.is_accepted(&Word::new("BOOK").unwrap()));
    }

    #[test]
    fn repeated_letter_guesses_stay_accepted() {
        let dictionary = Dictionary::from_strs(4, &["WORD"], &["BOOK"]);
        assert_eq!(dictionary.secrets().len(), 1);
        assert!(dictionary.is_accepted(&Word::new("BOOK").unwrap()));
    }

    #[test]
    fn guessable_is_sorted() {
        let dictionary = Dictionary::from_strs(4, &["WORD"], &["RANT", "BOLT"]);
        let texts: Vec<&str> = dictionary.guessable().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["BOLT", "RANT", "WORD"]);
    }
}
