//! Guess scoring
//!
//! A guess scores one point for every position whose letter occurs anywhere in the
//! secret. Occurrences are never consumed, so a repeated guess letter that appears
//! once in the secret is credited at each of its positions.

use super::Word;

/// Count the positions of `guess` whose letter exists in `secret`
///
/// # Examples
/// ```
/// use letterlock::core::{Word, score};
///
/// let secret = Word::new("RAIN").unwrap();
/// assert_eq!(score(&Word::new("RANT").unwrap(), &secret), 3);
/// assert_eq!(score(&Word::new("AAII").unwrap(), &secret), 4);
/// ```
#[must_use]
pub fn score(guess: &Word, secret: &Word) -> usize {
    let present = secret.letter_set();
    guess
        .letters()
        .iter()
        .filter(|&&c| present & (1 << super::word::letter_index(c)) != 0)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn score_counts_present_letters() {
        assert_eq!(score(&w("RANT"), &w("RAIN")), 3);
    }

    #[test]
    fn score_over_counts_repeated_letters() {
        // RAIN holds one A and one I, yet every position is credited
        assert_eq!(score(&w("AAII"), &w("RAIN")), 4);
    }

    #[test]
    fn score_ignores_position() {
        assert_eq!(score(&w("NIAR"), &w("RAIN")), 4);
    }

    #[test]
    fn score_zero_when_disjoint() {
        assert_eq!(score(&w("BOLT"), &w("RAIN")), 0);
    }

    #[test]
    fn score_of_secret_is_length() {
        for text in ["WORD", "RAIN", "BOOK"] {
            let word = w(text);
            assert_eq!(score(&word, &word), word.len());
        }
    }
}
