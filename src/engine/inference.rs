//! Cross-guess inference
//!
//! Two guesses that share most of their letters differ in score only through the
//! letters they do not share. Let `D` be the symmetric difference of their distinct
//! letter sets and `diff` the score change from the earlier guess to the newer one.
//! When `|D|` is even and `|D| / 2 == |diff|`, every swapped-in letter moved the
//! score by one in the same direction and every swapped-out letter by one in the
//! other, so all of `D` is determined.

use super::{Deduction, GuessRecord};
use crate::core::{Classification, letters_of};

/// Deductions drawn from comparing `newer` against one `earlier` guess
///
/// An inconclusive pair yields nothing.
#[must_use]
pub fn infer_pair(newer: &GuessRecord, earlier: &GuessRecord) -> Vec<Deduction> {
    let diff = newer.score() as isize - earlier.score() as isize;
    let newer_set = newer.word().letter_set();
    let swapped = newer_set ^ earlier.word().letter_set();
    let size = swapped.count_ones() as usize;

    if size == 0 || size % 2 != 0 || size / 2 != diff.unsigned_abs() {
        return Vec::new();
    }

    let gained = if diff > 0 {
        Classification::Right
    } else {
        Classification::Wrong
    };

    letters_of(swapped)
        .map(|letter| {
            let classification = if newer.word().has_letter(letter) {
                gained
            } else {
                gained.opposite()
            };
            Deduction::new(letter, classification)
        })
        .collect()
}

/// Compare the newest guess against every earlier guess, in submission order
///
/// `history` holds the played guesses with `newer` last; comparison stops at
/// `newer` itself.
#[must_use]
pub fn infer_against_history(newer: &GuessRecord, history: &[GuessRecord]) -> Vec<Deduction> {
    history
        .iter()
        .take_while(|earlier| earlier.index() < newer.index())
        .flat_map(|earlier| infer_pair(newer, earlier))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::LetterKnowledge;

    fn record(text: &str, index: usize, score: usize) -> GuessRecord {
        GuessRecord::new(
            Word::new(text).unwrap(),
            index,
            score,
            &LetterKnowledge::new(),
        )
    }

    #[test]
    fn lower_score_marks_new_letter_wrong() {
        let earlier = record("RANT", 0, 3);
        let newer = record("RANS", 1, 2);

        assert_eq!(
            infer_pair(&newer, &earlier),
            vec![
                Deduction::new(b'S', Classification::Wrong),
                Deduction::new(b'T', Classification::Right),
            ]
        );
    }

    #[test]
    fn higher_score_marks_new_letter_right() {
        let earlier = record("BOLT", 0, 1);
        let newer = record("BOLD", 1, 2);

        assert_eq!(
            infer_pair(&newer, &earlier),
            vec![
                Deduction::new(b'D', Classification::Right),
                Deduction::new(b'T', Classification::Wrong),
            ]
        );
    }

    #[test]
    fn two_letter_swap_needs_two_point_delta() {
        let earlier = record("BEAT", 0, 1);
        let newer = record("BEIN", 1, 3);

        let deductions = infer_pair(&newer, &earlier);
        assert_eq!(deductions.len(), 4);
        for deduction in deductions {
            let expected = if b"IN".contains(&deduction.letter) {
                Classification::Right
            } else {
                Classification::Wrong
            };
            assert_eq!(deduction.classification, expected);
        }
    }

    #[test]
    fn inconclusive_when_delta_does_not_explain_swap() {
        // Two letters swapped but the score only moved by one
        let earlier = record("BEAT", 0, 1);
        let newer = record("BEIN", 1, 2);
        assert!(infer_pair(&newer, &earlier).is_empty());

        // Same score: nothing is learned
        let earlier = record("RANT", 0, 2);
        let newer = record("RANS", 1, 2);
        assert!(infer_pair(&newer, &earlier).is_empty());
    }

    #[test]
    fn odd_difference_is_inconclusive() {
        // {D} is a single letter when one word repeats a letter
        let earlier = record("ABCD", 0, 1);
        let newer = record("AABC", 1, 1);
        assert!(infer_pair(&newer, &earlier).is_empty());
    }

    #[test]
    fn history_stops_at_newer_guess() {
        let history = vec![record("RANT", 0, 3), record("RANS", 1, 2)];

        let deductions = infer_against_history(&history[1], &history);
        assert_eq!(deductions.len(), 2);

        assert!(infer_against_history(&history[0], &history).is_empty());
    }
}
