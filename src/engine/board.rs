//! Guess history plus letter knowledge, with full propagation
//!
//! Every deduction flows through one FIFO queue. A newly learned letter bumps the
//! counters of each guess containing it and re-runs saturation on those guesses, so
//! one guess can complete another's tiles. The queue is drained before
//! [`Board::record_guess`] or [`Board::solve`] returns.

use super::{
    ClassificationEvent, Classified, Deduction, GuessRecord, KeyboardView, LetterKnowledge, Source,
    inference, saturation,
};
use crate::core::{Classification, Word};
use std::collections::VecDeque;

type Pending = VecDeque<(Deduction, Source)>;

/// Knowledge and history of one round
#[derive(Debug, Clone)]
pub struct Board {
    word_length: usize,
    knowledge: LetterKnowledge,
    records: Vec<GuessRecord>,
    contradictions: usize,
}

impl Board {
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            knowledge: LetterKnowledge::new(),
            records: Vec::new(),
            contradictions: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    /// Played non-winning guesses in submission order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Contradictory writes ignored so far
    #[inline]
    #[must_use]
    pub const fn contradictions(&self) -> usize {
        self.contradictions
    }

    /// Recompute the selectable-letter view
    #[must_use]
    pub fn keyboard(&self) -> KeyboardView {
        KeyboardView::project(&self.knowledge, self.word_length)
    }

    /// Append a scored guess and apply everything it implies
    ///
    /// Returns the new classifications in the order they were learned.
    pub fn record_guess(&mut self, word: Word, score: usize) -> Vec<ClassificationEvent> {
        let index = self.records.len();
        self.records
            .push(GuessRecord::new(word, index, score, &self.knowledge));

        let mut events = Vec::new();

        let local = tag(
            saturation::resolve(&self.records[index], &self.knowledge),
            Source::Saturation,
        );
        self.flush(local, &mut events);

        let crossed = tag(
            inference::infer_against_history(&self.records[index], &self.records),
            Source::CrossGuess,
        );
        self.flush(crossed, &mut events);

        events
    }

    /// Mark every letter of the guessed secret `Right`
    pub fn solve(&mut self, word: &Word) -> Vec<ClassificationEvent> {
        let pending = word
            .letters()
            .iter()
            .map(|&letter| {
                (
                    Deduction::new(letter, Classification::Right),
                    Source::Solved,
                )
            })
            .collect();

        let mut events = Vec::new();
        self.flush(pending, &mut events);
        events
    }

    /// Forget all guesses and knowledge
    pub fn clear(&mut self) {
        self.knowledge.clear();
        self.records.clear();
        self.contradictions = 0;
    }

    fn flush(&mut self, mut pending: Pending, events: &mut Vec<ClassificationEvent>) {
        while let Some((deduction, source)) = pending.pop_front() {
            let (letter, classification) = (deduction.letter, deduction.classification);
            match self.knowledge.classify(letter, classification) {
                Classified::Learned => {
                    tracing::trace!(
                        letter = %char::from(letter),
                        %classification,
                        %source,
                        "letter classified"
                    );
                    events.push(ClassificationEvent {
                        letter,
                        classification,
                        source,
                    });

                    for record in &mut self.records {
                        if record.note(letter, classification) {
                            pending.extend(tag(
                                saturation::resolve(record, &self.knowledge),
                                Source::Saturation,
                            ));
                        }
                    }
                }
                Classified::AlreadyKnown => {}
                Classified::Contradiction { existing } => {
                    self.contradictions += 1;
                    tracing::warn!(
                        letter = %char::from(letter),
                        %existing,
                        attempted = %classification,
                        %source,
                        "ignoring contradictory classification"
                    );
                    debug_assert!(
                        self.records.iter().any(|r| r.word().has_repeated_letters()),
                        "contradictory classification for {} with distinct-letter guesses",
                        char::from(letter)
                    );
                }
            }
        }
    }
}

fn tag(deductions: Vec<Deduction>, source: Source) -> Pending {
    deductions.into_iter().map(|d| (d, source)).collect()
}
