//! Guess selection for automated players
//!
//! Players type through the same keyboard as a person: distinct letters only,
//! and only letters the keyboard view still allows.

use crate::core::{Word, score};
use crate::engine::{GuessRecord, KeyboardView};
use crate::round::{RoundController, SecretPicker};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// What a player can see before choosing a guess
#[derive(Debug, Clone, Copy)]
pub struct Turn<'t> {
    pub keyboard: KeyboardView,
    pub records: &'t [GuessRecord],
    pub history: &'t [Word],
}

impl<'t> Turn<'t> {
    #[must_use]
    pub fn of<P: SecretPicker>(round: &'t RoundController<'_, P>) -> Self {
        Self {
            keyboard: round.keyboard(),
            records: round.records(),
            history: round.history(),
        }
    }

    /// Whether `word` could be entered on the keyboard this turn
    #[must_use]
    pub fn is_typeable(&self, word: &Word) -> bool {
        let selectable = |&c: &u8| self.keyboard.is_selectable(c);
        !word.has_repeated_letters()
            && word.letters().iter().all(selectable)
            && !self.history.contains(word)
    }

    /// Whether `word` as the secret would explain every recorded score
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        self.records
            .iter()
            .all(|record| score(record.word(), word) == record.score())
    }
}

/// A strategy for choosing the next guess
pub trait Player {
    /// Choose a guess from `guessable`
    ///
    /// Returns `None` if no word can be typed.
    fn choose<'d>(&mut self, guessable: &'d [Word], turn: &Turn<'_>) -> Option<&'d Word>;
}

/// Runtime selection of a player with static dispatch
pub enum PlayerType {
    Random(RandomPlayer),
    Informed(InformedPlayer),
}

impl Player for PlayerType {
    fn choose<'d>(&mut self, guessable: &'d [Word], turn: &Turn<'_>) -> Option<&'d Word> {
        match self {
            Self::Random(p) => p.choose(guessable, turn),
            Self::Informed(p) => p.choose(guessable, turn),
        }
    }
}

impl PlayerType {
    /// Create a player from its name
    ///
    /// Supported names: "random", "informed". Defaults to informed if the name is
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "random" => Self::Random(RandomPlayer::seeded(seed)),
            _ => Self::Informed(InformedPlayer::seeded(seed)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Informed(_) => "informed",
        }
    }
}

/// Any typeable word, uniformly at random
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn choose<'d>(&mut self, guessable: &'d [Word], turn: &Turn<'_>) -> Option<&'d Word> {
        let options: Vec<&Word> = guessable.iter().filter(|w| turn.is_typeable(w)).collect();
        options.choose(&mut self.rng).copied()
    }
}

/// Random among typeable words that could still be the secret
///
/// Falls back to any typeable word when no candidate remains.
pub struct InformedPlayer {
    rng: StdRng,
}

impl InformedPlayer {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for InformedPlayer {
    fn choose<'d>(&mut self, guessable: &'d [Word], turn: &Turn<'_>) -> Option<&'d Word> {
        let typeable: Vec<&Word> = guessable.iter().filter(|w| turn.is_typeable(w)).collect();
        let candidates: Vec<&Word> = typeable
            .iter()
            .copied()
            .filter(|w| turn.is_consistent(w))
            .collect();

        if candidates.is_empty() {
            typeable.choose(&mut self.rng).copied()
        } else {
            candidates.choose(&mut self.rng).copied()
        }
    }
}
