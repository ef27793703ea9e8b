//! Secret word selection

use crate::core::Word;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Chooses the secret for a new round
pub trait SecretPicker {
    /// Pick a secret from `secrets` that differs from `current`
    ///
    /// Returns `None` when no such word exists.
    fn pick(&mut self, secrets: &[Word], current: Option<&Word>) -> Option<Word>;
}

/// Uniformly random picker
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic picker for reproducible sessions
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretPicker for RandomPicker {
    fn pick(&mut self, secrets: &[Word], current: Option<&Word>) -> Option<Word> {
        let candidates: Vec<&Word> = secrets
            .iter()
            .filter(|&w| Some(w) != current)
            .collect();
        candidates.choose(&mut self.rng).map(|&w| w.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn never_repeats_current() {
        let secrets = words(&["WORD", "RAIN"]);
        let mut picker = RandomPicker::seeded(7);

        for _ in 0..20 {
            let next = picker.pick(&secrets, Some(&secrets[0])).unwrap();
            assert_eq!(next, secrets[1]);
        }
    }

    #[test]
    fn single_word_has_no_alternative() {
        let secrets = words(&["WORD"]);
        let mut picker = RandomPicker::seeded(1);

        assert_eq!(picker.pick(&secrets, None), Some(secrets[0].clone()));
        assert_eq!(picker.pick(&secrets, Some(&secrets[0])), None);
        assert_eq!(picker.pick(&[], None), None);
    }

    #[test]
    fn seeded_pickers_agree() {
        let secrets = words(&["WORD", "RAIN", "BOLT", "CALF", "TEMP"]);
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);

        for _ in 0..10 {
            assert_eq!(a.pick(&secrets, None), b.pick(&secrets, None));
        }
    }
}
