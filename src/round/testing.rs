//! Shared fixtures for round and session tests

use super::{Dictionary, SecretPicker};
use crate::core::Word;
use std::collections::VecDeque;

/// Picks secrets from a fixed script, skipping the current one
pub struct ScriptedPicker(VecDeque<&'static str>);

impl ScriptedPicker {
    pub fn new(script: &[&'static str]) -> Self {
        Self(script.iter().copied().collect())
    }
}

impl SecretPicker for ScriptedPicker {
    fn pick(&mut self, secrets: &[Word], current: Option<&Word>) -> Option<Word> {
        while let Some(next) = self.0.pop_front() {
            let word = Word::new(next).ok()?;
            if Some(&word) != current && secrets.contains(&word) {
                return Some(word);
            }
        }
        None
    }
}

pub fn dictionary() -> Dictionary {
    Dictionary::from_strs(
        4,
        &["WORD", "RAIN", "TARO"],
        &[
            "WORE", "RANT", "RANS", "BOLT", "CALF", "BUSY", "TEMP", "GOLD", "BOLD", "AAII",
        ],
    )
}
