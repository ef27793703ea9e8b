//! One round of the puzzle: dictionary, secret picking, and the state machine

mod controller;
mod dictionary;
mod error;
mod picker;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{RoundController, RoundState, RoundStatus, Submission};
pub use dictionary::Dictionary;
pub use error::{RoundError, SubmitError};
pub use picker::{RandomPicker, SecretPicker};
