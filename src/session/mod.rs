//! Player-facing session layer: typing buffer, command dispatch, notices

mod input;
mod notice;

pub use input::{Command, InputBuffer, InputOutcome, KeyState, LetterRejection, Session};
pub use notice::Notice;
