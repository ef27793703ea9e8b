//! Embedded and file-based word lists

mod embedded;
pub mod loader;

pub use embedded::{ACCEPTED, ACCEPTED_COUNT, SECRETS, SECRETS_COUNT};
