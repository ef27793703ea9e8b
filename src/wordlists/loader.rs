//! Word list loading
//!
//! Custom lists are plain text, one word per line.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines and entries that are not words are skipped. Length is not
/// checked here; [`Dictionary`](crate::round::Dictionary) filters by length.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use letterlock::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/secrets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert an embedded slice to words
///
/// # Examples
/// ```
/// use letterlock::wordlists::{SECRETS, loader::words_from_slice};
///
/// let words = words_from_slice(SECRETS);
/// assert_eq!(words.len(), SECRETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_uppercases() {
        let words = words_from_slice(&["word", "Rain"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["WORD", "RAIN"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["word", "", "x-ray", "rain"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_lines_skips_blanks_and_junk() {
        let words = parse_lines("WORD\n\n  rain  \n12ab\nbolt\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["WORD", "RAIN", "BOLT"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("does/not/exist.txt").is_err());
    }
}
