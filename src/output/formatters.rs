//! Formatting utilities for terminal output

use crate::core::Classification;
use crate::engine::TileView;

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Emoji square for a classification
#[must_use]
pub const fn classification_emoji(classification: Classification) -> char {
    match classification {
        Classification::Right => '🟩',
        Classification::Wrong => '⬛',
        Classification::Unknown => '⬜',
    }
}

/// Format a guess's tiles as an emoji string
#[must_use]
pub fn tiles_to_emoji(tiles: &[TileView]) -> String {
    tiles
        .iter()
        .map(|tile| classification_emoji(tile.classification))
        .collect()
}

/// Format an ASCII letter list with spaces between letters
#[must_use]
pub fn spaced(letters: impl IntoIterator<Item = u8>) -> String {
    letters
        .into_iter()
        .map(char::from)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(letter: u8, classification: Classification) -> TileView {
        TileView {
            letter,
            classification,
        }
    }

    #[test]
    fn tiles_to_emoji_mixed() {
        let tiles = [
            tile(b'W', Classification::Right),
            tile(b'O', Classification::Unknown),
            tile(b'R', Classification::Right),
            tile(b'E', Classification::Wrong),
        ];
        assert_eq!(tiles_to_emoji(&tiles), "🟩⬜🟩⬛");
    }

    #[test]
    fn spaced_letters() {
        assert_eq!(spaced(*b"WORD"), "W O R D");
        assert_eq!(spaced(Vec::new()), "");
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters.iter().collect::<String>(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
