//! Per-letter classification

use std::fmt;

/// What is known about a letter value across every guess of a round
///
/// Classification is keyed by letter, not position: a letter confirmed `Right`
/// is `Right` everywhere it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    /// Nothing confirmed yet
    #[default]
    Unknown,
    /// Known to be absent from the secret word
    Wrong,
    /// Known to occur in the secret word
    Right,
}

impl Classification {
    /// The opposite confirmed classification (`Unknown` stays `Unknown`)
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Wrong => Self::Right,
            Self::Right => Self::Wrong,
            Self::Unknown => Self::Unknown,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Wrong => "wrong",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
