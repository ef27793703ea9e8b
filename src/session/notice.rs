//! Transient rejection banner
//!
//! One slot: showing a message replaces whatever is shown and restarts the window.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Notice {
    duration: Duration,
    active: Option<(String, Instant)>,
}

impl Notice {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    /// Show `text` from `now` until the window elapses
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.active = Some((text.into(), now));
    }

    /// Message visible at `now`, if any
    #[must_use]
    pub fn current(&self, now: Instant) -> Option<&str> {
        self.active
            .as_ref()
            .filter(|(_, shown_at)| now.saturating_duration_since(*shown_at) < self.duration)
            .map(|(text, _)| text.as_str())
    }

    /// Hide immediately
    pub fn dismiss(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(2);

    #[test]
    fn hides_after_window() {
        let start = Instant::now();
        let mut notice = Notice::new(WINDOW);
        assert_eq!(notice.current(start), None);

        notice.show("Not in word list", start);
        assert_eq!(notice.current(start), Some("Not in word list"));
        assert_eq!(
            notice.current(start + Duration::from_millis(1999)),
            Some("Not in word list")
        );
        assert_eq!(notice.current(start + WINDOW), None);
    }

    #[test]
    fn new_message_displaces_old_and_restarts() {
        let start = Instant::now();
        let mut notice = Notice::new(WINDOW);

        notice.show("Not in word list", start);
        let later = start + Duration::from_millis(1500);
        notice.show("Already guessed", later);

        // The first message's window would have ended here
        assert_eq!(
            notice.current(start + Duration::from_millis(2500)),
            Some("Already guessed")
        );
        assert_eq!(notice.current(later + WINDOW), None);
    }

    #[test]
    fn dismiss_hides_immediately() {
        let start = Instant::now();
        let mut notice = Notice::new(WINDOW);
        notice.show("Already guessed", start);
        notice.dismiss();
        assert_eq!(notice.current(start), None);
    }
}
