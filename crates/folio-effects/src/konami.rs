//! Konami-code easter egg detector.

use std::collections::VecDeque;

/// Keys the detector distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

/// Up Up Down Down Left Right Left Right B A.
pub const SEQUENCE: [Key; 10] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::Char('b'),
    Key::Char('a'),
];

/// Sliding window over the most recent key presses.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    window: VecDeque<Key>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key press. Returns `true` when the last ten presses spell the
    /// sequence; the window is then reset.
    pub fn push(&mut self, key: Key) -> bool {
        let key = match key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.window.push_back(key);
        if self.window.len() > SEQUENCE.len() {
            self.window.pop_front();
        }
        if self.window.iter().eq(SEQUENCE.iter()) {
            log::debug!("konami sequence entered");
            self.window.clear();
            return true;
        }
        false
    }
}
