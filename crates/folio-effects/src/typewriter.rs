//! Typewriter reveal: a text shown one character at a time.

use std::time::Duration;

/// Iterator over the growing prefixes of a text.
///
/// Yields `"h"`, `"he"`, `"hel"`, ... up to the full text. Prefixes always
/// end on a character boundary.
#[derive(Debug, Clone)]
pub struct Typewriter<'a> {
    text: &'a str,
    pos: usize,
    delay: Duration,
}

impl<'a> Typewriter<'a> {
    pub fn new(text: &'a str, delay: Duration) -> Self {
        Self {
            text,
            pos: 0,
            delay,
        }
    }

    /// Pause between two frames.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Total time to reveal the whole text.
    pub fn duration(&self) -> Duration {
        let chars = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        self.delay.saturating_mul(chars)
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.pos..];
        let ch = rest.chars().next()?;
        self.pos += ch.len_utf8();
        Some(&self.text[..self.pos])
    }
}
