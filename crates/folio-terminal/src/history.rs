//! Submission history with cursor-key recall.

/// Ordered log of submitted lines plus a recall cursor.
///
/// The cursor ranges over `0..=len()`; `len()` is the past-end position that
/// stands for "editing a fresh line".
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted (already trimmed) line and reset the cursor.
    ///
    /// Empty lines and repeats of the most recent entry are not stored.
    /// Returns whether the line was appended.
    pub fn record(&mut self, line: &str) -> bool {
        let appended = !line.is_empty() && self.entries.last().is_none_or(|last| last != line);
        if appended {
            self.entries.push(line.to_string());
        }
        self.cursor = self.entries.len();
        appended
    }

    /// Step towards older entries. Returns the recalled entry, or `None` when
    /// already at the oldest one.
    pub fn older(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step towards newer entries. Returns the text the edit line should
    /// show: the next entry, or an empty line once past the newest.
    pub fn newer(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            &self.entries[self.cursor]
        } else {
            self.cursor = self.entries.len();
            ""
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor sits on the fresh edit line.
    pub fn is_past_end(&self) -> bool {
        self.cursor == self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
