//! Rendered lines, the scrollback log, and the view sink contract.

use folio_types::style::LineStyle;

/// One rendered scrollback entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Text or markup. Prompt lines hold the raw submitted input; the view
    /// decides how to draw the prompt in front of it.
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    pub fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Prompt, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Error, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Success, text)
    }
}

/// Append-only log of rendered lines; only an explicit clear empties it.
#[derive(Debug, Clone, Default)]
pub struct Scrollback {
    lines: Vec<Line>,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Destination for rendered lines (a console, a widget, a test recorder).
///
/// Rendering is fire-and-forget: sinks report nothing back.
pub trait ViewSink {
    /// Draw one new entry below the previous ones.
    fn render(&mut self, line: &Line);

    /// Bring the newest entry into view.
    fn scroll_to_end(&mut self) {}

    /// Remove every entry from the view.
    fn clear(&mut self);
}
