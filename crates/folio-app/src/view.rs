//! Console rendering of scrollback lines.

use std::io::Write;

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};

use folio_terminal::markup;
use folio_terminal::{Line, LineStyle, ViewSink};

/// Foreground color for a style. `None` keeps the terminal default.
pub fn color_for(style: LineStyle) -> Option<Color> {
    match style {
        LineStyle::Prompt => Some(Color::Green),
        LineStyle::Command => Some(Color::Cyan),
        LineStyle::Output => None,
        LineStyle::Error => Some(Color::Red),
        LineStyle::Info => Some(Color::Blue),
        LineStyle::Success => Some(Color::Green),
        LineStyle::Warning => Some(Color::Yellow),
    }
}

/// Writes scrollback lines to a console.
///
/// In raw mode the terminal does not translate `\n`, so line breaks are
/// written as `\r\n`. Without color, markup is stripped to plain text.
pub struct ConsoleView<W: Write> {
    out: W,
    prompt: String,
    raw: bool,
    color: bool,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, prompt: impl Into<String>, raw: bool, color: bool) -> Self {
        Self {
            out,
            prompt: prompt.into(),
            raw,
            color,
        }
    }

    fn newline(&self) -> &'static str {
        if self.raw { "\r\n" } else { "\n" }
    }

    fn write_styled(&mut self, text: &str, style: LineStyle) -> std::io::Result<()> {
        let newline = self.newline();
        let text = text.replace('\n', newline);
        match color_for(style).filter(|_| self.color) {
            Some(color) => queue!(
                self.out,
                SetForegroundColor(color),
                Print(text),
                ResetColor
            ),
            None => queue!(self.out, Print(text)),
        }
    }

    fn write_line(&mut self, line: &Line) -> std::io::Result<()> {
        if line.style == LineStyle::Prompt {
            let prompt = format!("{} ", self.prompt);
            self.write_styled(&prompt, LineStyle::Prompt)?;
            self.write_styled(&line.text, LineStyle::Command)?;
        } else {
            for span in markup::parse(&line.text, line.style) {
                self.write_styled(&span.text, span.style)?;
            }
        }
        let newline = self.newline();
        queue!(self.out, Print(newline))
    }

    /// Redraw the edit line in place: prompt plus current input.
    pub fn draw_edit_line(&mut self, text: &str) -> std::io::Result<()> {
        queue!(self.out, Print("\r"), Clear(ClearType::CurrentLine))?;
        let prompt = format!("{} ", self.prompt);
        self.write_styled(&prompt, LineStyle::Prompt)?;
        queue!(self.out, Print(text))?;
        self.out.flush()
    }

    /// Overwrite the current row with transient text (animations).
    pub fn draw_transient(&mut self, text: &str, style: LineStyle) -> std::io::Result<()> {
        queue!(self.out, Print("\r"), Clear(ClearType::CurrentLine))?;
        self.write_styled(text, style)?;
        self.out.flush()
    }

    /// Blank the current row so a rendered line can replace it.
    pub fn erase_current_row(&mut self) -> std::io::Result<()> {
        queue!(self.out, Print("\r"), Clear(ClearType::CurrentLine))?;
        self.out.flush()
    }
}

impl<W: Write> ViewSink for ConsoleView<W> {
    fn render(&mut self, line: &Line) {
        if let Err(e) = self.write_line(line) {
            log::warn!("failed to render line: {e}");
        }
    }

    fn scroll_to_end(&mut self) {
        // The console scrolls by itself once the line is written.
        if let Err(e) = self.out.flush() {
            log::warn!("failed to flush output: {e}");
        }
    }

    fn clear(&mut self) {
        if !self.raw {
            return;
        }
        let result = queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            log::warn!("failed to clear screen: {e}");
        }
    }
}
