//! Style tags attached to rendered scrollback lines and markup spans.

use serde::{Deserialize, Serialize};

/// Visual class of a rendered line or span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Echo of the submitted input line.
    Prompt,
    /// A command name inside output text.
    Command,
    /// Plain handler output.
    Output,
    Error,
    Info,
    Success,
    Warning,
}

impl LineStyle {
    /// All styles, in declaration order.
    pub const ALL: [LineStyle; 7] = [
        LineStyle::Prompt,
        LineStyle::Command,
        LineStyle::Output,
        LineStyle::Error,
        LineStyle::Info,
        LineStyle::Success,
        LineStyle::Warning,
    ];

    /// Lowercase tag name, as used in markup (`<warning>`).
    pub fn tag(self) -> &'static str {
        match self {
            LineStyle::Prompt => "prompt",
            LineStyle::Command => "command",
            LineStyle::Output => "output",
            LineStyle::Error => "error",
            LineStyle::Info => "info",
            LineStyle::Success => "success",
            LineStyle::Warning => "warning",
        }
    }

    /// Resolve a tag name back to a style.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }
}
