//! Lightweight style markup embedded in command output.
//!
//! Commands may wrap fragments of their text in tags named after a
//! [`LineStyle`] (`<warning>no such group</warning>`). The interpreter never
//! looks inside; views call [`parse`] to split a line into styled spans.
//! Tags that do not name a style, and closing tags that do not match the
//! innermost open tag, are kept as literal text.

use folio_types::style::LineStyle;

/// A run of text drawn in a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: LineStyle,
}

/// Wrap `text` in a style tag.
pub fn wrap(style: LineStyle, text: &str) -> String {
    format!("<{tag}>{text}</{tag}>", tag = style.tag())
}

/// Split markup into spans. Text outside any tag gets `base`.
///
/// An unclosed tag styles everything after it.
pub fn parse(text: &str, base: LineStyle) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut stack: Vec<LineStyle> = Vec::new();
    let mut current = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        current.push_str(&rest[..open]);
        let after = &rest[open..];
        let Some(close) = after.find('>') else {
            rest = after;
            break;
        };
        let tag = &after[1..close];
        let active = stack.last().copied().unwrap_or(base);

        if let Some(name) = tag.strip_prefix('/') {
            if stack.last().is_some_and(|s| s.tag() == name) {
                flush(&mut spans, &mut current, active);
                stack.pop();
                rest = &after[close + 1..];
                continue;
            }
        } else if let Some(style) = LineStyle::from_tag(tag) {
            flush(&mut spans, &mut current, active);
            stack.push(style);
            rest = &after[close + 1..];
            continue;
        }

        // Not a recognised tag: keep the '<' and scan on.
        current.push('<');
        rest = &after[1..];
    }

    current.push_str(rest);
    flush(&mut spans, &mut current, stack.last().copied().unwrap_or(base));
    spans
}

/// Remove all recognised tags, leaving plain text.
pub fn strip(text: &str) -> String {
    parse(text, LineStyle::Output)
        .into_iter()
        .map(|span| span.text)
        .collect()
}

fn flush(spans: &mut Vec<Span>, current: &mut String, style: LineStyle) {
    if current.is_empty() {
        return;
    }
    let text = std::mem::take(current);
    // Merge with the previous span when the style did not change.
    if let Some(prev) = spans.last_mut()
        && prev.style == style
    {
        prev.text.push_str(&text);
        return;
    }
    spans.push(Span { text, style });
}
