//! Scripted intro sequence played before the session accepts input.
//!
//! Mirrors a short terminal demo: `cat about.txt`, `ls skills/` and
//! `echo $MOTTO`, each followed by its output. Front ends sleep for each
//! step's delay and then print its line through `Session::print`, so the
//! sequence lands in the scrollback but never in the history.

use std::time::Duration;

use folio_types::profile::Profile;

use crate::scrollback::Line;

/// Pause before a command line appears.
pub const COMMAND_DELAY: Duration = Duration::from_millis(1000);
/// Pause before an output line appears.
pub const OUTPUT_DELAY: Duration = Duration::from_millis(800);

/// One line of the intro and how long to wait before showing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroStep {
    pub delay: Duration,
    pub line: Line,
}

impl IntroStep {
    fn command(text: &str) -> Self {
        Self {
            delay: COMMAND_DELAY,
            line: Line::prompt(text),
        }
    }

    fn output(text: impl Into<String>) -> Self {
        Self {
            delay: OUTPUT_DELAY,
            line: Line::output(text),
        }
    }
}

/// Build the intro for a profile. Empty profile sections skip their step.
pub fn script(profile: &Profile) -> Vec<IntroStep> {
    let mut steps = Vec::new();

    if !profile.about.is_empty() {
        steps.push(IntroStep::command("cat about.txt"));
        steps.extend(profile.about.iter().map(|l| IntroStep::output(l.as_str())));
    }

    if !profile.skills.is_empty() {
        steps.push(IntroStep::command("ls skills/"));
        let listing: Vec<String> = profile
            .skills
            .iter()
            .map(|g| format!("{}/", g.name))
            .collect();
        steps.push(IntroStep::output(listing.join("  ")));
    }

    if !profile.motto.is_empty() {
        steps.push(IntroStep::command("echo $MOTTO"));
        steps.push(IntroStep::output(format!("\"{}\"", profile.motto)));
    }

    steps
}
