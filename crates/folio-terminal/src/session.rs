//! Interpreter session: submission, history recall and completion.
//!
//! A `Session` owns the registry, the history and the scrollback. Every
//! operation runs to completion synchronously and reports through a
//! `ViewSink`; nothing is ever returned as an error.

use folio_types::error::FolioError;
use folio_types::input::{Direction, InputEvent};
use folio_types::profile::Profile;

use crate::history::History;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment, fold};
use crate::scrollback::{Line, Scrollback, ViewSink};

/// Hint rendered after an unrecognised command.
pub const HELP_HINT: &str = "Type 'help' to see available commands.";

/// One interactive terminal session.
pub struct Session {
    registry: CommandRegistry,
    profile: Profile,
    history: History,
    scrollback: Scrollback,
    edit_line: String,
}

impl Session {
    /// Start a session. The registry is frozen from here on.
    pub fn new(registry: CommandRegistry, profile: Profile) -> Self {
        log::debug!("session started with {} commands", registry.len());
        Self {
            registry,
            profile,
            history: History::new(),
            scrollback: Scrollback::new(),
            edit_line: String::new(),
        }
    }

    /// Dispatch one input event to the matching operation.
    pub fn handle(&mut self, event: InputEvent, view: &mut dyn ViewSink) {
        match event {
            InputEvent::Submit(line) => self.submit(&line, view),
            InputEvent::Navigate(direction) => self.navigate_history(direction),
            InputEvent::RequestCompletion(partial) => self.complete(&partial, view),
        }
    }

    /// Interpret one line of input.
    ///
    /// The raw line is always echoed. Empty lines stop there. Known commands
    /// render their output; unknown ones render an error, a hint and, when
    /// anything resembles the typed name, a suggestion line.
    pub fn submit(&mut self, raw: &str, view: &mut dyn ViewSink) {
        let trimmed = raw.trim();
        self.history.record(trimmed);
        self.edit_line.clear();
        self.print(Line::prompt(raw), view);

        let mut tokens = trimmed.split_whitespace();
        let Some(typed) = tokens.next() else {
            return;
        };
        let args: Vec<&str> = tokens.collect();
        let name = fold(typed);

        let result = self.registry.get(&name).map(|command| {
            let env = Environment {
                profile: &self.profile,
                registry: &self.registry,
            };
            command.execute(&args, &env)
        });

        match result {
            Some(Ok(CommandOutput::Text(text))) => {
                if !text.is_empty() {
                    self.print(Line::output(text), view);
                }
            },
            Some(Ok(CommandOutput::None)) => {},
            Some(Ok(CommandOutput::Clear)) => {
                self.scrollback.clear();
                view.clear();
            },
            Some(Err(e)) => {
                log::warn!("command '{name}' failed: {e}");
                let message = match e {
                    FolioError::Command(msg) => format!("{name}: {msg}"),
                    other => format!("{name}: {other}"),
                };
                self.print(Line::error(message), view);
            },
            None => self.report_unknown(typed, view),
        }
    }

    fn report_unknown(&mut self, typed: &str, view: &mut dyn ViewSink) {
        log::debug!("unknown command '{typed}'");
        let suggestions = self.registry.suggestions(typed).join(", ");
        self.print(Line::error(format!("command not found: {typed}")), view);
        self.print(Line::info(HELP_HINT), view);
        if !suggestions.is_empty() {
            self.print(Line::info(format!("Did you mean: {suggestions}?")), view);
        }
    }

    /// Move through history, updating the edit line.
    pub fn navigate_history(&mut self, direction: Direction) {
        match direction {
            Direction::Older => {
                if let Some(entry) = self.history.older() {
                    self.edit_line = entry.to_string();
                }
            },
            Direction::Newer => {
                self.edit_line = self.history.newer().to_string();
            },
        }
    }

    /// Complete a partially typed command name.
    ///
    /// A single match replaces the edit line; several matches are listed in
    /// an info line and leave the edit line alone.
    pub fn complete(&mut self, partial: &str, view: &mut dyn ViewSink) {
        let matches: Vec<String> = self
            .registry
            .completions(partial)
            .into_iter()
            .map(str::to_string)
            .collect();
        log::debug!("completing '{partial}': {} candidates", matches.len());
        match matches.as_slice() {
            [] => {},
            [only] => self.edit_line = only.clone(),
            many => {
                let listing = many.join(", ");
                self.print(Line::info(listing), view);
            },
        }
    }

    /// Append a line to the scrollback and show it.
    ///
    /// Used by the interpreter itself and by front ends for out-of-band
    /// lines such as the intro sequence.
    pub fn print(&mut self, line: Line, view: &mut dyn ViewSink) {
        view.render(&line);
        view.scroll_to_end();
        self.scrollback.push(line);
    }

    /// The transient line being edited.
    pub fn edit_line(&self) -> &str {
        &self.edit_line
    }

    /// Replace the edit line (typing, deleting).
    pub fn set_edit_line(&mut self, text: impl Into<String>) {
        self.edit_line = text.into();
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Command;
    use folio_types::error::Result;
    use folio_types::style::LineStyle;
    use proptest::prelude::*;

    /// Records everything the session sends to the view.
    #[derive(Default)]
    struct Recorder {
        lines: Vec<Line>,
        clears: usize,
        scrolls: usize,
    }

    impl ViewSink for Recorder {
        fn render(&mut self, line: &Line) {
            self.lines.push(line.clone());
        }
        fn scroll_to_end(&mut self) {
            self.scrolls += 1;
        }
        fn clear(&mut self) {
            self.lines.clear();
            self.clears += 1;
        }
    }

    struct Canned(&'static str, &'static str);
    impl Command for Canned {
        fn name(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            "canned"
        }
        fn usage(&self) -> &str {
            self.0
        }
        fn execute(&self, args: &[&str], _: &Environment<'_>) -> Result<CommandOutput> {
            if args.is_empty() {
                Ok(CommandOutput::Text(self.1.to_string()))
            } else {
                Ok(CommandOutput::Text(format!("{} [{}]", self.1, args.join("|"))))
            }
        }
    }

    struct Silent;
    impl Command for Silent {
        fn name(&self) -> &str {
            "silent"
        }
        fn description(&self) -> &str {
            "prints nothing"
        }
        fn usage(&self) -> &str {
            "silent"
        }
        fn execute(&self, _: &[&str], _: &Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(String::new()))
        }
    }

    struct Wipe;
    impl Command for Wipe {
        fn name(&self) -> &str {
            "clear"
        }
        fn description(&self) -> &str {
            "clear"
        }
        fn usage(&self) -> &str {
            "clear"
        }
        fn execute(&self, _: &[&str], _: &Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Clear)
        }
    }

    struct Broken;
    impl Command for Broken {
        fn name(&self) -> &str {
            "broken"
        }
        fn description(&self) -> &str {
            "fails"
        }
        fn usage(&self) -> &str {
            "broken"
        }
        fn execute(&self, _: &[&str], _: &Environment<'_>) -> Result<CommandOutput> {
            Err(FolioError::Command("not today".into()))
        }
    }

    fn session() -> Session {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Canned("help", "HELP TEXT")));
        reg.register(Box::new(Canned("history", "HISTORY TEXT")));
        reg.register(Box::new(Canned("skills", "SKILLS TEXT")));
        reg.register(Box::new(Silent));
        reg.register(Box::new(Broken));
        reg.register(Box::new(Wipe));
        Session::new(reg, Profile::default())
    }

    fn styles(lines: &[Line]) -> Vec<LineStyle> {
        lines.iter().map(|l| l.style).collect()
    }

    #[test]
    fn known_command_echoes_then_outputs() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("skills", &mut view);
        assert_eq!(
            view.lines,
            vec![Line::prompt("skills"), Line::output("SKILLS TEXT")]
        );
        assert_eq!(s.scrollback().lines(), view.lines.as_slice());
        assert_eq!(view.scrolls, 2);
    }

    #[test]
    fn arguments_pass_through_unmodified() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("  skills   Front-End  \"db\"  ", &mut view);
        assert_eq!(
            view.lines[1],
            Line::output("SKILLS TEXT [Front-End|\"db\"]")
        );
    }

    #[test]
    fn echo_keeps_raw_input() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("  help ", &mut view);
        assert_eq!(view.lines[0], Line::prompt("  help "));
        assert_eq!(s.history().entries(), ["help"]);
    }

    #[test]
    fn empty_output_renders_nothing_extra() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("silent", &mut view);
        assert_eq!(styles(&view.lines), [LineStyle::Prompt]);
    }

    #[test]
    fn empty_and_blank_lines_only_echo() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("", &mut view);
        s.submit("   ", &mut view);
        assert_eq!(styles(&view.lines), [LineStyle::Prompt, LineStyle::Prompt]);
        assert!(s.history().is_empty());
    }

    #[test]
    fn unknown_command_with_suggestion() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("skils", &mut view);
        assert_eq!(
            view.lines,
            vec![
                Line::prompt("skils"),
                Line::error("command not found: skils"),
                Line::info(HELP_HINT),
                Line::info("Did you mean: skills?"),
            ]
        );
    }

    #[test]
    fn unknown_command_without_suggestion() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("xyz123", &mut view);
        assert_eq!(
            view.lines,
            vec![
                Line::prompt("xyz123"),
                Line::error("command not found: xyz123"),
                Line::info(HELP_HINT),
            ]
        );
    }

    #[test]
    fn suggestions_keep_registry_order() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("h", &mut view);
        assert_eq!(
            view.lines.last(),
            Some(&Line::info("Did you mean: help, history?"))
        );
    }

    #[test]
    fn handler_error_is_rendered_not_raised() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("BROKEN", &mut view);
        assert_eq!(view.lines[1], Line::error("broken: not today"));
        assert_eq!(s.history().entries(), ["BROKEN"]);
    }

    #[test]
    fn clear_empties_scrollback_and_view() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("help", &mut view);
        s.submit("nope", &mut view);
        s.submit("clear", &mut view);
        assert!(s.scrollback().is_empty());
        assert!(view.lines.is_empty());
        assert_eq!(view.clears, 1);
        assert_eq!(s.history().entries(), ["help", "nope", "clear"]);
    }

    #[test]
    fn navigate_older_then_newer() {
        let mut s = session();
        let mut view = Recorder::default();
        s.submit("help", &mut view);
        s.submit("skills", &mut view);
        s.navigate_history(Direction::Older);
        assert_eq!(s.edit_line(), "skills");
        s.navigate_history(Direction::Older);
        assert_eq!(s.edit_line(), "help");
        s.navigate_history(Direction::Older);
        assert_eq!(s.edit_line(), "help");
        s.navigate_history(Direction::Newer);
        assert_eq!(s.edit_line(), "skills");
        s.navigate_history(Direction::Newer);
        assert_eq!(s.edit_line(), "");
        assert!(s.history().is_past_end());
    }

    #[test]
    fn navigate_on_empty_history_keeps_edit_line() {
        let mut s = session();
        s.set_edit_line("he");
        s.navigate_history(Direction::Older);
        assert_eq!(s.edit_line(), "he");
    }

    #[test]
    fn complete_single_match_replaces_edit_line() {
        let mut s = session();
        let mut view = Recorder::default();
        s.set_edit_line("sk");
        s.complete("sk", &mut view);
        assert_eq!(s.edit_line(), "skills");
        assert!(view.lines.is_empty());
    }

    #[test]
    fn complete_multiple_matches_lists_them() {
        let mut s = session();
        let mut view = Recorder::default();
        s.set_edit_line("h");
        s.complete("H", &mut view);
        assert_eq!(s.edit_line(), "h");
        assert_eq!(view.lines, vec![Line::info("help, history")]);
    }

    #[test]
    fn complete_no_match_is_noop() {
        let mut s = session();
        let mut view = Recorder::default();
        s.set_edit_line("zz");
        s.complete("zz", &mut view);
        assert_eq!(s.edit_line(), "zz");
        assert!(view.lines.is_empty());
        assert!(s.scrollback().is_empty());
    }

    #[test]
    fn handle_dispatches_events() {
        let mut s = session();
        let mut view = Recorder::default();
        s.handle(InputEvent::Submit("help".into()), &mut view);
        s.handle(InputEvent::Navigate(Direction::Older), &mut view);
        assert_eq!(s.edit_line(), "help");
        s.handle(InputEvent::RequestCompletion("sil".into()), &mut view);
        assert_eq!(s.edit_line(), "silent");
    }

    #[test]
    fn print_appends_out_of_band_lines() {
        let mut s = session();
        let mut view = Recorder::default();
        s.print(Line::success("hello"), &mut view);
        assert_eq!(s.scrollback().len(), 1);
        assert!(s.history().is_empty());
    }

    fn casing_of(name: &'static str) -> impl Strategy<Value = String> {
        proptest::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
            name.chars()
                .zip(upper)
                .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn any_casing_dispatches(typed in casing_of("skills")) {
            let mut s = session();
            let mut view = Recorder::default();
            s.submit(&typed, &mut view);
            prop_assert_eq!(view.lines.last(), Some(&Line::output("SKILLS TEXT")));
        }

        #[test]
        fn cursor_is_past_end_after_submit(
            lines in proptest::collection::vec("[a-z ]{0,8}", 0..12),
            steps in proptest::collection::vec(any::<bool>(), 0..6),
        ) {
            let mut s = session();
            let mut view = Recorder::default();
            for line in &lines {
                s.submit(line, &mut view);
                prop_assert!(s.history().is_past_end());
                for &older in &steps {
                    let dir = if older { Direction::Older } else { Direction::Newer };
                    s.navigate_history(dir);
                }
            }
        }

        #[test]
        fn repeated_submission_grows_history_once(line in "[a-z]{1,8}( [a-z]{1,4})?") {
            let mut s = session();
            let mut view = Recorder::default();
            s.submit(&line, &mut view);
            let before = s.history().len();
            s.submit(&line, &mut view);
            prop_assert_eq!(s.history().len(), before);
            prop_assert_eq!(before, 1);
        }
    }
}
